//! Tests against the live Route 53 date endpoint.

#[cfg(test)]
mod tests {
    use awsdnsauth_auth::{Credentials, RequestSigner};
    use awsdnsauth_core::{DEFAULT_DATE_URL, DateSource};

    #[tokio::test]
    #[ignore = "requires network access to route53.amazonaws.com"]
    async fn test_should_fetch_route53_date() {
        crate::init_tracing();

        let date = DateSource::remote(DEFAULT_DATE_URL).fetch().await.unwrap();
        assert!(date.ends_with("GMT"), "unexpected date format: {date}");

        let creds = Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        let headers = RequestSigner::new(&creds).sign_date(&date).unwrap();
        assert_eq!(headers.date(), date);
    }

    #[tokio::test]
    #[ignore = "requires network access to route53.amazonaws.com"]
    async fn test_should_be_rejected_with_example_credentials() {
        crate::init_tracing();

        let date = DateSource::remote(DEFAULT_DATE_URL).fetch().await.unwrap();
        let creds = Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        let headers = RequestSigner::new(&creds).sign_date(&date).unwrap();

        let response = reqwest::Client::new()
            .get("https://route53.amazonaws.com/2013-04-01/hostedzone")
            .headers(headers.to_header_map().unwrap())
            .send()
            .await
            .unwrap();

        // The example key does not exist, so the signature is checked and refused.
        assert_eq!(response.status(), reqwest::StatusCode::FORBIDDEN);
    }
}
