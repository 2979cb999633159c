//! Signing properties checked through the public API.

#[cfg(test)]
mod tests {
    use awsdnsauth_auth::{Credentials, RequestSigner, build_auth_header, sign};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;

    #[test]
    fn test_should_match_reference_signature_for_aws_example_key() {
        let sig = sign(
            "Thu, 14 Aug 2013 00:00:00 GMT",
            "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
        )
        .unwrap();
        assert_eq!(sig.as_str(), "cmQq24XtPfy7Hv+APbxLYCjO24rEwtTTGYleIwimnBQ=");

        let digest = BASE64.decode(sig.as_str()).unwrap();
        assert_eq!(digest.len(), 32);
    }

    #[test]
    fn test_should_build_vendor_header_exactly() {
        let header = build_auth_header("AKIDEXAMPLE", "c2lnbmF0dXJl");
        assert_eq!(
            header,
            "AWS3-HTTPS AWSAccessKeyId=AKIDEXAMPLE,Algorithm=HmacSHA256,Signature=c2lnbmF0dXJl"
        );
        assert_eq!(header, build_auth_header("AKIDEXAMPLE", "c2lnbmF0dXJl"));
    }

    #[test]
    fn test_should_sign_end_to_end_scenario() {
        let creds = Credentials::parse("[credentials]\nAWS_ACCESS_KEY=ABC123\nAWS_SECRET_KEY=secret\n")
            .unwrap();
        let headers = RequestSigner::new(&creds)
            .sign_date("Mon, 01 Jan 2024 00:00:00 GMT")
            .unwrap();

        let auth = headers.authorization();
        let signature = auth
            .strip_prefix("AWS3-HTTPS AWSAccessKeyId=ABC123,Algorithm=HmacSHA256,Signature=")
            .expect("authorization prefix");
        assert!(BASE64.decode(signature).is_ok(), "{signature} is not base64");
        assert_eq!(headers.date(), "Mon, 01 Jan 2024 00:00:00 GMT");
    }

    #[test]
    fn test_should_produce_fresh_signature_per_date() {
        let creds = Credentials::new("ABC123", "secret");
        let signer = RequestSigner::new(&creds);

        let first = signer.sign_date("Mon, 01 Jan 2024 00:00:00 GMT").unwrap();
        let again = signer.sign_date("Mon, 01 Jan 2024 00:00:00 GMT").unwrap();
        let later = signer.sign_date("Mon, 01 Jan 2024 00:05:00 GMT").unwrap();

        assert_eq!(first, again);
        assert_ne!(first.authorization(), later.authorization());
    }
}
