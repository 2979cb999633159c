//! One signed request, from credentials file to curl exit code.

use std::ffi::OsString;
use std::path::PathBuf;

use awsdnsauth_auth::{Credentials, RequestSigner};
use tracing::info;

use crate::config::DnsAuthConfig;
use crate::error::DnsAuthResult;
use crate::forward::CurlRequest;

/// What the user asked for on the command line.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Credentials file to sign with.
    pub credentials_path: PathBuf,
    /// Take the date from Route 53 instead of the local clock.
    pub amazon_date: bool,
    /// Parameters handed to curl after the signed headers, starting with the URL.
    pub curl_parameters: Vec<OsString>,
}

impl Invocation {
    /// Load credentials, fetch a fresh date and sign it.
    ///
    /// Fails at the first error; nothing is retried.
    pub async fn prepare(&self, config: &DnsAuthConfig) -> DnsAuthResult<CurlRequest> {
        let credentials = Credentials::from_file(&self.credentials_path)?;
        let date = config.date_source(self.amazon_date).fetch().await?;
        let headers = RequestSigner::new(&credentials).sign_date(&date)?;

        Ok(CurlRequest::new(
            &config.curl_path,
            &headers,
            self.curl_parameters.iter().cloned(),
        ))
    }

    /// Prepare the request and run curl, returning curl's exit code.
    pub async fn run(&self, config: &DnsAuthConfig) -> DnsAuthResult<i32> {
        let request = self.prepare(config).await?;
        let code = request.execute().await?;
        info!(code, "request finished");
        Ok(code)
    }
}
