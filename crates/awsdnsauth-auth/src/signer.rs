//! AWS3-HTTPS request signing.
//!
//! Route 53 accepts requests authenticated with the `X-Amzn-Authorization`
//! header:
//!
//! ```text
//! AWS3-HTTPS AWSAccessKeyId=<AccessKeyId>,Algorithm=HmacSHA256,Signature=<Signature>
//! ```
//!
//! Where `Signature = Base64(HMAC-SHA256(SecretKey, Date))` and `Date` is the
//! exact value sent in the `x-amz-date` header. The server rejects requests
//! whose date is too far from its own clock.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use http::{HeaderMap, HeaderName, HeaderValue};
use sha2::Sha256;
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::AuthError;

/// Header carrying the AWS3-HTTPS authorization value.
pub const AUTHORIZATION_HEADER: &str = "X-Amzn-Authorization";

/// Header carrying the signed timestamp.
pub const DATE_HEADER: &str = "x-amz-date";

/// Authentication scheme prefix of the authorization value.
pub const SCHEME: &str = "AWS3-HTTPS";

/// Algorithm name advertised in the authorization value.
pub const ALGORITHM: &str = "HmacSHA256";

type HmacSha256 = Hmac<Sha256>;

/// A base64-encoded HMAC-SHA256 signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    /// The signature as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute `Base64(HMAC-SHA256(secret_key, timestamp))`.
///
/// The timestamp is signed verbatim, so an empty timestamp still produces a
/// deterministic signature.
pub fn sign(timestamp: &str, secret_key: &str) -> Result<Signature, AuthError> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|_| AuthError::InvalidSigningKey)?;
    mac.update(timestamp.as_bytes());
    let digest = mac.finalize().into_bytes();
    Ok(Signature(BASE64.encode(digest)))
}

/// Assemble the `X-Amzn-Authorization` value.
///
/// Neither argument is validated or escaped.
#[must_use]
pub fn build_auth_header(access_key_id: &str, signature: &str) -> String {
    format!("{SCHEME} AWSAccessKeyId={access_key_id},Algorithm={ALGORITHM},Signature={signature}")
}

/// The two headers that authenticate a Route 53 request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    authorization: String,
    date: String,
}

impl SignedHeaders {
    /// Value of the `X-Amzn-Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Value of the `x-amz-date` header.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Header name/value pairs, authorization first.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (AUTHORIZATION_HEADER, &self.authorization),
            (DATE_HEADER, &self.date),
        ]
    }

    /// Build an [`HeaderMap`] holding both headers.
    pub fn to_header_map(&self) -> Result<HeaderMap, AuthError> {
        let mut map = HeaderMap::with_capacity(2);
        for (name, value) in self.pairs() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AuthError::InvalidHeaderValue(name))?;
            let value =
                HeaderValue::from_str(value).map_err(|_| AuthError::InvalidHeaderValue(name))?;
            map.insert(header_name, value);
        }
        Ok(map)
    }
}

/// Signs request dates with one set of credentials.
#[derive(Debug, Clone, Copy)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer for the given credentials.
    #[must_use]
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Sign `timestamp` and build both request headers.
    pub fn sign_date(&self, timestamp: &str) -> Result<SignedHeaders, AuthError> {
        let signature = sign(timestamp, self.credentials.secret_key())?;
        let authorization =
            build_auth_header(self.credentials.access_key_id(), signature.as_str());

        debug!(
            access_key_id = %self.credentials.access_key_id(),
            date = %timestamp,
            signature = %signature,
            "signed request date"
        );

        Ok(SignedHeaders {
            authorization,
            date: timestamp.to_owned(),
        })
    }
}
