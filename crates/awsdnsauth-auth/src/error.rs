//! Error types for credential loading and request signing.
//!
//! Every failure is represented by [`AuthError`]. Callers that need to tell
//! configuration problems apart from signing problems use
//! [`AuthError::is_signing_error`].

use std::path::PathBuf;

/// Errors that can occur while loading credentials or signing a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The credentials file could not be read.
    #[error("cannot read credentials file {}", path.display())]
    CredentialsUnreadable {
        /// Path of the credentials file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The credentials file is accessible by users other than its owner.
    #[error(
        "credentials file {} must be restricted to your own user (mode {mode:o}), use chmod 600 {}",
        path.display(),
        path.display()
    )]
    InsecurePermissions {
        /// Path of the credentials file.
        path: PathBuf,
        /// Permission bits found on the file.
        mode: u32,
    },

    /// The `[credentials]` section is absent.
    #[error("missing [{0}] section in credentials file")]
    MissingSection(String),

    /// A required key is absent from the credentials section.
    #[error("missing key {key} in credentials file")]
    MissingKey {
        /// Name of the missing key.
        key: String,
    },

    /// A required key is present but has no value.
    #[error("key {key} in credentials file has an empty value")]
    EmptyValue {
        /// Name of the empty key.
        key: String,
    },

    /// A key appears more than once in the credentials section.
    #[error("key {key} appears more than once in credentials file (line {line})")]
    DuplicateKey {
        /// Name of the repeated key.
        key: String,
        /// One-based line number of the repetition.
        line: usize,
    },

    /// A line of the credentials file could not be parsed.
    #[error("malformed credentials file at line {line}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
    },

    /// The secret key was rejected by the HMAC implementation.
    #[error("secret key cannot be used as an HMAC-SHA256 key")]
    InvalidSigningKey,

    /// A signed header value is not a legal HTTP header value.
    #[error("value of header {0} is not a valid HTTP header value")]
    InvalidHeaderValue(&'static str),
}

impl AuthError {
    /// Whether the error happened while computing the signature rather than
    /// while loading credentials.
    #[must_use]
    pub fn is_signing_error(&self) -> bool {
        matches!(self, Self::InvalidSigningKey | Self::InvalidHeaderValue(_))
    }
}
