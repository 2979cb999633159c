//! Error taxonomy for an awsdnsauth invocation.

use awsdnsauth_auth::AuthError;

/// Exit code for unusable credentials or settings.
pub const EXIT_CONFIGURATION: u8 = 101;

/// Exit code for a failure while computing the signature.
pub const EXIT_SIGNING: u8 = 102;

/// Exit code when the date could not be fetched or curl could not be started.
pub const EXIT_TRANSPORT: u8 = 103;

/// Every way an invocation can fail before curl reports its own result.
#[derive(Debug, thiserror::Error)]
pub enum DnsAuthError {
    /// Credentials file or settings are unusable.
    #[error("{0:#}")]
    Configuration(anyhow::Error),

    /// The signature could not be computed.
    #[error("signing failed: {0}")]
    Signing(#[source] AuthError),

    /// The remote date could not be fetched or curl could not be run.
    #[error("{0:#}")]
    Transport(anyhow::Error),

    /// The user interrupted the invocation.
    #[error("interrupted")]
    Interrupted,
}

impl DnsAuthError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => EXIT_CONFIGURATION,
            Self::Signing(_) => EXIT_SIGNING,
            Self::Transport(_) => EXIT_TRANSPORT,
            Self::Interrupted => 0,
        }
    }
}

impl From<AuthError> for DnsAuthError {
    fn from(err: AuthError) -> Self {
        if err.is_signing_error() {
            Self::Signing(err)
        } else {
            Self::Configuration(err.into())
        }
    }
}

/// Convenience result type for awsdnsauth operations.
pub type DnsAuthResult<T> = Result<T, DnsAuthError>;
