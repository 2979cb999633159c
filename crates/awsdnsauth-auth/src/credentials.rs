//! Route 53 credentials and the credentials-file loader.
//!
//! The credentials file is a small INI document:
//!
//! ```text
//! [credentials]
//! AWS_ACCESS_KEY=<access key>
//! AWS_SECRET_KEY=<secret key>
//! ```
//!
//! Section and key names are case-insensitive, `=` or `:` separates a key from
//! its value, and lines starting with `#` or `;` are comments. The file must
//! only be accessible by its owner.

use std::fmt;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

use crate::error::AuthError;

/// Name of the INI section holding the keys.
pub const CREDENTIALS_SECTION: &str = "credentials";

/// Key holding the access key ID.
pub const ACCESS_KEY_NAME: &str = "AWS_ACCESS_KEY";

/// Key holding the secret access key.
pub const SECRET_KEY_NAME: &str = "AWS_SECRET_KEY";

/// An access key ID and its secret key.
///
/// The secret is wrapped in [`SecretString`], so it is redacted from `Debug`
/// output and zeroed on drop.
#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create credentials from already-known values.
    pub fn new(access_key_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Load credentials from a file, refusing files readable by other users.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();

        check_permissions(path)?;

        info!(path = %path.display(), "reading credentials");
        let contents =
            std::fs::read_to_string(path).map_err(|source| AuthError::CredentialsUnreadable {
                path: path.to_owned(),
                source,
            })?;

        let credentials = Self::parse(&contents)?;
        debug!(access_key_id = %credentials.access_key_id, "loaded credentials");
        Ok(credentials)
    }

    /// Parse the contents of a credentials file.
    pub fn parse(contents: &str) -> Result<Self, AuthError> {
        // `None` until the first section header, then whether we are inside
        // the credentials section.
        let mut in_section: Option<bool> = None;
        let mut seen_section = false;
        let mut access_key_id = None;
        let mut secret_key = None;

        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let matches = name.trim().eq_ignore_ascii_case(CREDENTIALS_SECTION);
                seen_section |= matches;
                in_section = Some(matches);
                continue;
            }

            let (Some(active), Some((key, value))) = (in_section, line.split_once(['=', ':']))
            else {
                return Err(AuthError::MalformedLine { line: idx + 1 });
            };
            if !active {
                continue;
            }

            let key = key.trim();
            let (name, slot) = if key.eq_ignore_ascii_case(ACCESS_KEY_NAME) {
                (ACCESS_KEY_NAME, &mut access_key_id)
            } else if key.eq_ignore_ascii_case(SECRET_KEY_NAME) {
                (SECRET_KEY_NAME, &mut secret_key)
            } else {
                continue;
            };
            if slot.replace(value.trim().to_owned()).is_some() {
                return Err(AuthError::DuplicateKey {
                    key: name.to_owned(),
                    line: idx + 1,
                });
            }
        }

        if !seen_section {
            return Err(AuthError::MissingSection(CREDENTIALS_SECTION.to_owned()));
        }

        let access_key_id = require(access_key_id, ACCESS_KEY_NAME)?;
        let secret_key = require(secret_key, SECRET_KEY_NAME)?;
        Ok(Self::new(access_key_id, secret_key))
    }

    /// The access key ID. Safe to log.
    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Expose the secret key for signing. Never log the returned value.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

fn require(value: Option<String>, key: &str) -> Result<String, AuthError> {
    match value {
        None => Err(AuthError::MissingKey {
            key: key.to_owned(),
        }),
        Some(v) if v.is_empty() => Err(AuthError::EmptyValue {
            key: key.to_owned(),
        }),
        Some(v) => Ok(v),
    }
}

#[cfg(unix)]
fn check_permissions(path: &Path) -> Result<(), AuthError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path).map_err(|source| AuthError::CredentialsUnreadable {
        path: path.to_owned(),
        source,
    })?;
    let mode = metadata.permissions().mode() & 0o777;
    if mode & 0o077 != 0 {
        return Err(AuthError::InsecurePermissions {
            path: path.to_owned(),
            mode,
        });
    }
    Ok(())
}

#[cfg(not(unix))]
fn check_permissions(_path: &Path) -> Result<(), AuthError> {
    Ok(())
}
