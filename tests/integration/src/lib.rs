//! Integration tests for awsdnsauth.
//!
//! Most tests run against a fake curl script and need nothing else. Tests that
//! talk to the real Route 53 endpoint are marked `#[ignore]`.
//!
//! Run them with:
//! ```text
//! cargo test -p awsdnsauth-integration -- --ignored
//! ```

use std::path::{Path, PathBuf};
use std::sync::Once;

use awsdnsauth_core::{DnsAuthConfig, Invocation};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Write a credentials file with the given permission bits.
#[cfg(unix)]
#[must_use]
pub fn write_credentials(dir: &Path, contents: &str, mode: u32) -> PathBuf {
    let path = dir.join("credentials");
    write_with_mode(&path, contents, mode);
    path
}

/// Write a fake curl that records its arguments, one per line, and exits with `code`.
///
/// Returns the script path and the path the arguments are recorded to.
#[cfg(unix)]
#[must_use]
pub fn fake_curl(dir: &Path, code: i32) -> (PathBuf, PathBuf) {
    let script = dir.join("curl");
    let recorded = dir.join("curl-args.txt");
    let body = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {code}\n",
        recorded.display()
    );
    write_with_mode(&script, &body, 0o755);
    (script, recorded)
}

/// Arguments recorded by [`fake_curl`], if it ran.
#[must_use]
pub fn recorded_args(recorded: &Path) -> Option<Vec<String>> {
    let contents = std::fs::read_to_string(recorded).ok()?;
    Some(contents.lines().map(ToOwned::to_owned).collect())
}

/// Build an invocation and a config running `curl` against `url`.
#[must_use]
pub fn invocation(credentials: PathBuf, curl: &Path, url: &str) -> (Invocation, DnsAuthConfig) {
    init_tracing();

    let invocation = Invocation {
        credentials_path: credentials,
        amazon_date: false,
        curl_parameters: vec![url.into()],
    };
    let config = DnsAuthConfig {
        curl_path: curl.display().to_string(),
        ..DnsAuthConfig::default()
    };
    (invocation, config)
}

#[cfg(unix)]
fn write_with_mode(path: &Path, contents: &str, mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, contents).unwrap_or_else(|e| panic!("failed to write {path:?}: {e}"));
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .unwrap_or_else(|e| panic!("failed to chmod {path:?}: {e}"));
}

mod test_route53;
mod test_signing;
