//! Hand the signed request over to curl.
//!
//! curl is invoked as
//!
//! ```text
//! curl -s -S --header "X-Amzn-Authorization: <auth>" --header "x-amz-date: <date>" <params>...
//! ```
//!
//! with stdio inherited, so the response body and curl's own diagnostics reach
//! the user unchanged. The invocation's result is curl's exit code.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Context;
use awsdnsauth_auth::SignedHeaders;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{DnsAuthError, DnsAuthResult};

/// Flags always passed to curl: silent, but still show errors.
pub const CURL_BASE_ARGS: [&str; 2] = ["-s", "-S"];

/// A curl command line carrying the signed headers.
#[derive(Debug, Clone)]
pub struct CurlRequest {
    program: PathBuf,
    args: Vec<OsString>,
}

impl CurlRequest {
    /// Build the command line: base flags, signed headers, then `params` verbatim.
    pub fn new<I, S>(program: impl Into<PathBuf>, headers: &SignedHeaders, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args: Vec<OsString> = CURL_BASE_ARGS.into_iter().map(OsString::from).collect();
        for (name, value) in headers.pairs() {
            args.push("--header".into());
            args.push(format!("{name}: {value}").into());
        }
        args.extend(params.into_iter().map(Into::into));

        Self {
            program: program.into(),
            args,
        }
    }

    /// The executable to run.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the executable.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Run curl and wait for it, returning its exit code.
    ///
    /// curl is killed if the returned future is dropped before it exits. A
    /// curl terminated by SIGINT shares the user's interrupt and is reported
    /// as [`DnsAuthError::Interrupted`].
    pub async fn execute(&self) -> DnsAuthResult<i32> {
        info!(program = %self.program.display(), "forwarding signed request");
        debug!(args = ?self.args, "curl command line");

        let status = Command::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .status()
            .await
            .with_context(|| format!("failed to run {}", self.program.display()))
            .map_err(DnsAuthError::Transport)?;

        if interrupted(status) {
            info!("curl interrupted");
            return Err(DnsAuthError::Interrupted);
        }

        let code = exit_code(status);
        debug!(code, "curl exited");
        Ok(code)
    }
}

/// Whether the process was killed by SIGINT.
fn interrupted(status: ExitStatus) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        const SIGINT: i32 = 2;
        status.signal() == Some(SIGINT)
    }

    #[cfg(not(unix))]
    {
        let _ = status;
        false
    }
}

/// Exit code of a finished process; `128 + signal` for a signalled process on Unix.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
