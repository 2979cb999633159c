//! awsdnsauth - AWS Route 53 authorization tool.
//!
//! Creates an AWS3-HTTPS authentication header for the Route 53 API and passes
//! it, together with the signed date, to curl.
//!
//! # Usage
//!
//! ```text
//! awsdnsauth -c ~/.aws-route53 https://route53.amazonaws.com/2013-04-01/hostedzone
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CURL_PATH` | `curl` | curl executable |
//! | `ROUTE53_DATE_URL` | `https://route53.amazonaws.com/date` | Endpoint used by `--amazon-date` |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |
//!
//! # Exit Status
//!
//! curl's exit status, or 101 (configuration), 102 (signing) or 103 (transport)
//! when the request could not be forwarded. An interrupt exits with 0.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use awsdnsauth_core::{DnsAuthConfig, DnsAuthError, DnsAuthResult, Invocation};
use clap::Parser;
use tracing::info;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::EnvFilter;

const CREDENTIALS_HELP: &str = "\
AWS Credentials File Format:
    [credentials]
    AWS_ACCESS_KEY=<access key>
    AWS_SECRET_KEY=<secret key>";

#[derive(Parser, Debug)]
#[command(
    name = "awsdnsauth",
    version,
    about = "Create an AWS Authentication v3 header for the Route 53 API and pass it to curl",
    after_help = CREDENTIALS_HELP
)]
struct Args {
    /// Path to a file containing AWS credentials
    #[arg(short, long, value_name = "FILE")]
    credentials: PathBuf,

    /// Use the date provided by Amazon instead of the local date
    #[arg(short = 'a', long = "amazon-date", visible_alias = "amazonDate")]
    amazon_date: bool,

    /// Display more information during execution
    #[arg(short, long)]
    verbose: bool,

    /// Parameters passed to curl, starting with the URL
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "CURL_PARAMETERS"
    )]
    curl_parameters: Vec<OsString>,
}

impl From<Args> for Invocation {
    fn from(args: Args) -> Self {
        Self {
            credentials_path: args.credentials,
            amazon_date: args.amazon_date,
            curl_parameters: args.curl_parameters,
        }
    }
}

/// Install the tracing subscriber for the lifetime of the returned guard.
///
/// Uses `RUST_LOG` if set, otherwise the configured log level. Logs go to
/// stderr so curl's output on stdout stays untouched.
fn init_tracing(config: &DnsAuthConfig, verbose: bool) -> Result<DefaultGuard, DnsAuthError> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = config.log_filter(verbose);
        EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level filter: {level}"))
            .map_err(DnsAuthError::Configuration)?
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    Ok(tracing::subscriber::set_default(subscriber))
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map_or_else(
            || "awsdnsauth".to_owned(),
            |name| name.to_string_lossy().into_owned(),
        )
}

/// The one-line diagnostic printed for a failed invocation.
fn diagnostic(program: &str, err: &DnsAuthError) -> String {
    format!("{program}: {err} (for help use --help)")
}

/// curl's exit code, or 1 if it does not fit a process exit status.
fn forwarded_exit_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

/// Exit status for the outcome of an invocation, plus the diagnostic to print.
fn conclude(program: &str, result: DnsAuthResult<i32>) -> (u8, Option<String>) {
    match result {
        Ok(code) => (forwarded_exit_code(code), None),
        Err(DnsAuthError::Interrupted) => {
            info!("interrupted, exiting");
            (0, None)
        }
        Err(err) => (err.exit_code(), Some(diagnostic(program, &err))),
    }
}

fn finish(program: &str, result: DnsAuthResult<i32>) -> ExitCode {
    let (code, message) = conclude(program, result);
    if let Some(message) = message {
        eprintln!("{message}");
    }
    ExitCode::from(code)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let program = program_name();
    let config = DnsAuthConfig::from_env();

    let _tracing = match init_tracing(&config, args.verbose) {
        Ok(guard) => guard,
        Err(err) => return finish(&program, Err(err)),
    };

    let invocation = Invocation::from(args);

    // Polled first so the handler is installed before curl starts.
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    let result = tokio::select! {
        biased;
        Ok(()) = &mut interrupt => Err(DnsAuthError::Interrupted),
        result = invocation.run(&config) => result,
    };

    finish(&program, result)
}
