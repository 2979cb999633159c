//! Configuration, date sources and curl forwarding for awsdnsauth.
//!
//! This crate wires the signer from `awsdnsauth-auth` to the outside world: it
//! reads settings from the environment, obtains the request date from the
//! local clock or from Route 53, and runs curl with the signed headers.

mod config;
mod date;
mod error;
mod forward;
mod invocation;

pub use config::DnsAuthConfig;
pub use date::{DEFAULT_DATE_URL, DateSource, HTTP_DATE_FORMAT, format_http_date};
pub use error::{
    DnsAuthError, DnsAuthResult, EXIT_CONFIGURATION, EXIT_SIGNING, EXIT_TRANSPORT,
};
pub use forward::{CURL_BASE_ARGS, CurlRequest, exit_code};
pub use invocation::Invocation;
