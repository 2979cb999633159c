//! Runtime configuration.
//!
//! All configuration is driven by environment variables; command-line flags
//! only select per-invocation behavior.

use crate::date::{DEFAULT_DATE_URL, DateSource};

/// Global configuration for awsdnsauth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAuthConfig {
    /// curl executable, resolved through `PATH` when not absolute.
    pub curl_path: String,
    /// Endpoint whose `Date` response header provides the remote date.
    pub date_url: String,
    /// Log level filter.
    pub log_level: String,
}

impl Default for DnsAuthConfig {
    fn default() -> Self {
        Self {
            curl_path: "curl".to_owned(),
            date_url: DEFAULT_DATE_URL.to_owned(),
            log_level: "warn".to_owned(),
        }
    }
}

impl DnsAuthConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("CURL_PATH") {
            config.curl_path = v;
        }
        if let Some(v) = lookup("ROUTE53_DATE_URL") {
            config.date_url = v;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Log filter to use, raised to `info` when `verbose` is set.
    #[must_use]
    pub fn log_filter(&self, verbose: bool) -> &str {
        let quiet = matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "off" | "error" | "warn"
        );
        if verbose && quiet {
            "info"
        } else {
            self.log_level.as_str()
        }
    }

    /// Where to take the request date from.
    #[must_use]
    pub fn date_source(&self, amazon_date: bool) -> DateSource {
        if amazon_date {
            DateSource::remote(&self.date_url)
        } else {
            DateSource::Local
        }
    }
}
