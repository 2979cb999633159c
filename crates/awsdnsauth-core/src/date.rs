//! Sources for the signed request date.
//!
//! Route 53 rejects requests whose `x-amz-date` is too far from its own clock.
//! The local clock is normally good enough; when it is not, the date can be
//! taken from the `Date` header Route 53 returns on its `/date` endpoint.

use anyhow::{Context, anyhow};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{DnsAuthError, DnsAuthResult};

/// Route 53 endpoint returning the service's current date.
pub const DEFAULT_DATE_URL: &str = "https://route53.amazonaws.com/date";

/// RFC 7231 IMF-fixdate, e.g. `Thu, 14 Aug 2013 00:00:00 GMT`.
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

const USER_AGENT: &str = concat!("awsdnsauth/", env!("CARGO_PKG_VERSION"));

/// Where the request date comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSource {
    /// The local system clock.
    Local,
    /// The `Date` response header of a GET to `url`.
    Remote {
        /// Endpoint to query.
        url: String,
    },
}

impl DateSource {
    /// A remote source querying `url`.
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote { url: url.into() }
    }

    /// Obtain the current date as an HTTP-date string.
    ///
    /// An HTTP client is only built for remote sources.
    pub async fn fetch(&self) -> DnsAuthResult<String> {
        self.fetch_using(build_client).await
    }

    /// Like [`DateSource::fetch`], querying remote sources with `client`.
    pub async fn fetch_with(&self, client: &reqwest::Client) -> DnsAuthResult<String> {
        self.fetch_using(|| Ok(client.clone())).await
    }

    async fn fetch_using(
        &self,
        client: impl FnOnce() -> DnsAuthResult<reqwest::Client>,
    ) -> DnsAuthResult<String> {
        match self {
            Self::Local => Ok(local_date()),
            Self::Remote { url } => {
                info!(%url, "retrieving date from Amazon Route 53");
                let date = fetch_remote_date(&client()?, url)
                    .await
                    .map_err(DnsAuthError::Transport)?;
                debug!(%date, "remote date");
                Ok(date)
            }
        }
    }
}

fn build_client() -> DnsAuthResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build HTTP client")
        .map_err(DnsAuthError::Transport)
}

fn local_date() -> String {
    info!("retrieving date from local computer");
    let date = format_http_date(Utc::now());
    debug!(%date, "local date");
    date
}

/// Format a UTC timestamp as an HTTP-date.
#[must_use]
pub fn format_http_date(time: DateTime<Utc>) -> String {
    time.format(HTTP_DATE_FORMAT).to_string()
}

async fn fetch_remote_date(client: &reqwest::Client, url: &str) -> anyhow::Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to fetch date from {url}"))?;

    debug!(status = %response.status(), headers = ?response.headers(), "date response");

    let date = response
        .headers()
        .get(reqwest::header::DATE)
        .ok_or_else(|| anyhow!("response from {url} has no Date header"))?
        .to_str()
        .with_context(|| format!("Date header from {url} is not valid text"))?
        .trim();

    if date.is_empty() {
        return Err(anyhow!("response from {url} has an empty Date header"));
    }

    Ok(date.to_owned())
}
