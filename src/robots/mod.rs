//! Robots.txt handling module
//!
//! Fetches, evaluates, and caches robots.txt policies per origin. The whole
//! module is fail-open: politeness must not become an availability bug, so a
//! missing or broken robots.txt always degrades to "allow everything".

mod cache;
mod parser;

pub use cache::{CachedPolicy, RobotsCache};
pub use parser::RobotsPolicy;

use crate::{HarvestError, Result};
use reqwest::Client;
use url::Url;

/// Outcome of a robots.txt fetch
///
/// Fetch problems are data, not errors: `FetchFailed` is mapped to the
/// allow-all policy at the call site, so only genuine bugs propagate as
/// `Err` elsewhere in the crate.
#[derive(Debug)]
pub enum PolicyFetch {
    /// robots.txt was retrieved; the body may still be empty or junk
    PolicySet(String),

    /// robots.txt could not be retrieved; carries the reason for logging
    FetchFailed(String),
}

/// Extracts the origin (scheme + host, plus any non-default port) from a URL
///
/// # Errors
///
/// `InvalidUrl` when the URL cannot be parsed, has no host, or is not
/// http(s) - malformed input is a caller error, never swallowed.
pub fn origin_of(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| HarvestError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(HarvestError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    if parsed.host_str().is_none() {
        return Err(HarvestError::InvalidUrl {
            url: url.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(parsed.origin().ascii_serialization())
}

/// Fetches `<origin>/robots.txt`, reporting failure as a value
pub async fn fetch_robots_txt(client: &Client, origin: &str) -> PolicyFetch {
    let robots_url = format!("{}/robots.txt", origin);
    tracing::debug!("Fetching {}", robots_url);

    let response = match client.get(&robots_url).send().await {
        Ok(response) => response,
        Err(e) => return PolicyFetch::FetchFailed(e.to_string()),
    };

    if !response.status().is_success() {
        return PolicyFetch::FetchFailed(format!("HTTP {}", response.status()));
    }

    match response.text().await {
        Ok(body) => PolicyFetch::PolicySet(body),
        Err(e) => PolicyFetch::FetchFailed(e.to_string()),
    }
}
