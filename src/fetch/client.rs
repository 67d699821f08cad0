//! Polite HTTP client
//!
//! Every fetch goes through the same sequence: robots.txt gate, per-attempt
//! politeness delay, request with the configured user agent and timeout,
//! exponential backoff between failed attempts. Robots denial is a policy
//! violation and is never retried.

use crate::config::PoliteSettings;
use crate::fetch::{Sleep, TokioSleep};
use crate::robots::RobotsCache;
use crate::{HarvestError, Result};
use rand::Rng;
use reqwest::Client;
use std::time::Duration;

/// Rate-limited, retrying HTTP client gated by a robots.txt policy cache
pub struct PoliteClient<S: Sleep = TokioSleep> {
    http: Client,
    robots: RobotsCache,
    settings: PoliteSettings,
    sleeper: S,
}

impl PoliteClient {
    /// Creates a client with its own robots cache and the tokio sleeper
    pub fn new(settings: PoliteSettings) -> Result<Self> {
        let robots = RobotsCache::new(
            &settings.user_agent,
            Duration::from_secs(settings.timeout_secs),
        )?;
        Self::with_sleeper(settings, robots, TokioSleep)
    }
}

impl<S: Sleep> PoliteClient<S> {
    /// Creates a client from explicit parts
    ///
    /// Tests use this to pass a preloaded robots cache or a recording
    /// sleeper.
    pub fn with_sleeper(settings: PoliteSettings, robots: RobotsCache, sleeper: S) -> Result<Self> {
        let http = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            http,
            robots,
            settings,
            sleeper,
        })
    }

    /// The robots cache backing this client
    pub fn robots(&self) -> &RobotsCache {
        &self.robots
    }

    /// The settings this client was constructed with
    pub fn settings(&self) -> &PoliteSettings {
        &self.settings
    }

    /// Fetches a URL and decodes the body as UTF-8 text
    ///
    /// Decoding is lossy (invalid sequences become replacement characters),
    /// so a successfully transferred body never fails here.
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let body = self.request(url).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Fetches a URL and returns the raw body bytes
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.request(url).await
    }

    /// Fetches a URL and parses the body as JSON
    ///
    /// A malformed body is a `Decode` error, not a transport fault, and is
    /// not retried.
    pub async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        let text = self.fetch_text(url).await?;
        serde_json::from_str(&text).map_err(|e| HarvestError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Runs the robots gate, throttle, and retry loop for one URL
    async fn request(&self, url: &str) -> Result<Vec<u8>> {
        let policy = self.robots.policy_for_url(url).await?;
        if !policy.is_allowed(url, &self.settings.user_agent) {
            return Err(HarvestError::RobotsDenied {
                url: url.to_string(),
            });
        }

        let crawl_delay = policy
            .crawl_delay(&self.settings.user_agent)
            .map(Duration::from_secs_f64);

        let attempts = self.settings.retries.max(1);
        let mut attempt = 1;

        loop {
            // The politeness throttle applies to every attempt, including the first.
            self.sleeper.sleep(self.throttle_delay(crawl_delay)).await;

            match self.attempt(url).await {
                Ok(body) => {
                    tracing::debug!("Fetched {} ({} bytes, attempt {})", url, body.len(), attempt);
                    return Ok(body);
                }
                Err(source) if attempt >= attempts => {
                    return Err(HarvestError::FetchExhausted {
                        url: url.to_string(),
                        attempts,
                        source,
                    });
                }
                Err(source) => {
                    let backoff = backoff_delay(self.settings.backoff_base_secs, attempt);
                    tracing::warn!(
                        "Attempt {}/{} for {} failed ({}); backing off {:?}",
                        attempt,
                        attempts,
                        url,
                        source,
                        backoff
                    );
                    self.sleeper.sleep(backoff).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One transport attempt; any failure here is considered transient
    async fn attempt(&self, url: &str) -> std::result::Result<Vec<u8>, reqwest::Error> {
        let response = self.http.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Draws the per-attempt politeness delay
    ///
    /// Uniform in `[min_delay, max_delay]`, raised to the robots.txt
    /// crawl delay when the origin publishes a larger one.
    fn throttle_delay(&self, crawl_delay: Option<Duration>) -> Duration {
        let span = self.settings.min_delay_secs..=self.settings.max_delay_secs;
        let drawn = Duration::from_secs_f64(rand::rng().random_range(span));
        match crawl_delay {
            Some(required) => drawn.max(required),
            None => drawn,
        }
    }
}

/// Backoff before retry `attempt + 1`: `base * 2^(attempt-1)` seconds
fn backoff_delay(base_secs: f64, attempt: u32) -> Duration {
    Duration::from_secs_f64(base_secs * f64::powi(2.0, attempt as i32 - 1))
}
