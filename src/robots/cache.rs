//! Per-origin robots.txt policy cache
//!
//! Policies are filled lazily on the first query for an origin and retained
//! for the lifetime of the process. A racing first query for the same origin
//! may fetch robots.txt twice; the first insert wins and both callers
//! converge on the same cached policy.

use crate::robots::{fetch_robots_txt, origin_of, PolicyFetch, RobotsPolicy};
use crate::Result;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// A robots.txt policy together with when it was fetched
///
/// There is no expiry: a harvest run is a short-lived batch job and each
/// origin's policy is fetched at most once per process. The timestamp exists
/// for trace logging.
#[derive(Debug, Clone)]
pub struct CachedPolicy {
    /// The evaluated ruleset for the origin
    pub policy: RobotsPolicy,

    /// When the robots.txt was fetched (or substituted with allow-all)
    pub fetched_at: DateTime<Utc>,
}

impl CachedPolicy {
    /// Creates a cache entry stamped with the current time
    pub fn new(policy: RobotsPolicy) -> Self {
        Self {
            policy,
            fetched_at: Utc::now(),
        }
    }

    /// Returns how long ago this policy was fetched
    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }

    /// Checks whether a URL is allowed under this policy
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        self.policy.is_allowed(url, user_agent)
    }

    /// Gets the robots.txt crawl delay for a user agent, if any
    pub fn crawl_delay(&self, user_agent: &str) -> Option<f64> {
        self.policy.crawl_delay(user_agent)
    }
}

/// Caches one robots.txt policy per origin (scheme + host)
///
/// The cache owns its own HTTP client: robots.txt lookups are a precondition
/// of polite fetching and must not recurse through the rate limiter.
pub struct RobotsCache {
    http: Client,
    user_agent: String,
    policies: Mutex<HashMap<String, CachedPolicy>>,
}

impl RobotsCache {
    /// Creates a cache that identifies itself with the given user agent
    pub fn new(user_agent: &str, timeout: std::time::Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            user_agent: user_agent.to_string(),
            policies: Mutex::new(HashMap::new()),
        })
    }

    /// Checks whether the given URL may be fetched
    ///
    /// Fails only on malformed URLs (missing scheme/host, non-http scheme) -
    /// a caller error. Robots.txt fetch or parse problems never surface here;
    /// they degrade to an allow-all policy.
    pub async fn can_fetch(&self, url: &str) -> Result<bool> {
        let policy = self.policy_for_url(url).await?;
        Ok(policy.is_allowed(url, &self.user_agent))
    }

    /// Returns the cached policy governing a URL, filling the cache on first use
    pub async fn policy_for_url(&self, url: &str) -> Result<CachedPolicy> {
        let origin = origin_of(url)?;

        {
            let policies = self.policies.lock().await;
            if let Some(cached) = policies.get(&origin) {
                tracing::trace!(
                    "Reusing robots policy for {} (fetched {}s ago)",
                    origin,
                    cached.age().num_seconds()
                );
                return Ok(cached.clone());
            }
        }

        // Fetch without holding the lock; a concurrent filler for the same
        // origin is harmless because the first insert wins below.
        let policy = match fetch_robots_txt(&self.http, &origin).await {
            PolicyFetch::PolicySet(content) => RobotsPolicy::from_content(&content),
            PolicyFetch::FetchFailed(reason) => {
                tracing::warn!("robots.txt unavailable for {}: {}; allowing all", origin, reason);
                RobotsPolicy::allow_all()
            }
        };

        let mut policies = self.policies.lock().await;
        let cached = policies
            .entry(origin)
            .or_insert_with(|| CachedPolicy::new(policy));
        Ok(cached.clone())
    }

    /// Returns the user agent this cache evaluates policies against
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Number of origins with a cached policy
    pub async fn len(&self) -> usize {
        self.policies.lock().await.len()
    }

    /// Whether any origin has been queried yet
    pub async fn is_empty(&self) -> bool {
        self.policies.lock().await.is_empty()
    }

    #[cfg(test)]
    pub(crate) async fn preload(&self, origin: &str, policy: RobotsPolicy) {
        self.policies
            .lock()
            .await
            .insert(origin.to_string(), CachedPolicy::new(policy));
    }
}

impl std::fmt::Debug for RobotsCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobotsCache")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}
