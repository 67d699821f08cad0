use serde::Deserialize;
use std::path::PathBuf;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = "course-harvest/1.0 (+https://example.org/crawler-info)";

/// Default output path for the normalized snapshot
pub const DEFAULT_OUTPUT_PATH: &str = "data/courses.generated.json";

/// Main configuration structure for Course-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub polite: PoliteSettings,
    pub output: OutputConfig,
}

/// Politeness settings for the fetch client
///
/// Supplied once at client construction and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoliteSettings {
    /// User agent string sent with every request (and checked against robots.txt)
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Minimum per-request delay in seconds
    #[serde(rename = "min-delay-seconds")]
    pub min_delay_secs: f64,

    /// Maximum per-request delay in seconds
    #[serde(rename = "max-delay-seconds")]
    pub max_delay_secs: f64,

    /// Total number of attempts before a fetch is reported as exhausted
    pub retries: u32,

    /// Exponential backoff base in seconds (delays are base, 2*base, 4*base, ...)
    #[serde(rename = "backoff-base-seconds")]
    pub backoff_base_secs: f64,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-seconds")]
    pub timeout_secs: u64,
}

impl Default for PoliteSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_delay_secs: 1.0,
            max_delay_secs: 2.0,
            retries: 3,
            backoff_base_secs: 1.0,
            timeout_secs: 20,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the JSON snapshot file
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
