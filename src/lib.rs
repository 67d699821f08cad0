//! Course-Harvest: a polite course-listing collector
//!
//! This crate gathers course listings from independent web sources through a
//! robots.txt-aware, rate-limited HTTP client, reconciles the raw
//! source-specific records into one canonical schema, deduplicates them, and
//! writes a single normalized JSON snapshot.

pub mod config;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod robots;
pub mod sources;

use thiserror::Error;

/// Main error type for Course-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unknown source adapter(s): {}", .0.join(", "))]
    UnknownSources(Vec<String>),

    #[error("URL disallowed by robots.txt: {url}")]
    RobotsDenied { url: String },

    #[error("Failed to fetch {url} after {attempts} attempts: {source}")]
    FetchExhausted {
        url: String,
        attempts: u32,
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Source '{source_name}' failed: {message}")]
    Source {
        source_name: String,
        message: String,
    },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Course-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, OutputConfig, PoliteSettings};
pub use fetch::PoliteClient;
pub use pipeline::{dedupe, normalize, normalize_title, CanonicalRecord, RawRecord};
pub use robots::RobotsCache;
pub use sources::{SourceAdapter, SourceRegistry};
