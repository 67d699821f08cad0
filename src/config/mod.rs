//! Configuration module for Course-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, plus the built-in defaults used when no file is supplied.
//!
//! # Example
//!
//! ```no_run
//! use course_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Retries: {}", config.polite.retries);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, PoliteSettings, DEFAULT_OUTPUT_PATH, DEFAULT_USER_AGENT};

// Re-export parser and validation functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::{validate, validate_polite_settings};
