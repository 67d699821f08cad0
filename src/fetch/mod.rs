//! Polite fetch module
//!
//! The HTTP side of the harvester: a rate-limited, retrying client that
//! consults the robots policy cache before every request.

mod client;
mod sleep;

pub use client::PoliteClient;
pub use sleep::{Sleep, TokioSleep};
