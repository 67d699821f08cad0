//! Source adapters
//!
//! Each adapter knows one listing site: its unique name, the domain used for
//! the robots.txt pre-check, and how to produce raw source-specific records.
//! The pipeline treats adapters as black boxes - whatever keys they emit are
//! reconciled later by the normalizer.

mod stanford_edu;
mod yale_edu;

pub use stanford_edu::StanfordEdu;
pub use yale_edu::YaleEdu;

use crate::fetch::PoliteClient;
use crate::pipeline::RawRecord;
use crate::{HarvestError, Result};
use async_trait::async_trait;

/// Contract every source adapter satisfies
#[async_trait]
pub trait SourceAdapter: Send + Sync + std::fmt::Debug {
    /// Unique adapter identifier (also the CLI selection name)
    fn name(&self) -> &'static str;

    /// Domain probed against robots.txt before the adapter runs
    fn domain(&self) -> &'static str;

    /// Produces this source's raw records via the polite client
    async fn crawl(&self, client: &PoliteClient) -> Result<Vec<RawRecord>>;
}

/// The set of registered adapters, built once at startup
///
/// Registration order is preserved; it determines which copy of a
/// cross-source duplicate survives deduplication.
pub struct SourceRegistry {
    adapters: Vec<Box<dyn SourceAdapter>>,
}

impl SourceRegistry {
    /// Registry of all built-in adapters
    pub fn builtin() -> Self {
        Self {
            adapters: vec![Box::new(StanfordEdu), Box::new(YaleEdu)],
        }
    }

    /// Builds a registry from explicit adapters (used by tests and embedders)
    pub fn from_adapters(adapters: Vec<Box<dyn SourceAdapter>>) -> Self {
        Self { adapters }
    }

    /// Names of every registered adapter, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }

    /// Resolves a selection of adapter names
    ///
    /// An empty selection means "all adapters, in registration order". A
    /// non-empty selection is returned in the requested order; every unknown
    /// name is collected into a single `UnknownSources` error so the operator
    /// sees the full list at once.
    pub fn select(&self, requested: &[String]) -> Result<Vec<&dyn SourceAdapter>> {
        if requested.is_empty() {
            return Ok(self.adapters.iter().map(Box::as_ref).collect());
        }

        let unknown: Vec<String> = requested
            .iter()
            .filter(|name| !self.adapters.iter().any(|a| a.name() == name.as_str()))
            .cloned()
            .collect();

        if !unknown.is_empty() {
            return Err(HarvestError::UnknownSources(unknown));
        }

        Ok(requested
            .iter()
            .filter_map(|name| {
                self.adapters
                    .iter()
                    .find(|a| a.name() == name.as_str())
                    .map(Box::as_ref)
            })
            .collect())
    }
}
