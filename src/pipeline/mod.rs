//! Harvest pipeline
//!
//! Orchestrates a run: robots-probe each selected source, collect its raw
//! records, then collapse duplicates and normalize the survivors into the
//! canonical schema. One failing source never aborts the run; its outcome is
//! recorded and the remaining sources still contribute.

mod dedupe;
mod normalize;
mod record;

pub use dedupe::{dedupe, dedupe_key, DedupeKey};
pub use normalize::{normalize, normalize_title};
pub use record::{CanonicalRecord, RawRecord};

use crate::fetch::PoliteClient;
use crate::sources::SourceAdapter;

/// Outcome of running one source adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// The adapter ran and contributed this many raw records
    Collected(usize),

    /// robots.txt disallows the source's domain; nothing was fetched
    SkippedByRobots,

    /// The adapter (or its robots probe) failed; the run continued
    Failed(String),
}

/// Per-source report for the run summary
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub source: String,
    pub outcome: SourceOutcome,
}

/// Everything a collection pass produced
#[derive(Debug, Default)]
pub struct Harvest {
    /// Raw records in source order, not yet deduplicated
    pub records: Vec<RawRecord>,

    /// One report per selected adapter, in execution order
    pub reports: Vec<SourceReport>,
}

impl Harvest {
    /// Number of sources that contributed records
    pub fn collected_sources(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, SourceOutcome::Collected(_)))
            .count()
    }
}

/// Runs each adapter behind a robots.txt pre-check and gathers raw records
///
/// A disallowed domain is skipped, a failing adapter is reported, and in
/// both cases the remaining sources still run.
pub async fn collect_sources(
    client: &PoliteClient,
    adapters: &[&dyn SourceAdapter],
) -> Harvest {
    let mut harvest = Harvest::default();

    for adapter in adapters {
        let probe_url = format!("https://{}/", adapter.domain());

        let outcome = match client.robots().can_fetch(&probe_url).await {
            Ok(false) => {
                tracing::info!("Skipping {}: robots.txt disallows {}", adapter.name(), probe_url);
                SourceOutcome::SkippedByRobots
            }
            Err(e) => {
                tracing::error!("Robots probe for {} failed: {}", adapter.name(), e);
                SourceOutcome::Failed(e.to_string())
            }
            Ok(true) => match adapter.crawl(client).await {
                Ok(records) => {
                    tracing::info!("Collected {} records from {}", records.len(), adapter.name());
                    let count = records.len();
                    harvest.records.extend(records);
                    SourceOutcome::Collected(count)
                }
                Err(e) => {
                    tracing::error!("Source {} failed: {}", adapter.name(), e);
                    SourceOutcome::Failed(e.to_string())
                }
            },
        };

        harvest.reports.push(SourceReport {
            source: adapter.name().to_string(),
            outcome,
        });
    }

    harvest
}

/// Deduplicates raw records and normalizes the survivors
///
/// IDs are assigned only here, after deduplication, as a 1-based sequence
/// over the final ordered list.
pub fn finalize(records: Vec<RawRecord>) -> Vec<CanonicalRecord> {
    dedupe(records)
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize(raw, &(index + 1).to_string()))
        .collect()
}
