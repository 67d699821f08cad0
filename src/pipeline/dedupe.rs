//! Duplicate collapse across sources and sessions
//!
//! Runs on raw records before normalization, using the same candidate-key
//! resolution the normalizer applies to title and session. Records from
//! different sources that both lack a `source_url` will collide when title
//! and session match; that is the point - the same course listed by two
//! sources collapses to the first-seen copy.

use crate::pipeline::normalize::{normalize_title, pick_string, SESSION_KEYS, SOURCE_URL_KEYS, TITLE_KEYS};
use crate::pipeline::record::RawRecord;
use std::collections::HashSet;

/// Identity of a raw record for duplicate detection
pub type DedupeKey = (String, String, String);

/// Derives the `(source_url, normalized_title, session)` identity tuple
pub fn dedupe_key(record: &RawRecord) -> DedupeKey {
    let source_url = pick_string(record, SOURCE_URL_KEYS, "");
    let title = pick_string(record, TITLE_KEYS, "");
    let session = pick_string(record, SESSION_KEYS, "Session 1");
    (source_url, normalize_title(&title), session)
}

/// Removes records whose identity tuple was already seen
///
/// Order-preserving and idempotent; the output is a subsequence of the
/// input and the earliest record with a given key survives.
pub fn dedupe(records: Vec<RawRecord>) -> Vec<RawRecord> {
    let mut seen: HashSet<DedupeKey> = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        if seen.insert(dedupe_key(&record)) {
            unique.push(record);
        }
    }

    unique
}
