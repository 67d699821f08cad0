//! Record types flowing through the pipeline

use serde::{Deserialize, Serialize};

/// A raw, source-specific record as returned by an adapter
///
/// An open mapping with no fixed schema; keys vary by source (`course_name`
/// vs `headline`, `capacity` vs `seats`). Downstream stages only read it.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// A course record conforming to the canonical schema
///
/// `credits`, `seats`, and `enrolled` are non-negative by construction.
/// `id` is assigned after deduplication as a 1-based sequence over the final
/// ordered list. `prerequisites` and `popular` are sparse: they are omitted
/// from the serialized output entirely when the source provided nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub session: String,
    pub level: String,
    pub credits: u32,
    pub seats: u32,
    pub enrolled: u32,
    pub image: String,
    pub schedule: String,
    pub location: String,
    pub college: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<bool>,
}
