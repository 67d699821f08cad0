//! Snapshot output
//!
//! Writes the normalized dataset as one pretty-printed JSON array. The write
//! goes through a sibling temp file and a rename so a crash mid-write never
//! leaves a truncated snapshot behind.

use crate::pipeline::CanonicalRecord;
use crate::Result;
use std::path::{Path, PathBuf};

/// Writes records to `path` atomically, creating parent directories as needed
pub fn write_records(path: &Path, records: &[CanonicalRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(records)?;

    let tmp_path = sibling_tmp_path(path);
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Temp file next to the target so the rename stays on one filesystem
fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
