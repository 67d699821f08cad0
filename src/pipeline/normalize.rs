//! Schema reconciliation
//!
//! Maps arbitrary source-specific keys onto the canonical schema. Every
//! canonical field resolves through an ordered candidate-key list with
//! first-non-empty-wins semantics; the lists are data, so teaching the
//! pipeline a new source's aliases is a table edit, not new branches.

use crate::pipeline::record::{CanonicalRecord, RawRecord};
use serde_json::Value;

pub(crate) const TITLE_KEYS: &[&str] = &["title", "course_name", "headline"];
pub(crate) const SESSION_KEYS: &[&str] = &["session", "session_label", "term"];
pub(crate) const SOURCE_URL_KEYS: &[&str] = &["source_url", "sourceUrl"];

const SUBJECT_KEYS: &[&str] = &["subject", "subject_area", "discipline"];
const DESCRIPTION_KEYS: &[&str] = &["description", "summary", "body"];
const INSTRUCTOR_KEYS: &[&str] = &["instructor", "teacher", "faculty"];
const DURATION_KEYS: &[&str] = &["duration", "duration_text"];
const WEEKS_KEYS: &[&str] = &["length_weeks"];
const LEVEL_KEYS: &[&str] = &["level", "difficulty", "track_level"];
const CREDITS_KEYS: &[&str] = &["credits", "credit_hours"];
const SEATS_KEYS: &[&str] = &["seats", "seat_capacity", "capacity"];
const ENROLLED_KEYS: &[&str] = &["enrolled", "seats_taken"];
const IMAGE_KEYS: &[&str] = &["image", "image_url", "hero_image"];
const SCHEDULE_KEYS: &[&str] = &["schedule", "meeting_pattern", "schedule_text"];
const LOCATION_KEYS: &[&str] = &["location", "venue", "room"];
const COLLEGE_KEYS: &[&str] = &["college", "institution", "school"];
const PREREQ_KEYS: &[&str] = &["prerequisites", "prereq"];
const POPULAR_KEYS: &[&str] = &["popular", "is_popular"];

const STOCK_IMAGE: &str =
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?fit=max&fm=jpg&q=80&w=1080";

/// Maps a raw record onto the canonical schema
///
/// Pure and total: no I/O, and missing or malformed fields degrade to the
/// documented defaults instead of failing. The stored title keeps its
/// original casing and spacing; only the dedupe key uses [`normalize_title`].
pub fn normalize(raw: &RawRecord, assigned_id: &str) -> CanonicalRecord {
    let duration = match first_present(raw, DURATION_KEYS) {
        Some(value) => value_to_string(value),
        None => {
            let weeks = pick_count(raw, WEEKS_KEYS);
            if weeks > 0 {
                format!("{} weeks", weeks)
            } else {
                "TBD".to_string()
            }
        }
    };

    CanonicalRecord {
        id: assigned_id.to_string(),
        title: pick_string(raw, TITLE_KEYS, ""),
        subject: pick_string(raw, SUBJECT_KEYS, "General"),
        description: pick_string(raw, DESCRIPTION_KEYS, "Description pending"),
        instructor: pick_string(raw, INSTRUCTOR_KEYS, "Staff"),
        duration,
        session: pick_string(raw, SESSION_KEYS, "Session 1"),
        level: pick_string(raw, LEVEL_KEYS, "Beginner"),
        credits: pick_count(raw, CREDITS_KEYS),
        seats: pick_count(raw, SEATS_KEYS),
        enrolled: pick_count(raw, ENROLLED_KEYS),
        image: pick_string(raw, IMAGE_KEYS, STOCK_IMAGE),
        schedule: pick_string(raw, SCHEDULE_KEYS, "TBD"),
        location: pick_string(raw, LOCATION_KEYS, "TBD"),
        college: pick_string(raw, COLLEGE_KEYS, "Unknown"),
        prerequisites: first_present(raw, PREREQ_KEYS).map(value_to_string),
        popular: first_present(raw, POPULAR_KEYS).map(value_to_flag),
    }
}

/// Case-folds a title and collapses whitespace runs for comparison
pub fn normalize_title(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// First candidate value that is present and non-empty
///
/// A candidate counts as absent when the key is missing, the value is null,
/// or the value is the empty string. `false` and `0` are present.
pub(crate) fn first_present<'a>(raw: &'a RawRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| !is_absent(value))
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

pub(crate) fn pick_string(raw: &RawRecord, keys: &[&str], default: &str) -> String {
    first_present(raw, keys)
        .map(value_to_string)
        .unwrap_or_else(|| default.to_string())
}

fn pick_count(raw: &RawRecord, keys: &[&str]) -> u32 {
    first_present(raw, keys).map(value_to_count).unwrap_or(0)
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerces a scalar to a non-negative count, defaulting to 0
fn value_to_count(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().map(|f| f.trunc() as i64)),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    };

    parsed.unwrap_or(0).max(0) as u32
}

fn value_to_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Null => false,
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawRecord {
        value.as_object().expect("test record").clone()
    }

    #[test]
    fn test_empty_record_gets_all_defaults() {
        let record = normalize(&raw(json!({})), "1");

        assert_eq!(record.id, "1");
        assert_eq!(record.title, "");
        assert_eq!(record.subject, "General");
        assert_eq!(record.description, "Description pending");
        assert_eq!(record.instructor, "Staff");
        assert_eq!(record.duration, "TBD");
        assert_eq!(record.session, "Session 1");
        assert_eq!(record.level, "Beginner");
        assert_eq!(record.credits, 0);
        assert_eq!(record.seats, 0);
        assert_eq!(record.enrolled, 0);
        assert_eq!(record.image, STOCK_IMAGE);
        assert_eq!(record.schedule, "TBD");
        assert_eq!(record.location, "TBD");
        assert_eq!(record.college, "Unknown");
        assert_eq!(record.prerequisites, None);
        assert_eq!(record.popular, None);
    }

    #[test]
    fn test_candidate_order_first_non_empty_wins() {
        let record = normalize(
            &raw(json!({
                "title": "",
                "course_name": null,
                "headline": "Creative Writing Workshop",
                "discipline": "English",
            })),
            "1",
        );

        assert_eq!(record.title, "Creative Writing Workshop");
        assert_eq!(record.subject, "English");
    }

    #[test]
    fn test_stored_title_keeps_original_casing() {
        let record = normalize(&raw(json!({"headline": "  Creative   Writing Workshop "})), "1");
        assert_eq!(record.title, "  Creative   Writing Workshop ");
    }

    #[test]
    fn test_duration_prefers_explicit_text() {
        let record = normalize(
            &raw(json!({"duration_text": "6 weeks", "length_weeks": 99})),
            "1",
        );
        assert_eq!(record.duration, "6 weeks");
    }

    #[test]
    fn test_duration_synthesized_from_weeks() {
        let record = normalize(&raw(json!({"length_weeks": 6})), "1");
        assert_eq!(record.duration, "6 weeks");
    }

    #[test]
    fn test_duration_zero_weeks_is_tbd() {
        let record = normalize(&raw(json!({"length_weeks": 0})), "1");
        assert_eq!(record.duration, "TBD");
    }

    #[test]
    fn test_counts_coerced_and_clamped() {
        let record = normalize(
            &raw(json!({"credit_hours": "4", "seat_capacity": 25.0, "seats_taken": -3})),
            "1",
        );
        assert_eq!(record.credits, 4);
        assert_eq!(record.seats, 25);
        assert_eq!(record.enrolled, 0);
    }

    #[test]
    fn test_unparseable_count_defaults_to_zero() {
        let record = normalize(&raw(json!({"credits": "three"})), "1");
        assert_eq!(record.credits, 0);
    }

    #[test]
    fn test_popular_false_is_kept() {
        let record = normalize(&raw(json!({"popular": false})), "1");
        assert_eq!(record.popular, Some(false));
    }

    #[test]
    fn test_popular_coerced_from_number() {
        let record = normalize(&raw(json!({"is_popular": 1})), "1");
        assert_eq!(record.popular, Some(true));
    }

    #[test]
    fn test_popular_absent_stays_absent() {
        let record = normalize(&raw(json!({"title": "X"})), "1");
        assert_eq!(record.popular, None);

        let serialized = serde_json::to_value(&record).unwrap();
        assert!(serialized.get("popular").is_none());
        assert!(serialized.get("prerequisites").is_none());
    }

    #[test]
    fn test_prerequisites_kept_when_present() {
        let record = normalize(&raw(json!({"prereq": "Algebra II"})), "1");
        assert_eq!(record.prerequisites, Some("Algebra II".to_string()));
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let input = raw(json!({
            "headline": "Intro to Sculpture",
            "term": "Session 2",
            "capacity": 12,
        }));

        assert_eq!(normalize(&input, "7"), normalize(&input, "7"));
    }

    #[test]
    fn test_normalize_title_folds_case_and_whitespace() {
        assert_eq!(
            normalize_title("  Creative   Writing Workshop "),
            "creative writing workshop"
        );
        assert_eq!(normalize_title("ALGEBRA\t II"), "algebra ii");
        assert_eq!(normalize_title(""), "");
    }
}
