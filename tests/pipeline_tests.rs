//! End-to-end pipeline scenarios
//!
//! Exercises deduplication, normalization, and snapshot writing together on
//! records shaped like real adapter output.

use course_harvest::pipeline::{dedupe, finalize, normalize};
use course_harvest::{output, RawRecord};
use serde_json::json;

fn raw(value: serde_json::Value) -> RawRecord {
    value.as_object().expect("test record").clone()
}

#[test]
fn cross_source_duplicate_collapses_to_first_source() {
    // Two sources list the same workshop for the same session, neither with
    // a source URL. The messy first-source title must survive verbatim.
    let records = vec![
        raw(json!({
            "headline": "  Creative   Writing Workshop ",
            "term": "Session 1",
            "school": "Yale University",
        })),
        raw(json!({
            "course_name": "creative writing workshop",
            "session_label": "Session 1",
            "institution": "Stanford University",
        })),
    ];

    let canonical = finalize(records);

    assert_eq!(canonical.len(), 1);
    assert_eq!(canonical[0].title, "  Creative   Writing Workshop ");
    assert_eq!(canonical[0].session, "Session 1");
    assert_eq!(canonical[0].college, "Yale University");
    assert_eq!(canonical[0].id, "1");
}

#[test]
fn duration_synthesis_and_fallback() {
    let canonical = finalize(vec![
        raw(json!({"title": "With weeks", "length_weeks": 6})),
        raw(json!({"title": "Without anything"})),
    ]);

    assert_eq!(canonical[0].duration, "6 weeks");
    assert_eq!(canonical[1].duration, "TBD");
}

#[test]
fn popular_is_absent_not_false() {
    let record = normalize(&raw(json!({"title": "Quiet course"})), "1");

    let value = serde_json::to_value(&record).unwrap();
    assert!(value.get("popular").is_none(), "popular must be omitted entirely");

    let flagged = normalize(&raw(json!({"title": "Hot course", "is_popular": false})), "2");
    let value = serde_json::to_value(&flagged).unwrap();
    assert_eq!(value["popular"], json!(false));
}

#[test]
fn dedupe_output_is_a_subsequence_and_idempotent() {
    let records = vec![
        raw(json!({"title": "A", "source_url": "https://x.edu/a"})),
        raw(json!({"title": "B", "source_url": "https://x.edu/b"})),
        raw(json!({"title": "A", "source_url": "https://x.edu/a"})),
        raw(json!({"title": "C"})),
        raw(json!({"title": "B", "source_url": "https://x.edu/b"})),
    ];

    let once = dedupe(records.clone());
    let twice = dedupe(once.clone());
    assert_eq!(once, twice);

    // Subsequence check: every survivor appears in the input in order.
    let mut input_iter = records.iter();
    for survivor in &once {
        assert!(
            input_iter.any(|r| r == survivor),
            "output must preserve input order"
        );
    }
}

#[test]
fn ids_are_a_stable_one_based_sequence() {
    let records = vec![
        raw(json!({"title": "First"})),
        raw(json!({"title": "Second"})),
        raw(json!({"title": "Third"})),
    ];

    let canonical = finalize(records);
    let ids: Vec<_> = canonical.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn normalizing_twice_with_same_id_is_identical() {
    let record = raw(json!({
        "headline": "Marine Biology Field Methods",
        "discipline": "Biology",
        "capacity": "18",
        "term": "Session 2",
    }));

    assert_eq!(normalize(&record, "42"), normalize(&record, "42"));
}

#[test]
fn snapshot_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/courses.json");

    let canonical = finalize(vec![
        raw(json!({
            "course_name": "Intro to Sculpture",
            "subject": "Art",
            "credit_hours": 2,
            "is_popular": true,
        })),
        raw(json!({"headline": "Campus Choir"})),
    ]);

    output::write_records(&path, &canonical).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    let array = parsed.as_array().unwrap();

    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["title"], "Intro to Sculpture");
    assert_eq!(array[0]["popular"], json!(true));
    assert_eq!(array[0]["credits"], json!(2));
    assert_eq!(array[1]["subject"], "General");
    assert!(array[1].get("popular").is_none());
    assert!(array[1].get("prerequisites").is_none());
}
