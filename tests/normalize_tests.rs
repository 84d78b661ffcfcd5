// Tests for raw-record normalization.
use freebites::model::normalize::{RawEvent, normalize, normalize_value, parse_when};
use serde_json::json;

fn raw(title: Option<&str>, start: Option<&str>) -> RawEvent {
    RawEvent {
        title: title.map(String::from),
        start: start.map(String::from),
        ..Default::default()
    }
}

#[test]
fn test_records_without_parseable_start_are_dropped() {
    assert!(normalize(vec![raw(Some("X"), None)]).is_empty());
    assert!(normalize(vec![raw(Some("X"), Some("soon™"))]).is_empty());

    // A hard filter, not a soft default: the good record survives alone.
    let out = normalize(vec![
        raw(Some("Bad"), Some("not a date")),
        raw(Some("Good"), Some("2026-03-04T18:00:00Z")),
    ]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Good");
}

#[test]
fn test_string_fields_default() {
    let out = normalize(vec![raw(None, Some("2026-03-04T18:00:00Z"))]);
    assert_eq!(out[0].title, "Untitled");
    assert_eq!(out[0].host, "");
    assert_eq!(out[0].category, "");
    assert_eq!(out[0].dietary, "");
    assert_eq!(out[0].campus, "");
}

#[test]
fn test_blank_title_becomes_untitled() {
    let out = normalize(vec![raw(Some("   "), Some("2026-03-04T18:00:00Z"))]);
    assert_eq!(out[0].title, "Untitled");
}

#[test]
fn test_missing_id_is_generated_and_nonempty() {
    let out = normalize(vec![
        raw(Some("A"), Some("2026-03-04T18:00:00Z")),
        raw(Some("B"), Some("2026-03-04T19:00:00Z")),
    ]);
    assert!(!out[0].id.is_empty());
    assert!(!out[1].id.is_empty());
    assert_ne!(out[0].id, out[1].id);
}

#[test]
fn test_present_id_is_stable_across_repeated_normalization() {
    let make = || RawEvent {
        id: Some("engage-42".to_string()),
        title: Some("Pizza".to_string()),
        start: Some("2026-03-04T18:00:00Z".to_string()),
        ..Default::default()
    };
    let first = normalize(vec![make()]);
    let second = normalize(vec![make()]);
    assert_eq!(first[0].id, "engage-42");
    assert_eq!(first[0].id, second[0].id);
}

#[test]
fn test_end_is_optional() {
    let mut r = raw(Some("Open ended"), Some("2026-03-04T18:00:00Z"));
    r.end = Some("2026-03-04T20:00:00Z".to_string());
    let with_end = normalize(vec![r]).remove(0);
    assert!(with_end.end.is_some());

    let without = normalize(vec![raw(Some("A"), Some("2026-03-04T18:00:00Z"))]).remove(0);
    assert!(without.end.is_none());
}

#[test]
fn test_created_at_defaults_to_now() {
    let before = chrono::Utc::now();
    let out = normalize(vec![raw(Some("A"), Some("2026-03-04T18:00:00Z"))]);
    let after = chrono::Utc::now();
    assert!(out[0].created_at >= before && out[0].created_at <= after);
}

#[test]
fn test_non_array_input_yields_empty() {
    assert!(normalize_value(json!({"title": "X"})).is_empty());
    assert!(normalize_value(json!(42)).is_empty());
    assert!(normalize_value(json!(null)).is_empty());
}

#[test]
fn test_array_with_mixed_garbage_keeps_valid_records() {
    let out = normalize_value(json!([
        {"title": "Good", "start": "2026-03-04T18:00:00Z"},
        {"title": "No start"},
        "not even an object",
        {"title": "Also good", "start": "2026-03-05"}
    ]));
    assert_eq!(out.len(), 2);
}

#[test]
fn test_parse_when_accepts_common_forms() {
    assert!(parse_when("2026-03-04T18:00:00Z").is_some());
    assert!(parse_when("2026-03-04T18:00:00-05:00").is_some());
    assert!(parse_when("2026-03-04T18:00").is_some());
    assert!(parse_when("2026-03-04").is_some());
    assert!(parse_when("").is_none());
}
