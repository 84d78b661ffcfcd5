// File: ./src/model/normalize.rs
// Coerces loosely-typed feed/storage records into canonical events.
//
// Records without a parseable start time are dropped entirely: sorting and
// calendar placement both require a valid start, so there is no soft
// default that would make sense downstream.
use crate::model::event::{Event, generate_id};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// An event record as it appears on the wire (feeds) or on disk (local
/// submissions before normalization). Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEvent {
    pub id: Option<String>,
    pub title: Option<String>,
    pub host: Option<String>,
    pub campus: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub dietary: Option<String>,
    pub link: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub created_at: Option<String>,
}

/// Parses a timestamp in any of the accepted wire forms into a UTC instant.
///
/// Accepted: RFC 3339 (`2026-03-04T14:30:00Z`, with offset), naive
/// date-times (`2026-03-04T14:30[:00]`, space separator also tolerated)
/// interpreted in the local timezone, and bare dates (midnight local).
pub fn parse_when(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return naive_to_utc(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return naive_to_utc(date.and_hms_opt(0, 0, 0)?);
    }
    None
}

fn naive_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    // earliest() resolves DST-gap ambiguity deterministically.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

fn coerce(raw: RawEvent, now: DateTime<Utc>) -> Option<Event> {
    let start = parse_when(raw.start.as_deref()?)?;

    let title = raw.title.map(|t| t.trim().to_string()).unwrap_or_default();
    Some(Event {
        id: raw.id.filter(|id| !id.is_empty()).unwrap_or_else(generate_id),
        title: if title.is_empty() {
            "Untitled".to_string()
        } else {
            title
        },
        host: raw.host.map(|s| s.trim().to_string()).unwrap_or_default(),
        campus: raw.campus.unwrap_or_default(),
        location: raw.location.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        category: raw.category.unwrap_or_default(),
        dietary: raw.dietary.unwrap_or_default(),
        link: raw.link.unwrap_or_default(),
        start,
        end: raw.end.as_deref().and_then(parse_when),
        created_at: raw
            .created_at
            .as_deref()
            .and_then(parse_when)
            .unwrap_or(now),
    })
}

/// Normalizes a batch of raw records, dropping anything without a valid
/// start time. Does not mutate its input.
pub fn normalize(raw: Vec<RawEvent>) -> Vec<Event> {
    let now = Utc::now();
    raw.into_iter().filter_map(|r| coerce(r, now)).collect()
}

/// Normalizes an arbitrary JSON value. Anything that is not an array
/// yields an empty result; this guards the feed and storage boundaries
/// against malformed sources.
pub fn normalize_value(value: serde_json::Value) -> Vec<Event> {
    match value {
        serde_json::Value::Array(items) => {
            let raw = items
                .into_iter()
                .filter_map(|v| serde_json::from_value::<RawEvent>(v).ok())
                .collect();
            normalize(raw)
        }
        _ => Vec::new(),
    }
}
