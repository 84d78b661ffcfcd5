// File: ./src/model/event.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed campus labels offered in the filter UI.
///
/// An empty campus string means "unknown". Submissions are not validated
/// against this list; arbitrary labels pass through normalization intact.
pub const CAMPUSES: [&str; 3] = ["Main", "Downtown", "Health Sciences"];

/// Duration assumed for layout purposes when an event has no end time.
/// Never written back to the event.
pub const DEFAULT_EVENT_HOURS: i64 = 1;

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// A canonical event: always has a non-empty `id` and a valid `start`.
/// Immutable once normalized; collections are replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub host: String,
    pub campus: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub dietary: String,
    pub link: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// End instant used for calendar positioning: the real end when known,
    /// otherwise start + 1 hour.
    pub fn effective_end(&self) -> DateTime<Utc> {
        self.end
            .unwrap_or(self.start + Duration::hours(DEFAULT_EVENT_HOURS))
    }

    /// True when `now` falls within `[start, end]`. Events without an end
    /// time are never ongoing.
    pub fn is_ongoing(&self, now: DateTime<Utc>) -> bool {
        match self.end {
            Some(end) => now >= self.start && now <= end,
            None => false,
        }
    }

    /// Lowercased text searched by the query filter.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.host, self.description, self.location
        )
        .to_lowercase()
    }
}
