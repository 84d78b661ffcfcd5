// File: ./src/model/filter.rs
// The filter/sort engine: one pure entry point over the unioned event set.
use crate::calendar::dates::{end_of_day, local_instant, start_of_day};
use crate::model::Event;
use chrono::{NaiveDate, TimeZone};
use std::str::FromStr;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    #[default]
    Soonest,
    Latest,
    Added,
    /// Identity pass-through: the explicit fallback for unrecognized keys.
    Unsorted,
}

impl SortKey {
    /// Never fails; anything unrecognized keeps the input order.
    pub fn from_key(key: &str) -> Self {
        Self::from_str(key).unwrap_or(SortKey::Unsorted)
    }
}

/// The whole filter panel as one value. UI code replaces it wholesale on
/// every change rather than poking at individual fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub query: String,
    pub campus: String,
    pub category: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort: SortKey,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Applies all active filter clauses (AND-combined) and the sort order.
///
/// `date_from` is inclusive at the start-of-day boundary and `date_to`
/// inclusive at end-of-day, both evaluated against the event start in the
/// supplied timezone. Callers assemble the remote+local+imported union
/// before invoking this.
pub fn apply<Tz: TimeZone>(all: &[Event], filters: &FilterState, tz: &Tz) -> Vec<Event> {
    let query = filters.query.trim().to_lowercase();
    let from = filters.date_from.map(|d| local_instant(start_of_day(d), tz));
    let to = filters.date_to.map(|d| local_instant(end_of_day(d), tz));

    let mut out: Vec<Event> = all
        .iter()
        .filter(|ev| {
            if let Some(from) = from
                && ev.start < from
            {
                return false;
            }
            if let Some(to) = to
                && ev.start > to
            {
                return false;
            }
            if !filters.campus.is_empty() && ev.campus != filters.campus {
                return false;
            }
            if !filters.category.is_empty() && ev.category != filters.category {
                return false;
            }
            if !query.is_empty() && !ev.haystack().contains(&query) {
                return false;
            }
            true
        })
        .cloned()
        .collect();

    match filters.sort {
        SortKey::Soonest => out.sort_by(|a, b| a.start.cmp(&b.start)),
        SortKey::Latest => out.sort_by(|a, b| b.start.cmp(&a.start)),
        SortKey::Added => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Unsorted => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parsing_falls_back_to_unsorted() {
        assert_eq!(SortKey::from_key("soonest"), SortKey::Soonest);
        assert_eq!(SortKey::from_key("Latest"), SortKey::Latest);
        assert_eq!(SortKey::from_key("added"), SortKey::Added);
        assert_eq!(SortKey::from_key("by-vibes"), SortKey::Unsorted);
        assert_eq!(SortKey::from_key(""), SortKey::Unsorted);
    }

    #[test]
    fn test_default_filter_state_is_detectable() {
        let mut f = FilterState::default();
        assert!(f.is_default());
        f.query = "tacos".into();
        assert!(!f.is_default());
    }
}
