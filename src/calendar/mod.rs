// Calendar layout engine: pure projections of a filtered event list onto
// list, week-grid and month-grid structures, plus the navigational state
// (view mode + anchor date) shared by all three.
pub mod dates;
pub mod month;
pub mod week;

use crate::model::Event;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use strum::{Display, EnumString};

pub use month::{CELL_EVENT_CAP, MonthCell, MonthLayout, layout_month};
pub use week::{MIN_BLOCK_HEIGHT, WeekBlock, WeekLayout, layout_week};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ViewMode {
    #[default]
    List,
    Week,
    Month,
}

/// Where each event sits relative to the wall clock, re-evaluated at
/// render time. Display emphasis only; never used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalStatus {
    Ongoing,
    Past,
    Upcoming,
}

pub fn classify(event: &Event, now: DateTime<Utc>) -> TemporalStatus {
    if event.is_ongoing(now) {
        TemporalStatus::Ongoing
    } else if event.start < now {
        TemporalStatus::Past
    } else {
        TemporalStatus::Upcoming
    }
}

/// List mode: the filter engine's ordering passes through untouched; each
/// entry just gains its temporal status.
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub status: TemporalStatus,
    pub event: Event,
}

pub fn layout_list(events: &[Event], now: DateTime<Utc>) -> Vec<ListEntry> {
    events
        .iter()
        .map(|ev| ListEntry {
            status: classify(ev, now),
            event: ev.clone(),
        })
        .collect()
}

pub fn results_label(count: usize) -> String {
    if count == 1 {
        "1 event".to_string()
    } else {
        format!("{} events", count)
    }
}

/// The sole piece of navigational state: current view plus the anchor
/// date defining the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub view: ViewMode,
    pub anchor: NaiveDate,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view: ViewMode::default(),
            anchor: today,
        }
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Shifts the anchor by one view-specific increment: a day in list
    /// mode, exactly 7 days in week mode, one whole calendar month
    /// (landing on day 1) in month mode.
    pub fn shift(&mut self, direction: i32) {
        self.anchor = match self.view {
            ViewMode::List => self.anchor + Duration::days(direction as i64),
            ViewMode::Week => self.anchor + Duration::days(7 * direction as i64),
            ViewMode::Month => dates::step_months(self.anchor, direction),
        };
    }

    pub fn reset_to(&mut self, today: NaiveDate) {
        self.anchor = today;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_navigation_moves_seven_days_in_requested_direction() {
        let mut cal = CalendarState::new(date(2026, 3, 4));
        cal.set_view(ViewMode::Week);
        cal.shift(1);
        assert_eq!(cal.anchor, date(2026, 3, 11));
        cal.shift(-1);
        cal.shift(-1);
        assert_eq!(cal.anchor, date(2026, 2, 25));
    }

    #[test]
    fn test_month_navigation_lands_on_day_one() {
        let mut cal = CalendarState::new(date(2026, 1, 31));
        cal.set_view(ViewMode::Month);
        cal.shift(1);
        assert_eq!(cal.anchor, date(2026, 2, 1));
        cal.shift(-2);
        assert_eq!(cal.anchor, date(2025, 12, 1));
    }

    #[test]
    fn test_today_resets_anchor() {
        let mut cal = CalendarState::new(date(2026, 3, 4));
        cal.set_view(ViewMode::Week);
        cal.shift(5);
        cal.reset_to(date(2026, 3, 4));
        assert_eq!(cal.anchor, date(2026, 3, 4));
    }

    #[test]
    fn test_classify_covers_all_three_states() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        let mk = |start: DateTime<Utc>, end: Option<DateTime<Utc>>| Event {
            id: "x".into(),
            title: "t".into(),
            host: String::new(),
            campus: String::new(),
            location: String::new(),
            description: String::new(),
            category: String::new(),
            dietary: String::new(),
            link: String::new(),
            start,
            end,
            created_at: start,
        };

        let ongoing = mk(now - Duration::hours(1), Some(now + Duration::hours(1)));
        assert_eq!(classify(&ongoing, now), TemporalStatus::Ongoing);

        // Started earlier with no end: past, never ongoing.
        let past = mk(now - Duration::hours(1), None);
        assert_eq!(classify(&past, now), TemporalStatus::Past);

        let upcoming = mk(now + Duration::hours(1), None);
        assert_eq!(classify(&upcoming, now), TemporalStatus::Upcoming);
    }
}
