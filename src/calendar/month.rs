// File: ./src/calendar/month.rs
// Month view: whole-week rows covering the focal month, with leading and
// trailing days from adjacent months flagged as outside but still
// populated with their events.
use crate::calendar::dates::{end_of_month, end_of_week, start_of_month, start_of_week};
use crate::model::Event;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::collections::HashMap;

/// Events shown per day cell before collapsing into an overflow count.
pub const CELL_EVENT_CAP: usize = 4;

#[derive(Debug, Clone)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// Belongs to an adjacent month (grayed out, still populated).
    pub outside: bool,
    pub today: bool,
    /// That day's events, ascending by start, capped at CELL_EVENT_CAP.
    pub events: Vec<Event>,
    /// How many additional events were hidden by the cap.
    pub overflow: usize,
}

#[derive(Debug, Clone)]
pub struct MonthLayout {
    /// Day 1 of the focal month.
    pub month: NaiveDate,
    /// Rows of exactly 7 cells, Sunday first.
    pub weeks: Vec<Vec<MonthCell>>,
    /// e.g. "March 2026"
    pub label: String,
}

/// Builds the month grid for the month containing `anchor`. Event day
/// bucketing happens in `tz`; `now` localized in `tz` marks today's cell.
pub fn layout_month<Tz: TimeZone>(
    events: &[Event],
    anchor: NaiveDate,
    tz: &Tz,
    now: DateTime<Utc>,
) -> MonthLayout {
    let month = start_of_month(anchor);
    let grid_start = start_of_week(month);
    let grid_end = end_of_week(end_of_month(month));
    let today = now.with_timezone(tz).date_naive();

    let mut by_day: HashMap<NaiveDate, Vec<Event>> = HashMap::new();
    for ev in events {
        let date = ev.start.with_timezone(tz).date_naive();
        if date >= grid_start && date <= grid_end {
            by_day.entry(date).or_default().push(ev.clone());
        }
    }

    let mut weeks = Vec::new();
    let mut day = grid_start;
    while day <= grid_end {
        let mut row = Vec::with_capacity(7);
        for _ in 0..7 {
            let mut day_events = by_day.remove(&day).unwrap_or_default();
            day_events.sort_by(|a, b| a.start.cmp(&b.start));
            let overflow = day_events.len().saturating_sub(CELL_EVENT_CAP);
            day_events.truncate(CELL_EVENT_CAP);
            row.push(MonthCell {
                date: day,
                outside: start_of_month(day) != month,
                today: day == today,
                events: day_events,
                overflow,
            });
            day += Duration::days(1);
        }
        weeks.push(row);
    }

    MonthLayout {
        month,
        weeks,
        label: month.format("%B %Y").to_string(),
    }
}
