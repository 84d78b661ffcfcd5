// File: ./src/calendar/week.rs
// Week view: 7 Sunday-anchored day columns, 24 hourly rows, events
// positioned on the time axis of their starting day's column.
use crate::calendar::dates::{end_of_week, start_of_week};
use crate::model::Event;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

/// Floor for block height so zero- and short-duration events stay visible.
pub const MIN_BLOCK_HEIGHT: f32 = 24.0;

/// An event positioned inside its day column. `top`/`height` are in the
/// same unit as `row_height` (one row = one hour).
#[derive(Debug, Clone)]
pub struct WeekBlock {
    /// Column index, 0 = Sunday.
    pub day: usize,
    pub top: f32,
    pub height: f32,
    pub ongoing: bool,
    pub event: Event,
}

/// Pure description of a week grid, consumable by any rendering target.
#[derive(Debug, Clone)]
pub struct WeekLayout {
    pub days: [NaiveDate; DAYS_PER_WEEK],
    pub blocks: Vec<WeekBlock>,
    /// e.g. "Mar 1 – Mar 7, 2026"
    pub label: String,
}

/// Lays out every event whose start falls inside the week containing
/// `anchor`. Events are interpreted in `tz`; `now` drives the ongoing
/// flag so callers (and tests) control the clock.
pub fn layout_week<Tz: TimeZone>(
    events: &[Event],
    anchor: NaiveDate,
    tz: &Tz,
    now: DateTime<Utc>,
    row_height: f32,
) -> WeekLayout {
    let week_start = start_of_week(anchor);
    let week_end = end_of_week(anchor);

    let mut days = [week_start; DAYS_PER_WEEK];
    for (i, slot) in days.iter_mut().enumerate() {
        *slot = week_start + Duration::days(i as i64);
    }

    let mut blocks = Vec::new();
    for ev in events {
        let local = ev.start.with_timezone(tz);
        let date = local.date_naive();
        if date < week_start || date > week_end {
            continue;
        }
        let top = (local.hour() as f32 + local.minute() as f32 / 60.0) * row_height;
        let duration_hours =
            (ev.effective_end() - ev.start).num_minutes() as f32 / 60.0;
        blocks.push(WeekBlock {
            day: date.weekday().num_days_from_sunday() as usize,
            top,
            height: (duration_hours * row_height).max(MIN_BLOCK_HEIGHT),
            ongoing: ev.is_ongoing(now),
            event: ev.clone(),
        });
    }

    WeekLayout {
        days,
        blocks,
        label: format!(
            "{} – {}",
            week_start.format("%b %-d"),
            week_end.format("%b %-d, %Y")
        ),
    }
}
