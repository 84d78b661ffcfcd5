// File: ./src/calendar/dates.rs
// Date window arithmetic shared by the week and month layouts and the
// date-range filter. Weeks are Sunday-anchored.
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub fn start_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_opt(0, 0, 0).expect("midnight always exists")
}

pub fn end_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_milli_opt(23, 59, 59, 999)
        .expect("end of day always exists")
}

pub fn start_of_week(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_sunday() as i64)
}

pub fn end_of_week(d: NaiveDate) -> NaiveDate {
    start_of_week(d) + Duration::days(6)
}

pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).expect("day 1 always exists")
}

/// Last calendar day of the month containing `d`, computed as the day
/// before day 1 of the next month so variable month lengths and leap
/// years fall out for free.
pub fn end_of_month(d: NaiveDate) -> NaiveDate {
    let (year, month) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("day 1 always exists")
        .pred_opt()
        .expect("predecessor of day 1 exists")
}

/// Steps `months` whole calendar months from the month containing `d`,
/// landing on day 1. Stepping from day 1 (rather than preserving the
/// day-of-month) avoids overflow at month boundaries like Jan 31 → Feb.
pub fn step_months(d: NaiveDate, months: i32) -> NaiveDate {
    let total = d.year() * 12 + d.month0() as i32 + months;
    let (year, month0) = (total.div_euclid(12), total.rem_euclid(12));
    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1).expect("day 1 always exists")
}

/// Resolves a naive local date-time to a UTC instant in `tz`, using
/// earliest() for DST-gap disambiguation.
pub fn local_instant<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    tz.from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| {
            // A DST gap with no earliest mapping: nudge forward an hour.
            tz.from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
                .expect("naive time resolvable after gap adjustment")
        })
        .with_timezone(&Utc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_window_is_sunday_anchored() {
        // 2026-03-04 is a Wednesday.
        let wed = date(2026, 3, 4);
        assert_eq!(start_of_week(wed), date(2026, 3, 1));
        assert_eq!(end_of_week(wed), date(2026, 3, 7));
        // A Sunday is its own week start.
        assert_eq!(start_of_week(date(2026, 3, 1)), date(2026, 3, 1));
    }

    #[test]
    fn test_end_of_month_handles_leap_years() {
        assert_eq!(end_of_month(date(2028, 2, 10)), date(2028, 2, 29));
        assert_eq!(end_of_month(date(2026, 2, 10)), date(2026, 2, 28));
        assert_eq!(end_of_month(date(2026, 12, 25)), date(2026, 12, 31));
    }

    #[test]
    fn test_step_months_lands_on_day_one() {
        assert_eq!(step_months(date(2026, 1, 31), 1), date(2026, 2, 1));
        assert_eq!(step_months(date(2026, 1, 15), -1), date(2025, 12, 1));
        assert_eq!(step_months(date(2026, 12, 3), 1), date(2027, 1, 1));
        assert_eq!(step_months(date(2026, 1, 1), -13), date(2024, 12, 1));
    }

    #[test]
    fn test_day_bounds() {
        let d = date(2026, 3, 4);
        assert_eq!(start_of_day(d).to_string(), "2026-03-04 00:00:00");
        assert_eq!(end_of_day(d).to_string(), "2026-03-04 23:59:59.999");
    }
}
