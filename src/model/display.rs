// File: ./src/model/display.rs
// Display-string helpers shared by every rendering target.
//
// Feed text is untrusted: anything interpolated into markup-like output
// goes through escape_html, link values through sanitize_link, and the TUI
// strips control characters before painting.
use chrono::{DateTime, Local, Utc};

/// Escapes `&`, `<`, `>` and `"` for inclusion in markup text content.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Strips attribute-breakout characters from a link value. The result is
/// safe to embed in a quoted attribute (or to hand to a terminal
/// hyperlink escape) but is deliberately not otherwise validated.
pub fn sanitize_link(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '"' | '\'' | '`' | '<' | '>' | '\n' | '\r'))
        .collect()
}

/// Removes control characters from untrusted text before terminal output.
pub fn strip_control(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

/// Human relative time: "in 45 min", "2 hr ago", "in 3 d".
pub fn relative_time(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = target - now;
    let future = diff >= chrono::Duration::zero();
    let mins = diff.num_minutes().abs();
    let phrase = if mins < 60 {
        format!("{} min", mins)
    } else {
        let hours = (mins as f64 / 60.0).round() as i64;
        if hours < 48 {
            format!("{} hr", hours)
        } else {
            format!("{} d", (hours as f64 / 24.0).round() as i64)
        }
    };
    if future {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

/// "2:30 PM" in the local timezone.
pub fn format_time(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%-I:%M %p").to_string()
}

/// "Wed, Mar 4, 2:30 PM" in the local timezone.
pub fn format_date_time(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%a, %b %-d, %-I:%M %p")
        .to_string()
}

/// Compact start–end text: same-day ranges share the date part.
pub fn format_range(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> String {
    let Some(end) = end else {
        return format_date_time(start);
    };
    let (s, e) = (start.with_timezone(&Local), end.with_timezone(&Local));
    if s.date_naive() == e.date_naive() {
        format!(
            "{}, {} – {}",
            s.format("%a, %b %-d"),
            s.format("%-I:%M %p"),
            e.format("%-I:%M %p")
        )
    } else {
        format!("{} – {}", format_date_time(start), format_date_time(end))
    }
}
