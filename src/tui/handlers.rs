// File: src/tui/handlers.rs
// Handles keyboard input and feed events for the TUI.
use crate::calendar::ViewMode;
use crate::model::RawEvent;
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::{AppState, InputMode};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Status(s) => state.message = s,
        AppEvent::RemoteLoaded(raw) => {
            let count = raw.len();
            state.store.set_remote_raw(raw);
            state.refresh_filtered_view();
            state.loading = false;
            state.message = format!("Loaded {} event(s).", count);
        }
        AppEvent::RemoteFailed(_) => {
            // Keep the UI usable with whatever local events exist.
            state.store.set_remote_raw(vec![]);
            state.refresh_filtered_view();
            state.loading = false;
            state.message = "Could not load the event feed; showing local events only.".into();
        }
        AppEvent::Imported(raw) => {
            let count = state.store.import_raw(raw);
            state.refresh_filtered_view();
            state.message = format!("Imported {} scraped event(s).", count);
        }
        AppEvent::ImportFailed(_) => {
            // Transient notice only; the loaded remote set stays as-is.
            state.message = "No scraped data available yet. Try again later.".into();
        }
    }
}

/// A local submission as one input line, fields separated by `;`:
/// `title; start; end; location; campus; category`.
/// Only title and start matter; trailing fields may be omitted.
pub fn parse_submission(input: &str) -> RawEvent {
    let mut parts = input.split(';').map(str::trim);
    let some = |s: &str| {
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    };
    RawEvent {
        title: parts.next().and_then(some),
        start: parts.next().and_then(some),
        end: parts.next().and_then(some),
        location: parts.next().and_then(some),
        campus: parts.next().and_then(some),
        category: parts.next().and_then(some),
        ..Default::default()
    }
}

/// Date-range input: `from..to`, with either side optional. An empty
/// string clears both bounds.
pub fn parse_date_range(input: &str) -> Result<(Option<NaiveDate>, Option<NaiveDate>), String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok((None, None));
    }
    let (from_s, to_s) = input.split_once("..").unwrap_or((input, ""));
    let parse = |s: &str| -> Result<Option<NaiveDate>, String> {
        if s.trim().is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("Not a date: {}", s.trim()))
    };
    Ok((parse(from_s)?, parse(to_s)?))
}

/// Returns an Action for the network actor when one is needed.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match state.mode {
        InputMode::Normal => handle_normal_key(key, state),
        InputMode::Searching => {
            handle_search_key(key, state);
            None
        }
        InputMode::Submitting | InputMode::DateRange => {
            handle_form_key(key, state);
            None
        }
    }
}

fn handle_normal_key(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('?') => state.show_full_help = !state.show_full_help,

        // Selection
        KeyCode::Char('j') | KeyCode::Down => state.next(),
        KeyCode::Char('k') | KeyCode::Up => state.previous(),

        // Views
        KeyCode::Char('1') => state.set_view(ViewMode::List),
        KeyCode::Char('2') => state.set_view(ViewMode::Week),
        KeyCode::Char('3') => state.set_view(ViewMode::Month),

        // Navigation
        KeyCode::Char('t') => state.go_today(),
        KeyCode::Char('[') | KeyCode::Left => state.shift_anchor(-1),
        KeyCode::Char(']') | KeyCode::Right => state.shift_anchor(1),

        // Filters
        KeyCode::Char('/') => {
            state.mode = InputMode::Searching;
            state.prior_query = state.filters.query.clone();
            state.reset_input();
            state.input_buffer = state.filters.query.clone();
            state.cursor_position = state.input_buffer.chars().count();
        }
        KeyCode::Char('c') => state.cycle_campus(),
        KeyCode::Char('g') => state.cycle_category(),
        KeyCode::Char('s') => state.cycle_sort(),
        KeyCode::Char('f') => {
            state.mode = InputMode::DateRange;
            state.reset_input();
        }
        KeyCode::Char('x') => {
            state.clear_filters();
            state.message = "Filters cleared.".into();
        }

        // Events
        KeyCode::Char('a') => {
            state.mode = InputMode::Submitting;
            state.reset_input();
        }
        KeyCode::Char('i') => return Some(Action::Import),
        KeyCode::Char('D') => match state.store.clear_local() {
            Ok(()) => {
                state.refresh_filtered_view();
                state.message = "Cleared local submissions.".into();
            }
            Err(e) => state.message = format!("Could not clear local events: {}", e),
        },
        _ => {}
    }
    None
}

fn handle_search_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter => {
            state.debounce.cancel();
            state.set_query(state.input_buffer.clone());
            state.mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            state.debounce.cancel();
            let prior = state.prior_query.clone();
            state.set_query(prior);
            state.mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.delete_char();
            state.debounce.poke();
        }
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        KeyCode::Char(c) => {
            state.enter_char(c);
            state.debounce.poke();
        }
        _ => {}
    }
}

fn handle_form_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter => {
            let input = state.input_buffer.clone();
            match state.mode {
                InputMode::Submitting => match state.store.submit(parse_submission(&input)) {
                    Ok(event) => {
                        state.refresh_filtered_view();
                        state.message = format!("Added \"{}\" locally.", event.title);
                    }
                    Err(e) => state.message = e.to_string(),
                },
                InputMode::DateRange => match parse_date_range(&input) {
                    Ok((from, to)) => {
                        let mut next = state.filters.clone();
                        next.date_from = from;
                        next.date_to = to;
                        state.filters = next;
                        state.refresh_filtered_view();
                    }
                    Err(e) => state.message = e,
                },
                _ => {}
            }
            state.reset_input();
            state.mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            state.reset_input();
            state.mode = InputMode::Normal;
        }
        KeyCode::Backspace => state.delete_char(),
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        KeyCode::Char(c) => state.enter_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submission_minimal() {
        let raw = parse_submission("Free tacos; 2026-03-04T18:00");
        assert_eq!(raw.title.as_deref(), Some("Free tacos"));
        assert_eq!(raw.start.as_deref(), Some("2026-03-04T18:00"));
        assert!(raw.end.is_none());
        assert!(raw.campus.is_none());
    }

    #[test]
    fn test_parse_submission_full() {
        let raw =
            parse_submission("Bake sale; 2026-03-04T10:00; 2026-03-04T12:00; Union; Main; Snacks");
        assert_eq!(raw.location.as_deref(), Some("Union"));
        assert_eq!(raw.campus.as_deref(), Some("Main"));
        assert_eq!(raw.category.as_deref(), Some("Snacks"));
    }

    #[test]
    fn test_parse_date_range_variants() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(
            parse_date_range("2026-03-01..2026-03-07").unwrap(),
            (Some(d(2026, 3, 1)), Some(d(2026, 3, 7)))
        );
        assert_eq!(
            parse_date_range("2026-03-01..").unwrap(),
            (Some(d(2026, 3, 1)), None)
        );
        assert_eq!(
            parse_date_range("..2026-03-07").unwrap(),
            (None, Some(d(2026, 3, 7)))
        );
        assert_eq!(parse_date_range("").unwrap(), (None, None));
        assert!(parse_date_range("not-a-date..").is_err());
    }
}
