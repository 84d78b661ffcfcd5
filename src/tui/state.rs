// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::calendar::{CalendarState, ViewMode};
use crate::config::Config;
use crate::context::SharedContext;
use crate::model::filter::SortKey;
use crate::model::{CAMPUSES, Event, FilterState};
use crate::store::EventStore;
use crate::tui::debounce::Debouncer;
use chrono::Local;
use ratatui::widgets::ListState;
use std::collections::BTreeSet;
use std::time::Duration;

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Searching,
    Submitting,
    DateRange,
}

pub struct AppState {
    // Data
    pub store: EventStore,
    pub filtered: Vec<Event>,

    // Pipeline State (replaced wholesale on every change)
    pub filters: FilterState,
    pub calendar: CalendarState,

    // Cached filter choices derived from the current union
    pub cached_categories: Vec<String>,

    // UI State
    pub list_state: ListState,
    pub mode: InputMode,
    pub message: String,
    pub loading: bool,
    pub show_full_help: bool,

    // Input Buffers
    pub input_buffer: String,
    pub cursor_position: usize,
    /// Committed query restored when a search is cancelled.
    pub prior_query: String,
    pub debounce: Debouncer,

    pub week_row_height: f32,
}

impl AppState {
    pub fn new_with_ctx(ctx: SharedContext, config: &Config) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            store: EventStore::new(ctx),
            filtered: vec![],
            filters: FilterState::default(),
            calendar: CalendarState::new(Local::now().date_naive()),
            cached_categories: vec![],
            list_state,
            mode: InputMode::Normal,
            message: "Loading...".to_string(),
            loading: true,
            show_full_help: false,
            input_buffer: String::new(),
            cursor_position: 0,
            prior_query: String::new(),
            debounce: Debouncer::new(Duration::from_millis(config.search_debounce_ms)),
            week_row_height: config.week_row_height,
        }
    }

    /// Recomputes the filtered view and the derived category choices.
    /// Called after every trigger that replaces a collection or the
    /// filter/calendar state.
    pub fn refresh_filtered_view(&mut self) {
        self.filtered = self.store.filtered(&self.filters, &Local);

        let categories: BTreeSet<String> = self
            .store
            .union()
            .into_iter()
            .map(|e| e.category)
            .filter(|c| !c.is_empty())
            .collect();
        self.cached_categories = categories.into_iter().collect();

        let len = self.filtered.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(current.min(len - 1))); // Clamp
        }
    }

    pub fn get_selected_event(&self) -> Option<&Event> {
        self.list_state.selected().and_then(|i| self.filtered.get(i))
    }

    // --- FILTER MUTATIONS (whole-state replacement) ---

    pub fn set_query(&mut self, query: String) {
        let mut next = self.filters.clone();
        next.query = query;
        self.filters = next;
        self.refresh_filtered_view();
    }

    /// Cycles campus through "" and the known labels.
    pub fn cycle_campus(&mut self) {
        let mut choices = vec![String::new()];
        choices.extend(CAMPUSES.iter().map(|c| c.to_string()));
        let idx = choices
            .iter()
            .position(|c| *c == self.filters.campus)
            .unwrap_or(0);
        let mut next = self.filters.clone();
        next.campus = choices[(idx + 1) % choices.len()].clone();
        self.filters = next;
        self.refresh_filtered_view();
    }

    /// Cycles category through "" and everything present in the union.
    pub fn cycle_category(&mut self) {
        let mut choices = vec![String::new()];
        choices.extend(self.cached_categories.iter().cloned());
        let idx = choices
            .iter()
            .position(|c| *c == self.filters.category)
            .unwrap_or(0);
        let mut next = self.filters.clone();
        next.category = choices[(idx + 1) % choices.len()].clone();
        self.filters = next;
        self.refresh_filtered_view();
    }

    pub fn cycle_sort(&mut self) {
        let mut next = self.filters.clone();
        next.sort = match self.filters.sort {
            SortKey::Soonest => SortKey::Latest,
            SortKey::Latest => SortKey::Added,
            SortKey::Added => SortKey::Soonest,
            SortKey::Unsorted => SortKey::Soonest,
        };
        self.filters = next;
        self.refresh_filtered_view();
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.refresh_filtered_view();
    }

    // --- CALENDAR NAVIGATION ---

    pub fn set_view(&mut self, view: ViewMode) {
        self.calendar.set_view(view);
    }

    pub fn shift_anchor(&mut self, direction: i32) {
        self.calendar.shift(direction);
    }

    pub fn go_today(&mut self) {
        self.calendar.reset_to(Local::now().date_naive());
    }

    // --- LIST SELECTION ---

    pub fn next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= self.filtered.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.filtered.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    // --- INPUT HELPERS ---

    pub fn enter_char(&mut self, new_char: char) {
        // Safe insertion for UTF-8 strings
        let byte_index = self
            .input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let before = self.input_buffer.chars().take(current_index - 1);
            let after = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before.chain(after).collect();
            self.move_cursor_left();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.clamp_cursor(self.cursor_position.saturating_sub(1));
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = self.clamp_cursor(self.cursor_position.saturating_add(1));
    }

    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }
}
