// File: src/tui/view.rs
// Paints the layout engine's output. All positioning decisions live in
// crate::calendar; this file only turns layout structures into widgets.
use crate::calendar::{self, CELL_EVENT_CAP, MonthLayout, TemporalStatus, ViewMode};
use crate::model::Event;
use crate::model::display::{
    format_range, format_time, relative_time, sanitize_link, strip_control,
};
use crate::tui::state::{AppState, InputMode};
use chrono::{DateTime, Local, Utc};
use unicode_width::UnicodeWidthChar;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let footer_height = if state.show_full_help {
        Constraint::Length(8)
    } else {
        Constraint::Length(3)
    };
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), footer_height])
        .split(f.area());

    draw_header(f, state, v_chunks[0]);
    match state.calendar.view {
        ViewMode::List => draw_list(f, state, v_chunks[1]),
        ViewMode::Week => draw_week(f, state, v_chunks[1]),
        ViewMode::Month => draw_month(f, state, v_chunks[1]),
    }
    draw_footer(f, state, v_chunks[2]);
}

fn range_label(state: &AppState) -> String {
    let now = Utc::now();
    match state.calendar.view {
        ViewMode::List => calendar::results_label(state.filtered.len()),
        ViewMode::Week => {
            calendar::layout_week(&[], state.calendar.anchor, &Local, now, state.week_row_height)
                .label
        }
        ViewMode::Month => calendar::layout_month(&[], state.calendar.anchor, &Local, now).label,
    }
}

fn filter_summary(state: &AppState) -> String {
    let f = &state.filters;
    let mut parts = vec![];
    if !f.query.is_empty() {
        parts.push(format!("\"{}\"", f.query));
    }
    if !f.campus.is_empty() {
        parts.push(format!("campus:{}", f.campus));
    }
    if !f.category.is_empty() {
        parts.push(format!("category:{}", f.category));
    }
    if let Some(from) = f.date_from {
        parts.push(format!("from:{}", from));
    }
    if let Some(to) = f.date_to {
        parts.push(format!("to:{}", to));
    }
    parts.push(format!("sort:{}", f.sort));
    parts.join("  ")
}

fn draw_header(f: &mut Frame, state: &AppState, area: Rect) {
    let title = if state.loading {
        " Freebites (loading...) ".to_string()
    } else {
        format!(" Freebites — {} ", range_label(state))
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("[{}] ", state.calendar.view),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(filter_summary(state)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(header, area);
}

fn status_span(status: TemporalStatus) -> Option<Span<'static>> {
    match status {
        TemporalStatus::Ongoing => Some(Span::styled(
            "[NOW] ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        TemporalStatus::Past => Some(Span::styled("[past] ", Style::default().fg(Color::DarkGray))),
        TemporalStatus::Upcoming => None,
    }
}

fn draw_list(f: &mut Frame, state: &mut AppState, area: Rect) {
    let now = Utc::now();
    let entries = calendar::layout_list(&state.filtered, now);

    if entries.is_empty() {
        let empty = Paragraph::new("No events match your filters. Try clearing filters or widening the date range.")
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    // Selected event gets a detail pane below the list: description,
    // dietary and link live there rather than on every card.
    let area = if let Some(selected) = state.get_selected_event().cloned() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(7)])
            .split(area);
        draw_detail(f, &selected, now, chunks[1]);
        chunks[0]
    } else {
        area
    };

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let ev = &entry.event;
            let mut title_spans = vec![];
            if let Some(pill) = status_span(entry.status) {
                title_spans.push(pill);
            }
            let dimmed = entry.status == TemporalStatus::Past;
            title_spans.push(Span::styled(
                strip_control(&ev.title),
                if dimmed {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                },
            ));

            let mut meta = format!(
                "  {} • {}",
                format_range(ev.start, ev.end),
                relative_time(ev.start, now)
            );
            if !ev.campus.is_empty() {
                meta.push_str(&format!(" • {}", strip_control(&ev.campus)));
            }
            if !ev.category.is_empty() {
                meta.push_str(&format!(" • {}", strip_control(&ev.category)));
            }
            if !ev.location.is_empty() {
                meta.push_str(&format!(" • {}", strip_control(&ev.location)));
            }
            if !ev.dietary.is_empty() {
                meta.push_str(&format!(" • [{}]", strip_control(&ev.dietary)));
            }
            if !ev.host.is_empty() {
                meta.push_str(&format!(" • Host: {}", strip_control(&ev.host)));
            }

            ListItem::new(vec![
                Line::from(title_spans),
                Line::from(Span::styled(meta, Style::default().fg(Color::Gray))),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut state.list_state);
}

/// Text for the selected-event pane. Untrusted fields lose control
/// characters; the link additionally goes through `sanitize_link` so the
/// value is safe to hand to a terminal hyperlink escape.
pub fn detail_lines(ev: &Event, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({})",
        format_range(ev.start, ev.end),
        relative_time(ev.start, now)
    )];
    if !ev.host.is_empty() || !ev.location.is_empty() {
        let mut parts = vec![];
        if !ev.host.is_empty() {
            parts.push(strip_control(&ev.host));
        }
        if !ev.location.is_empty() {
            parts.push(strip_control(&ev.location));
        }
        lines.push(parts.join(" • "));
    }
    if !ev.dietary.is_empty() {
        lines.push(format!("Dietary: {}", strip_control(&ev.dietary)));
    }
    if !ev.description.is_empty() {
        lines.push(strip_control(&ev.description));
    }
    if !ev.link.is_empty() {
        lines.push(format!("Link: {}", sanitize_link(&strip_control(&ev.link))));
    }
    lines
}

fn draw_detail(f: &mut Frame, ev: &Event, now: DateTime<Utc>, area: Rect) {
    let lines: Vec<Line> = detail_lines(ev, now)
        .into_iter()
        .map(Line::from)
        .collect();
    let pane = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", strip_control(&ev.title))),
    );
    f.render_widget(pane, area);
}

fn draw_week(f: &mut Frame, state: &AppState, area: Rect) {
    let now = Utc::now();
    let layout = calendar::layout_week(
        &state.filtered,
        state.calendar.anchor,
        &Local,
        now,
        state.week_row_height,
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(area);

    let today = now.with_timezone(&Local).date_naive();
    for (day_idx, col_area) in cols.iter().enumerate() {
        let date = layout.days[day_idx];
        let mut day_blocks: Vec<_> = layout
            .blocks
            .iter()
            .filter(|b| b.day == day_idx)
            .collect();
        day_blocks.sort_by(|a, b| a.top.total_cmp(&b.top));

        let mut lines = vec![];
        for block in day_blocks {
            let style = if block.ongoing {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            lines.push(Line::from(Span::styled(
                fit(
                    &format!(
                        "{} {}",
                        format_time(block.event.start),
                        strip_control(&block.event.title)
                    ),
                    col_area.width.saturating_sub(2) as usize,
                ),
                style,
            )));
            // Rows proportional to the block's time-axis height.
            let extra_rows =
                (block.height / state.week_row_height).ceil() as usize - 1;
            for _ in 0..extra_rows.min(3) {
                lines.push(Line::from(Span::styled("│", style)));
            }
        }

        let title_style = if date == today {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(date.format("%a %-m/%-d").to_string(), title_style));
        f.render_widget(Paragraph::new(lines).block(block), *col_area);
    }
}

fn draw_month(f: &mut Frame, state: &AppState, area: Rect) {
    let now = Utc::now();
    let layout: MonthLayout =
        calendar::layout_month(&state.filtered, state.calendar.anchor, &Local, now);

    let row_count = layout.weeks.len().max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);

    for (week, row_area) in layout.weeks.iter().zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 7); 7])
            .split(*row_area);

        for (cell, cell_area) in week.iter().zip(cols.iter()) {
            let day_style = if cell.today {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if cell.outside {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };

            let width = cell_area.width.saturating_sub(2) as usize;
            let mut lines = vec![];
            for ev in &cell.events {
                let text = fit(
                    &format!("{} {}", format_time(ev.start), strip_control(&ev.title)),
                    width,
                );
                let style = if ev.is_ongoing(now) {
                    Style::default().fg(Color::Green)
                } else if cell.outside {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                lines.push(Line::from(Span::styled(text, style)));
            }
            if cell.overflow > 0 {
                lines.push(Line::from(Span::styled(
                    format!("+{} more", cell.overflow),
                    Style::default().fg(Color::Magenta),
                )));
            }
            debug_assert!(cell.events.len() <= CELL_EVENT_CAP);

            let block = Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(cell.date.format("%-d").to_string(), day_style));
            f.render_widget(Paragraph::new(lines).block(block), *cell_area);
        }
    }
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    let full_help = vec![
        Line::from(" VIEWS      1:List  2:Week  3:Month   t:Today  [ ]:Prev/Next"),
        Line::from(" FILTERS    /:Search  c:Campus  g:Category  s:Sort  f:Dates  x:Clear"),
        Line::from(" EVENTS     a:Submit (title; start; end; location; campus; category)"),
        Line::from("            i:Import scraped events  D:Clear local submissions"),
        Line::from(" SUBMIT ex. Free tacos; 2026-03-04T18:00; ; Union; Main; Lunch"),
        Line::from(" DATES ex.  2026-03-01..2026-03-07  (either side optional)"),
    ];

    let content = match state.mode {
        InputMode::Searching => vec![Line::from(format!("Search: {}", state.input_buffer))],
        InputMode::Submitting => vec![Line::from(format!("New event: {}", state.input_buffer))],
        InputMode::DateRange => vec![Line::from(format!("Date range: {}", state.input_buffer))],
        InputMode::Normal if state.show_full_help => full_help,
        InputMode::Normal => vec![Line::from(
            " q:Quit  ?:Help  /:Search  1/2/3:View  t:Today  [ ]:Navigate  a:Submit  i:Import",
        )],
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", state.message)),
    );
    f.render_widget(footer, area);
}

/// Truncates to a display width, honoring wide characters.
fn fit(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
