// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod debounce;
pub mod handlers;
pub mod network;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::context::{SharedContext, StandardContext};
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{fs::File, io, path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::mpsc;

fn init_logging(ctx: &SharedContext) {
    if let Some(path) = ctx.get_log_path()
        && let Ok(file) = File::create(&path)
    {
        let _ = simplelog::WriteLogger::init(
            simplelog::LevelFilter::Info,
            simplelog::Config::default(),
            file,
        );
    }
}

pub async fn run(override_root: Option<PathBuf>) -> Result<()> {
    // --- 1. CONTEXT, CONFIG, LOGGING ---
    let ctx: SharedContext = Arc::new(StandardContext::new(override_root));
    init_logging(&ctx);

    let cfg = match Config::load(ctx.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };

    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("freebites_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    // --- 2. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 3. STATE INIT ---
    let mut app_state = AppState::new_with_ctx(ctx.clone(), &cfg);
    // Local submissions are available immediately, before the feed lands.
    app_state.store.load_local();
    app_state.refresh_filtered_view();

    // --- 4. FEED ACTOR ---
    let (action_tx, action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);
    tokio::spawn(network::run_network_actor(
        cfg.feed_url.clone(),
        cfg.import_url.clone(),
        action_rx,
        event_tx,
    ));

    // --- 5. UI LOOP ---
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        // A. Feed Events
        if let Ok(app_event) = event_rx.try_recv() {
            handlers::handle_app_event(&mut app_state, app_event);
        }

        // B. Debounced search re-filter
        if app_state.debounce.fire_due() {
            let query = app_state.input_buffer.clone();
            app_state.set_query(query);
        }

        // C. Input Events
        if crossterm::event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                },
                Event::Key(key) => {
                    // Filter out KeyRelease events to prevent double input on Windows
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }
                    if let Some(action) = handlers::handle_key_event(key, &mut app_state) {
                        let quitting = matches!(action, Action::Quit);
                        let _ = action_tx.send(action).await;
                        if quitting {
                            break;
                        }
                    }
                }
                _ => {}
            }
        }
    }

    // --- 6. CLEANUP ---
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
