// Defines actions and events for TUI interaction and state updates.
use crate::model::RawEvent;

/// Requests sent from the UI loop to the background feed actor.
#[derive(Debug)]
pub enum Action {
    Import,
    Quit,
}

/// Results and notices flowing back into the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    RemoteLoaded(Vec<RawEvent>),
    RemoteFailed(String),
    Imported(Vec<RawEvent>),
    ImportFailed(String),
    Status(String),
}
