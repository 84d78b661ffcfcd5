// Manages background feed fetches for the TUI.
//
// One spawned actor owns all network IO. Results arrive in the UI loop as
// discrete AppEvent messages on a single channel, so overlapping fetches
// resolve last-write-wins without any shared-state mutation.
use crate::feed;
use crate::tui::action::{Action, AppEvent};
use tokio::sync::mpsc::{Receiver, Sender};

pub async fn run_network_actor(
    feed_url: String,
    import_url: String,
    mut action_rx: Receiver<Action>,
    event_tx: Sender<AppEvent>,
) {
    // 1. Startup load of the remote feed.
    let _ = event_tx
        .send(AppEvent::Status("Loading events...".to_string()))
        .await;
    match feed::fetch_events(&feed_url).await {
        Ok(raw) => {
            let _ = event_tx.send(AppEvent::RemoteLoaded(raw)).await;
        }
        Err(e) => {
            log::error!("Remote feed load failed: {:#}", e);
            let _ = event_tx.send(AppEvent::RemoteFailed(e.to_string())).await;
        }
    }

    // 2. Action loop: on-demand imports until shutdown.
    while let Some(action) = action_rx.recv().await {
        match action {
            Action::Quit => break,
            Action::Import => {
                let _ = event_tx
                    .send(AppEvent::Status("Importing...".to_string()))
                    .await;
                match feed::fetch_events(&import_url).await {
                    Ok(raw) => {
                        let _ = event_tx.send(AppEvent::Imported(raw)).await;
                    }
                    Err(e) => {
                        log::warn!("Import fetch failed: {:#}", e);
                        let _ = event_tx.send(AppEvent::ImportFailed(e.to_string())).await;
                    }
                }
            }
        }
    }
}
