use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::{mpsc, watch};

use studio_core::models::OrchestratorState;

/// Events flowing into the main loop.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press from the user.
    Key(KeyEvent),
    /// The orchestrator published a new state.
    StateChanged(OrchestratorState),
}

/// Spawn the crossterm input polling task.
pub fn spawn_input_task(tx: mpsc::UnboundedSender<AppEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            // Poll crossterm events with 50ms timeout (non-blocking feel)
            let has_event = tokio::task::spawn_blocking(|| {
                event::poll(Duration::from_millis(50)).unwrap_or(false)
            })
            .await
            .unwrap_or(false);

            if has_event {
                if let Ok(Event::Key(key)) = tokio::task::spawn_blocking(event::read)
                    .await
                    .unwrap_or(Err(std::io::Error::other("spawn_blocking failed")))
                {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
            }
        }
    })
}

/// Forward every orchestrator state change into the event channel.
pub fn spawn_state_task(
    mut state_rx: watch::Receiver<OrchestratorState>,
    tx: mpsc::UnboundedSender<AppEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let state = state_rx.borrow_and_update().clone();
            if tx.send(AppEvent::StateChanged(state)).is_err() {
                break;
            }
        }
    })
}
