//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, translates key presses
//! into `core::action::Action` values, runs the `Effect`s that `update()`
//! returns as tokio tasks, and draws the current `App`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! One iteration: draw if something changed, wait up to 100ms for input,
//! drain all pending input, then drain all finished background results.
//! Every action goes through `update()` one at a time, so state changes
//! never race. `Exit` ends the loop immediately and aborts whatever is
//! still running.

mod component;
mod components;
mod event;
pub mod task;
mod ui;

pub use task::perform;

use std::io::{self, stdout};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use log::{debug, info};
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, Input, start, update};
use crate::core::config::Settings;
use crate::core::state::{App, Outcome};
use crate::store::{ConfigStore, FileConfigStore};
use crate::tui::event::{TuiEvent, drain_pending, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Abort handles for effects still in flight.
#[derive(Default)]
struct InFlight {
    handles: Vec<AbortHandle>,
}

impl InFlight {
    fn push(&mut self, handle: AbortHandle) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

/// Maps a terminal event to the action it stands for.
fn event_action(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Up => Some(Action::Input(Input::Up)),
        TuiEvent::Down => Some(Action::Input(Input::Down)),
        TuiEvent::Enter => Some(Action::Input(Input::Enter)),
        TuiEvent::Space => Some(Action::Input(Input::Space)),
        TuiEvent::Resize => None,
    }
}

/// Spawns every effect except `Exit`, which is returned instead.
fn dispatch(
    effects: Vec<Effect>,
    store: &Arc<dyn ConfigStore>,
    tx: &mpsc::Sender<Action>,
    in_flight: &mut InFlight,
) -> Option<Outcome> {
    for effect in effects {
        if let Effect::Exit(outcome) = effect {
            return Some(outcome);
        }
        in_flight.push(task::spawn_effect(effect, store.clone(), tx.clone()));
    }
    None
}

pub fn run(settings: Settings) -> io::Result<Outcome> {
    let store: Arc<dyn ConfigStore> = Arc::new(FileConfigStore::new(
        settings.rc_file.clone(),
        settings.default_url.clone(),
    ));
    let mut app = App::new(settings.error_display);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for results from background tasks
    let (tx, rx) = mpsc::channel();
    let mut in_flight = InFlight::default();

    let mut outcome = dispatch(start(&mut app), &store, &tx, &mut in_flight);
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if let Some(outcome) = outcome {
            break Ok(outcome);
        }

        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = match poll_event_timeout(POLL_TIMEOUT) {
            Ok(event) => event,
            Err(e) => break Err(e),
        };

        // Process first event + drain ALL pending events before next draw
        let pending = match drain_pending() {
            Ok(events) => events,
            Err(e) => break Err(e),
        };
        for event in first_event.into_iter().chain(pending) {
            needs_redraw = true;
            let Some(action) = event_action(event) else {
                continue;
            };
            outcome = dispatch(update(&mut app, action), &store, &tx, &mut in_flight);
            if outcome.is_some() {
                break;
            }
        }
        if outcome.is_some() {
            continue;
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            outcome = dispatch(update(&mut app, action), &store, &tx, &mut in_flight);
            if outcome.is_some() {
                break;
            }
        }
    };

    in_flight.abort_all();
    ratatui::restore();

    if let Ok(outcome) = &result {
        info!("Session ended: {:?}", outcome);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{RcConfig, StoreError};
    use async_trait::async_trait;
    use std::path::PathBuf;

    struct NeverStore;

    #[async_trait]
    impl ConfigStore for NeverStore {
        fn path(&self) -> Result<PathBuf, StoreError> {
            Err(StoreError::PathResolution)
        }

        async fn exists(&self) -> Result<bool, StoreError> {
            std::future::pending().await
        }

        async fn fetch_default(&self) -> Result<RcConfig, StoreError> {
            std::future::pending().await
        }

        async fn load(&self) -> Result<RcConfig, StoreError> {
            std::future::pending().await
        }

        async fn persist(&self, _config: &RcConfig) -> Result<(), StoreError> {
            std::future::pending().await
        }
    }

    #[test]
    fn test_event_action_mapping() {
        assert!(matches!(event_action(TuiEvent::Quit), Some(Action::Quit)));
        assert!(matches!(
            event_action(TuiEvent::Space),
            Some(Action::Input(Input::Space))
        ));
        assert!(matches!(
            event_action(TuiEvent::Enter),
            Some(Action::Input(Input::Enter))
        ));
        assert!(event_action(TuiEvent::Resize).is_none());
    }

    #[tokio::test]
    async fn test_dispatch_stops_at_exit_and_skips_the_rest() {
        let store: Arc<dyn ConfigStore> = Arc::new(NeverStore);
        let (tx, _rx) = mpsc::channel();
        let mut in_flight = InFlight::default();

        let outcome = dispatch(
            vec![Effect::Exit(Outcome::UserQuit), Effect::CheckConfig],
            &store,
            &tx,
            &mut in_flight,
        );
        assert_eq!(outcome, Some(Outcome::UserQuit));
        assert!(in_flight.handles.is_empty());
    }

    #[tokio::test]
    async fn test_abort_all_cancels_pending_commands() {
        let store: Arc<dyn ConfigStore> = Arc::new(NeverStore);
        let (tx, rx) = mpsc::channel();
        let mut in_flight = InFlight::default();

        let outcome = dispatch(vec![Effect::CheckConfig], &store, &tx, &mut in_flight);
        assert_eq!(outcome, None);
        assert_eq!(in_flight.handles.len(), 1);

        in_flight.abort_all();
        drop(tx);
        tokio::task::yield_now().await;
        assert!(in_flight.handles.is_empty());
        assert!(rx.try_recv().is_err());
    }
}
