//! # Actions
//!
//! Everything that can happen in Voltage becomes an `Action`: a key press,
//! or the result of a command that finished in the background. `update()`
//! is the single place they are dispatched. It mutates the `App` and
//! returns the follow-up commands (`Effect`s) for the TUI to run.
//!
//! ```text
//! App + Action  →  update()  →  App' + [Effect]
//!                                         │
//!          Action (typed result)  ◄── run async
//! ```
//!
//! `update()` never performs I/O and never waits on an effect, which keeps
//! the whole state machine testable with plain values.

use std::time::Duration;

use log::{debug, error, info, warn};

use crate::core::heading::{HeadingError, HeadingPool};
use crate::core::selector::SelectorEffect;
use crate::core::state::{App, AppState, CurrentHeading, Outcome};
use crate::store::{RcConfig, StoreError};

/// Key input, already stripped of terminal details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Enter,
    Space,
}

#[derive(Debug)]
pub enum Action {
    Quit,
    Input(Input),
    SelectorReady,
    ConfigChecked(Result<bool, StoreError>),
    /// Content from either `load` or `fetch_default`.
    ConfigLoaded(Result<RcConfig, StoreError>),
    ConfigPersisted(Result<(), StoreError>),
    HeadingRolled(Result<usize, HeadingError>),
    ErrorDisplayElapsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    InitSelector,
    CheckConfig,
    FetchDefaultConfig,
    LoadConfig,
    PersistConfig(RcConfig),
    Reroll {
        pool: HeadingPool,
        current: Option<usize>,
    },
    /// Deliver `ErrorDisplayElapsed` after the delay.
    ScheduleExit(Duration),
    /// End the session now, dropping anything still in flight.
    Exit(Outcome),
}

/// Commands issued when the session starts. They may complete in any order.
pub fn start(app: &mut App) -> Vec<Effect> {
    info!("Session starting in {}", app.state.name());
    vec![Effect::InitSelector, Effect::CheckConfig]
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    if app.is_finished() {
        debug!("Session over, dropping {:?}", action);
        return Vec::new();
    }

    match action {
        Action::Quit => {
            info!("Quit requested in {}", app.state.name());
            app.outcome = Some(Outcome::UserQuit);
            vec![Effect::Exit(Outcome::UserQuit)]
        }
        // Independent of the config phase, so accepted in any state
        Action::SelectorReady => {
            app.selector.init();
            Vec::new()
        }
        action => match app.state {
            AppState::LoadingConfig => loading_config(app, action),
            AppState::SelectingLocale => selecting_locale(app, action),
            AppState::ShowingHeading => showing_heading(app, action),
            AppState::ConfigError(_) => config_error(app, action),
        },
    }
}

fn loading_config(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::ConfigChecked(Ok(false)) => {
            info!("No rc file, fetching default");
            vec![Effect::FetchDefaultConfig]
        }
        Action::ConfigChecked(Ok(true)) => {
            info!("Rc file found, loading");
            vec![Effect::LoadConfig]
        }
        Action::ConfigChecked(Err(e)) | Action::ConfigLoaded(Err(e)) => fail(app, e),
        Action::ConfigLoaded(Ok(config)) => {
            app.api_url = config.api_url;
            match config.locale {
                // Locale came from disk: nothing to write back
                Some(locale) => {
                    info!("Locale {} from rc file", locale);
                    app.locale = Some(locale);
                    show_headings(app, HeadingPool::for_locale(locale))
                }
                None => {
                    info!("Locale unset, asking the user");
                    app.state = AppState::SelectingLocale;
                    Vec::new()
                }
            }
        }
        other => ignore(app, other),
    }
}

fn selecting_locale(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::Input(input) => {
            if let SelectorEffect::Submitted(locale) = app.selector.update(input) {
                debug!("Selector submitted {}", locale);
            }
            match app.selector.submitted_value() {
                Some(locale) if !app.persisting => {
                    info!("Locale {} chosen, saving", locale);
                    app.locale = Some(locale);
                    app.persisting = true;
                    vec![Effect::PersistConfig(RcConfig {
                        api_url: app.api_url.clone(),
                        locale: Some(locale),
                    })]
                }
                _ => Vec::new(),
            }
        }
        Action::ConfigPersisted(Ok(())) if app.persisting => {
            app.persisting = false;
            match app.locale {
                Some(locale) => show_headings(app, HeadingPool::for_locale(locale)),
                None => {
                    warn!("Rc saved but no locale recorded");
                    Vec::new()
                }
            }
        }
        Action::ConfigPersisted(Err(e)) => {
            app.persisting = false;
            fail(app, e)
        }
        other => ignore(app, other),
    }
}

fn showing_heading(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::Input(Input::Space | Input::Enter) => match app.pool {
            Some(pool) => vec![Effect::Reroll {
                pool,
                current: app.heading_index(),
            }],
            None => Vec::new(),
        },
        Action::HeadingRolled(Ok(index)) => {
            let Some(pool) = app.pool else {
                return Vec::new();
            };
            match pool.lookup(index) {
                Ok(text) => {
                    debug!("Heading {} -> {}", index, text);
                    app.heading = Some(CurrentHeading { index, text });
                    app.notice = None;
                }
                Err(e) => {
                    error!("{e}");
                    app.notice = Some(e.to_string());
                }
            }
            Vec::new()
        }
        Action::HeadingRolled(Err(e)) => {
            error!("Reroll failed: {e}");
            app.notice = Some(e.to_string());
            Vec::new()
        }
        other => ignore(app, other),
    }
}

fn config_error(app: &mut App, action: Action) -> Vec<Effect> {
    match action {
        Action::ErrorDisplayElapsed => {
            info!("Error display elapsed, exiting");
            app.outcome = Some(Outcome::ConfigFailure);
            vec![Effect::Exit(Outcome::ConfigFailure)]
        }
        other => ignore(app, other),
    }
}

fn show_headings(app: &mut App, pool: HeadingPool) -> Vec<Effect> {
    app.pool = Some(pool);
    app.state = AppState::ShowingHeading;
    vec![Effect::Reroll {
        pool,
        current: None,
    }]
}

fn fail(app: &mut App, e: StoreError) -> Vec<Effect> {
    error!("Config failure in {}: {}", app.state.name(), e);
    app.state = AppState::ConfigError(e);
    vec![Effect::ScheduleExit(app.error_display)]
}

fn ignore(app: &App, action: Action) -> Vec<Effect> {
    debug!("Ignoring {:?} in {}", action, app.state.name());
    Vec::new()
}
