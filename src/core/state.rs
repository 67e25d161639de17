//! # Application State
//!
//! Everything the controller knows about the session, in one place.
//!
//! ```text
//! App
//! ├── state: AppState              // which screen / phase we're in
//! ├── api_url: String              // carried through from the rc file
//! ├── locale: Option<Locale>       // resolved once per session
//! ├── selector: LocaleSelector     // form state, initialised at startup
//! ├── persisting: bool             // waiting for the rc write to finish
//! ├── pool: Option<HeadingPool>    // active phrases, built once locale is known
//! ├── heading: Option<CurrentHeading>
//! ├── notice: Option<String>       // non-fatal problem shown under the heading
//! ├── error_display: Duration      // how long ConfigError stays on screen
//! └── outcome: Option<Outcome>     // set once the session is over
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::time::Duration;

use crate::core::heading::HeadingPool;
use crate::core::locale::Locale;
use crate::core::selector::LocaleSelector;
use crate::store::StoreError;

#[derive(Debug)]
pub enum AppState {
    LoadingConfig,
    /// Terminal. Shown until the exit timer fires or the user quits.
    ConfigError(StoreError),
    SelectingLocale,
    ShowingHeading,
}

impl AppState {
    pub fn name(&self) -> &'static str {
        match self {
            AppState::LoadingConfig => "LoadingConfig",
            AppState::ConfigError(_) => "ConfigError",
            AppState::SelectingLocale => "SelectingLocale",
            AppState::ShowingHeading => "ShowingHeading",
        }
    }
}

/// The proverb on screen. `text` is always `pool[index]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentHeading {
    pub index: usize,
    pub text: &'static str,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    UserQuit,
    ConfigFailure,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::UserQuit => 0,
            Outcome::ConfigFailure => 1,
        }
    }
}

pub struct App {
    pub state: AppState,
    pub api_url: String,
    pub locale: Option<Locale>,
    pub selector: LocaleSelector,
    /// True between submitting the selector and the rc write completing.
    pub persisting: bool,
    pub pool: Option<HeadingPool>,
    pub heading: Option<CurrentHeading>,
    pub notice: Option<String>,
    pub error_display: Duration,
    pub outcome: Option<Outcome>,
}

impl App {
    pub fn new(error_display: Duration) -> Self {
        Self {
            state: AppState::LoadingConfig,
            api_url: String::new(),
            locale: None,
            selector: LocaleSelector::new(),
            persisting: false,
            pool: None,
            heading: None,
            notice: None,
            error_display,
            outcome: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn heading_index(&self) -> Option<usize> {
        self.heading.as_ref().map(|h| h.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(matches!(app.state, AppState::LoadingConfig));
        assert_eq!(app.locale, None);
        assert!(app.pool.is_none());
        assert!(app.heading.is_none());
        assert!(!app.is_finished());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Outcome::UserQuit.exit_code(), 0);
        assert_eq!(Outcome::ConfigFailure.exit_code(), 1);
    }
}
