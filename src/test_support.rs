//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;
use std::time::Duration;

use crate::core::heading::HeadingPool;
use crate::core::locale::Locale;
use crate::core::state::{App, AppState, CurrentHeading};
use crate::store::{RcConfig, StoreError};

pub const TEST_ERROR_DISPLAY: Duration = Duration::from_secs(3);

/// A fresh session, still loading its config.
pub fn test_app() -> App {
    App::new(TEST_ERROR_DISPLAY)
}

/// A session already showing heading `index` of `locale`'s pool.
pub fn showing(locale: Locale, index: usize) -> App {
    let pool = HeadingPool::for_locale(locale);
    let mut app = test_app();
    app.locale = Some(locale);
    app.pool = Some(pool);
    app.heading = pool.lookup(index).ok().map(|text| CurrentHeading { index, text });
    app.state = AppState::ShowingHeading;
    app
}

pub fn loaded(api_url: &str, locale: Option<Locale>) -> RcConfig {
    RcConfig {
        api_url: api_url.to_string(),
        locale,
    }
}

pub fn io_error() -> StoreError {
    StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"))
}
