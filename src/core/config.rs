//! # Runtime Settings
//!
//! How Voltage itself runs, as opposed to the rc file it manages.
//! Override hierarchy: defaults → environment (`.env` included) → CLI flags.

use std::path::PathBuf;
use std::time::Duration;

use log::{LevelFilter, warn};

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_RC_URL: &str = "https://raw.githubusercontent.com/pgulb/voltage/main/.voltagerc";
pub const DEFAULT_LOG_FILE: &str = "voltage.log";
pub const DEFAULT_ERROR_DELAY_SECS: u64 = 10;

pub const ENV_RC_FILE: &str = "VOLTAGE_RC_FILE";
pub const ENV_DEFAULT_URL: &str = "VOLTAGE_DEFAULT_URL";
pub const ENV_LOG_FILE: &str = "VOLTAGE_LOG_FILE";
pub const ENV_ERROR_DELAY: &str = "VOLTAGE_ERROR_DELAY";

// ============================================================================
// Inputs and resolved settings
// ============================================================================

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub rc_file: Option<PathBuf>,
    pub default_url: Option<String>,
    pub log_file: Option<PathBuf>,
    pub error_delay_secs: Option<u64>,
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// `None` means `<home>/config/.voltagerc`, resolved when first needed.
    pub rc_file: Option<PathBuf>,
    pub default_url: String,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// How long the error screen stays up before exiting.
    pub error_display: Duration,
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse defaults → env → CLI into concrete settings.
///
/// `env` looks a variable up; pass `|k| std::env::var(k).ok()` in production.
pub fn resolve<F>(cli: &CliOverrides, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    let rc_file = cli
        .rc_file
        .clone()
        .or_else(|| non_empty(ENV_RC_FILE).map(PathBuf::from));

    let default_url = cli
        .default_url
        .clone()
        .or_else(|| non_empty(ENV_DEFAULT_URL))
        .unwrap_or_else(|| DEFAULT_RC_URL.to_string());

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| non_empty(ENV_LOG_FILE).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let error_delay_secs = cli
        .error_delay_secs
        .or_else(|| {
            non_empty(ENV_ERROR_DELAY).and_then(|raw| match raw.trim().parse() {
                Ok(secs) => Some(secs),
                Err(e) => {
                    warn!("Ignoring {ENV_ERROR_DELAY}={raw:?}: {e}");
                    None
                }
            })
        })
        .unwrap_or(DEFAULT_ERROR_DELAY_SECS);

    Settings {
        rc_file,
        default_url,
        log_file,
        log_level: if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        error_display: Duration::from_secs(error_delay_secs),
    }
}
