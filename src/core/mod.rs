//! # Core Application Logic
//!
//! The controller and the pieces it sequences. Nothing here knows about
//! ratatui or crossterm, and nothing here performs I/O: commands leave as
//! `Effect`s and come back as `Action`s.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │          CORE           │
//!                    │                         │
//!                    │  • App (session state)  │
//!                    │  • Action / Effect      │
//!                    │  • update() (reducer)   │
//!                    │  • headings, selector   │
//!                    └───────────┬─────────────┘
//!                                │ Effect ▼   ▲ Action
//!                    ┌───────────┴─────────────┐
//!                    │   TUI (ratatui, tokio)  │──► store (rc file, HTTP)
//!                    └─────────────────────────┘
//! ```
//!
//! ## State machine
//!
//! ```text
//! LoadingConfig ──locale unset──► SelectingLocale ──persisted──► ShowingHeading ◄─┐
//!      │  └──────────locale set (no persist)────────────────────────►│  reroll ─┘
//!      └──any store failure──► ConfigError ──timer──► exit 1
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: `Action`, `Effect` and the `update()` dispatch point
//! - [`heading`]: Proverb pools and the non-repeating reroll
//! - [`selector`]: The locale form
//! - [`locale`]: `EN` / `PL`
//! - [`config`]: Runtime settings (paths, URLs, timings)

pub mod action;
pub mod config;
pub mod heading;
pub mod locale;
pub mod selector;
pub mod state;
