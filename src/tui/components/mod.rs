//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `HeadingView`: the proverb screen
//!
//! ### Transient Wrappers Over Core State
//!
//! - `LocalePicker`: draws a borrowed `core::selector::LocaleSelector`
//!
//! Components receive external data as props rather than reaching into
//! `App`, so each one can be rendered against a `TestBackend` on its own.

pub mod heading_view;
pub mod locale_picker;

pub use heading_view::HeadingView;
pub use locale_picker::LocalePicker;
