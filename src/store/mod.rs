//! # Rc File Store
//!
//! Everything that touches the rc file: locating it, checking it exists,
//! seeding it from the remote default, loading it and writing it back.
//!
//! ```text
//! check ──► exists? ──yes──► load ─────────┐
//!              │                           ├──► RcConfig
//!              └──no───► fetch_default ────┘
//!
//! (after the user picks a locale) persist
//! ```
//!
//! The controller never calls these directly. It emits effects, and the TUI
//! runs them against an `Arc<dyn ConfigStore>` on the tokio runtime.

mod backend;
pub mod file;
pub mod rc;

pub use backend::{ConfigStore, StoreError};
pub use file::FileConfigStore;
pub use rc::RcConfig;
