use std::fmt;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use super::rc::RcConfig;

/// Failures from rc file access. The controller treats every one as fatal.
#[derive(Debug)]
pub enum StoreError {
    /// The home directory could not be determined.
    PathResolution,
    /// Reading, writing or creating the rc file or its directory failed.
    Io(io::Error),
    /// The default rc file could not be downloaded.
    Network(String),
    /// The rc content is not valid `KEY=VALUE` text or has a bad locale.
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::PathResolution => write!(f, "could not determine the home directory"),
            StoreError::Io(e) => write!(f, "rc file I/O error: {e}"),
            StoreError::Network(msg) => write!(f, "could not fetch default rc file: {msg}"),
            StoreError::Parse(msg) => write!(f, "rc file parse error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Where the rc file lives and how it is created, read and written.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Resolves the rc file location.
    fn path(&self) -> Result<PathBuf, StoreError>;

    /// Whether the rc file is present. A missing file is `Ok(false)`.
    async fn exists(&self) -> Result<bool, StoreError>;

    /// Downloads the default rc file, writes it to `path()` and returns it.
    async fn fetch_default(&self) -> Result<RcConfig, StoreError>;

    async fn load(&self) -> Result<RcConfig, StoreError>;

    /// Overwrites the whole rc file with `config`.
    async fn persist(&self, config: &RcConfig) -> Result<(), StoreError>;
}
