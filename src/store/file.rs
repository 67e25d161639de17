//! `~/config/.voltagerc` on the local disk, seeded from a remote default.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::fs;

use super::backend::{ConfigStore, StoreError};
use super::rc::{self, RcConfig};

pub const RC_DIR_NAME: &str = "config";
pub const RC_FILE_NAME: &str = ".voltagerc";

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Returns `<home>/config/.voltagerc`.
pub fn default_rc_path() -> Result<PathBuf, StoreError> {
    rc_path_under(dirs::home_dir())
}

fn rc_path_under(home: Option<PathBuf>) -> Result<PathBuf, StoreError> {
    home.map(|home| home.join(RC_DIR_NAME).join(RC_FILE_NAME))
        .ok_or(StoreError::PathResolution)
}

pub struct FileConfigStore {
    /// Explicit location; `None` resolves under the home directory on each call.
    rc_path: Option<PathBuf>,
    default_url: String,
    client: reqwest::Client,
}

impl FileConfigStore {
    pub fn new(rc_path: Option<PathBuf>, default_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout ({e}), using defaults");
                reqwest::Client::new()
            });
        Self {
            rc_path,
            default_url: default_url.into(),
            client,
        }
    }

    async fn download_default(&self) -> Result<String, reqwest::Error> {
        self.client
            .get(&self.default_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    fn path(&self) -> Result<PathBuf, StoreError> {
        match &self.rc_path {
            Some(path) => Ok(path.clone()),
            None => default_rc_path(),
        }
    }

    async fn exists(&self) -> Result<bool, StoreError> {
        let path = self.path()?;
        match fs::metadata(&path).await {
            Ok(meta) => Ok(!meta.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn fetch_default(&self) -> Result<RcConfig, StoreError> {
        let path = self.path()?;
        info!("Fetching default rc file from {}", self.default_url);
        let content = self
            .download_default()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        // Validate before writing so a bad download never lands on disk
        let config = rc::parse_config(&content)?;
        ensure_parent_dir(&path).await?;
        atomic_write(&path, content.as_bytes()).await?;
        info!("Created rc file at {}", path.display());
        Ok(config)
    }

    async fn load(&self) -> Result<RcConfig, StoreError> {
        let path = self.path()?;
        let content = fs::read_to_string(&path).await.map_err(StoreError::Io)?;
        let config = rc::parse_config(&content)?;
        info!("Loaded rc file from {}", path.display());
        debug!("Rc: {:?}", config);
        Ok(config)
    }

    async fn persist(&self, config: &RcConfig) -> Result<(), StoreError> {
        let path = self.path()?;
        ensure_parent_dir(&path).await?;
        atomic_write(&path, rc::serialize(config).as_bytes()).await?;
        info!("Saved rc file to {}", path.display());
        Ok(())
    }
}

async fn ensure_parent_dir(path: &Path) -> Result<(), StoreError> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o700);
    builder.create(parent).await.map_err(StoreError::Io)
}

/// Writes `<file>.tmp` and renames it over `path`.
async fn atomic_write(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let tmp_path = tmp_path(path);
    fs::write(&tmp_path, contents).await.map_err(StoreError::Io)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
            .await
            .map_err(StoreError::Io)?;
    }
    fs::rename(&tmp_path, path).await.map_err(StoreError::Io)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(RC_FILE_NAME));
    name.push(".tmp");
    path.with_file_name(name)
}
