use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR_NAME: &str = "appdrop";
const SETTINGS_FILE_NAME: &str = "settings.json";
const LOG_FILE_NAME: &str = "debug.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppPathsError {
    #[error("Could not determine home directory")]
    HomeDirUnavailable,
    #[error("Could not determine config directory")]
    ConfigDirUnavailable,
    #[error("Could not determine data directory")]
    DataDirUnavailable,
}

/// Where settings (`config_dir`) and logs (`data_dir`) live. The two may be
/// the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the per-user directories for the current platform.
    ///
    /// # Errors
    /// Returns an error when the home, config or data base directory cannot
    /// be determined.
    pub fn new() -> Result<Self, AppPathsError> {
        let (config_base, data_base) = base_dirs()?;
        Ok(Self {
            config_dir: config_base.join(APP_DIR_NAME),
            data_dir: data_base.join(APP_DIR_NAME),
        })
    }

    /// Paths rooted under an arbitrary directory.
    #[must_use]
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    /// Create both directories if they are missing.
    ///
    /// # Errors
    /// Returns the first I/O error hit while creating them.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        for dir in [&self.config_dir, &self.data_dir] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn base_dirs() -> Result<(PathBuf, PathBuf), AppPathsError> {
    let support = dirs::home_dir()
        .ok_or(AppPathsError::HomeDirUnavailable)?
        .join("Library/Application Support");
    Ok((support.clone(), support))
}

#[cfg(not(target_os = "macos"))]
fn base_dirs() -> Result<(PathBuf, PathBuf), AppPathsError> {
    let config = dirs::config_dir().ok_or(AppPathsError::ConfigDirUnavailable)?;
    let data = dirs::data_dir().ok_or(AppPathsError::DataDirUnavailable)?;
    Ok((config, data))
}
