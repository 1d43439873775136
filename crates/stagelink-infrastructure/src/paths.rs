//! Unified path management for StageLink files.
//!
//! ```text
//! ~/.config/stagelink/         # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/stagelink/    # Data directory
//! └── storage.toml             # Persisted key-value entries
//! ```
//!
//! When a base directory override is given (`--home`, `STAGELINK_HOME`),
//! both files live directly under it.

use std::path::PathBuf;

use stagelink_core::error::{Result, StagelinkError};

const APP_DIR: &str = "stagelink";

/// Environment variable that overrides the base directory.
pub const HOME_ENV: &str = "STAGELINK_HOME";

#[derive(Debug, Clone, Default)]
pub struct StagelinkPaths {
    base_dir: Option<PathBuf>,
}

impl StagelinkPaths {
    /// Creates a path resolver, optionally rooted at `base_dir`.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Resolver rooted at `STAGELINK_HOME` if it is set.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(HOME_ENV).map(PathBuf::from))
    }

    /// Returns the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the platform config directory cannot be determined.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| StagelinkError::config("Cannot find config directory"))
    }

    /// Returns the data directory.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the platform data directory cannot be determined.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| StagelinkError::config("Cannot find data directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn storage_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("storage.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_override() {
        let paths = StagelinkPaths::new(Some(PathBuf::from("/tmp/stage")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/stage/config.toml")
        );
        assert_eq!(
            paths.storage_file().unwrap(),
            PathBuf::from("/tmp/stage/storage.toml")
        );
    }

    #[test]
    fn test_platform_dirs_end_with_app_name() {
        let paths = StagelinkPaths::new(None);
        if let Ok(config_dir) = paths.config_dir() {
            assert!(config_dir.ends_with(APP_DIR));
            assert!(paths.config_file().unwrap().starts_with(&config_dir));
        }
    }
}
