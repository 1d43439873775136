//! Application configuration.
//!
//! Loaded from `config.toml` (see [`crate::paths`]). A missing file yields
//! the defaults, which are written back so the user has a file to edit.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use stagelink_core::error::{Result, StagelinkError};
use stagelink_core::theme::ThemePreference;

use crate::paths::StagelinkPaths;
use crate::storage::AtomicTomlFile;

/// Which remote backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RemoteMode {
    /// Fixed-delay backend that always succeeds.
    #[default]
    Mock,
    /// Real HTTP backend at `base_url`.
    Http,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub mode: RemoteMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub auth_delay_ms: u64,
    pub booking_delay_ms: u64,
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            mode: RemoteMode::Mock,
            base_url: None,
            auth_delay_ms: 1000,
            booking_delay_ms: 1500,
            timeout_secs: 30,
        }
    }
}

impl RemoteConfig {
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn booking_delay(&self) -> Duration {
        Duration::from_millis(self.booking_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// OS color-scheme hint for hosts that cannot query one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_hint: Option<ThemePreference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub remote: RemoteConfig,
    pub theme: ThemeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            remote: RemoteConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Checks settings that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.remote.mode == RemoteMode::Http && self.remote.base_url.is_none() {
            return Err(StagelinkError::config(
                "remote.base_url is required when remote.mode = \"http\"",
            ));
        }
        Ok(())
    }
}

/// Loads and persists [`AppConfig`].
pub struct ConfigService {
    file: AtomicTomlFile<AppConfig>,
}

impl ConfigService {
    pub fn new(paths: &StagelinkPaths) -> Result<Self> {
        Ok(Self {
            file: AtomicTomlFile::new(paths.config_file()?),
        })
    }

    /// Loads the configuration, writing the defaults on first run.
    pub fn load(&self) -> Result<AppConfig> {
        let config = match self.file.load()? {
            Some(config) => config,
            None => {
                let config = AppConfig::default();
                self.file.save(&config)?;
                tracing::info!("[Config] Wrote default config to {:?}", self.file.path());
                config
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        config.validate()?;
        self.file.save(config)
    }
}
