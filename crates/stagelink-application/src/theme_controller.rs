//! Theme controller.
//!
//! Reads and writes the theme preference and publishes every change to
//! observers through a `watch` channel.

use std::str::FromStr;
use std::sync::Arc;

use stagelink_core::error::Result;
use stagelink_core::store::{KeyValueStore, keys};
use stagelink_core::theme::{ThemePreference, ThemeSource};
use tokio::sync::{Mutex, watch};

pub struct ThemeController {
    store: Arc<dyn KeyValueStore>,
    system_hint: Option<ThemePreference>,
    sender: watch::Sender<ThemePreference>,
    /// Serializes read-then-write sequences such as toggle.
    write_lock: Mutex<()>,
}

impl ThemeController {
    /// Creates the controller and resolves the startup theme.
    ///
    /// `system_hint` is the OS color-scheme preference, if the host knows it.
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        system_hint: Option<ThemePreference>,
    ) -> Result<Self> {
        let (sender, _) = watch::channel(ThemePreference::resolve(None, system_hint));
        let controller = Self {
            store,
            system_hint,
            sender,
            write_lock: Mutex::new(()),
        };

        let theme = controller.get_theme().await?;
        controller.sender.send_replace(theme);
        Ok(controller)
    }

    /// Returns the current theme.
    ///
    /// On first run (nothing stored) the resolved default is written back,
    /// marked as system-chosen.
    pub async fn get_theme(&self) -> Result<ThemePreference> {
        if let Some(theme) = self.stored_theme().await? {
            return Ok(theme);
        }

        let _guard = self.write_lock.lock().await;
        if let Some(theme) = self.stored_theme().await? {
            return Ok(theme);
        }
        let resolved = ThemePreference::resolve(None, self.system_hint);
        self.write(resolved, ThemeSource::System).await?;
        tracing::debug!("[Theme] Resolved first-run theme: {}", resolved);
        Ok(resolved)
    }

    /// Persists `theme` as the user's explicit choice and notifies observers.
    pub async fn set_theme(&self, theme: ThemePreference) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write(theme, ThemeSource::User).await?;
        self.sender.send_replace(theme);
        tracing::info!("[Theme] Theme set to {}", theme);
        Ok(())
    }

    /// Flips the current theme and returns the new value.
    pub async fn toggle_theme(&self) -> Result<ThemePreference> {
        let _guard = self.write_lock.lock().await;
        let fallback = self.current();
        let current = self.stored_theme().await?.unwrap_or(fallback);
        let next = current.toggled();
        self.write(next, ThemeSource::User).await?;
        self.sender.send_replace(next);
        tracing::info!("[Theme] Theme toggled {} -> {}", current, next);
        Ok(next)
    }

    /// Follows an OS color-scheme change.
    ///
    /// Only a system-chosen theme follows the hint. A stored theme without a
    /// recorded source counts as the user's choice. Returns whether the hint
    /// was applied.
    pub async fn apply_system_hint(&self, hint: ThemePreference) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let follows_system = match self.source().await? {
            Some(source) => source == ThemeSource::System,
            None => self.stored_theme().await?.is_none(),
        };
        if !follows_system {
            tracing::debug!("[Theme] Ignoring system hint {}: user choice stored", hint);
            return Ok(false);
        }
        self.write(hint, ThemeSource::System).await?;
        self.sender.send_replace(hint);
        tracing::info!("[Theme] Following system theme {}", hint);
        Ok(true)
    }

    /// Subscribes to theme changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<ThemePreference> {
        self.sender.subscribe()
    }

    /// Last published theme, without touching the store.
    pub fn current(&self) -> ThemePreference {
        *self.sender.borrow()
    }

    async fn stored_theme(&self) -> Result<Option<ThemePreference>> {
        let Some(raw) = self.store.get(keys::THEME).await? else {
            return Ok(None);
        };
        match ThemePreference::from_str(&raw) {
            Ok(theme) => Ok(Some(theme)),
            Err(_) => {
                tracing::warn!("[Theme] Ignoring unknown stored theme {:?}", raw);
                Ok(None)
            }
        }
    }

    async fn source(&self) -> Result<Option<ThemeSource>> {
        Ok(self
            .store
            .get(keys::THEME_SOURCE)
            .await?
            .and_then(|raw| ThemeSource::from_str(&raw).ok()))
    }

    async fn write(&self, theme: ThemePreference, source: ThemeSource) -> Result<()> {
        self.store.set(keys::THEME, theme.to_string()).await?;
        self.store.set(keys::THEME_SOURCE, source.to_string()).await
    }
}
