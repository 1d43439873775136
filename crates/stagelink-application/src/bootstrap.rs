//! Composition root.
//!
//! A single ordered startup sequence builds every service once:
//!
//! 1. load configuration
//! 2. open the key-value store
//! 3. build the remote service
//! 4. build the creative catalog
//! 5. resolve the theme (first-run write-back)
//! 6. assemble [`App`]
//!
//! Any step can be overridden through the builder, which is how tests swap in
//! the in-memory store and a zero-delay remote.

use std::sync::Arc;

use stagelink_core::catalog::CreativeCatalog;
use stagelink_core::error::Result;
use stagelink_core::remote::RemoteService;
use stagelink_core::route::RouteGuard;
use stagelink_core::store::KeyValueStore;
use stagelink_core::theme::ThemePreference;
use stagelink_infrastructure::{
    AppConfig, ConfigService, FileKeyValueStore, StagelinkPaths, build_remote_service,
};

use crate::auth_service::AuthService;
use crate::booking_workflow::BookingWorkflow;
use crate::theme_controller::ThemeController;

/// The assembled application services.
pub struct App {
    pub config: AppConfig,
    pub store: Arc<dyn KeyValueStore>,
    pub catalog: CreativeCatalog,
    pub theme: ThemeController,
    pub auth: AuthService,
    pub booking: BookingWorkflow,
}

#[derive(Default)]
pub struct AppBootstrap {
    paths: StagelinkPaths,
    config: Option<AppConfig>,
    store: Option<Arc<dyn KeyValueStore>>,
    remote: Option<Arc<dyn RemoteService>>,
    catalog: Option<CreativeCatalog>,
    system_hint: Option<ThemePreference>,
    guard: Option<RouteGuard>,
}

impl AppBootstrap {
    pub fn builder() -> Self {
        Self::default()
    }

    pub fn paths(mut self, paths: StagelinkPaths) -> Self {
        self.paths = paths;
        self
    }

    /// Uses `config` instead of reading `config.toml`.
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn remote(mut self, remote: Arc<dyn RemoteService>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn catalog(mut self, catalog: CreativeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// OS color-scheme hint; takes precedence over the configured one.
    pub fn system_hint(mut self, hint: Option<ThemePreference>) -> Self {
        self.system_hint = hint;
        self
    }

    pub fn guard(mut self, guard: RouteGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Runs the startup sequence.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, the store cannot be opened, or
    /// the remote backend cannot be built.
    pub async fn build(self) -> Result<App> {
        let config = match self.config {
            Some(config) => config,
            None => ConfigService::new(&self.paths)?.load()?,
        };
        tracing::debug!("[Bootstrap] 1/6 config loaded (remote mode {:?})", config.remote.mode);

        let store: Arc<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Arc::new(FileKeyValueStore::open(self.paths.storage_file()?).await?),
        };
        tracing::debug!("[Bootstrap] 2/6 store opened");

        let remote = match self.remote {
            Some(remote) => remote,
            None => build_remote_service(&config.remote)?,
        };
        tracing::debug!("[Bootstrap] 3/6 remote service ready");

        let catalog = self.catalog.unwrap_or_else(CreativeCatalog::builtin);
        tracing::debug!("[Bootstrap] 4/6 catalog built with {} creatives", catalog.len());

        let hint = self.system_hint.or(config.theme.system_hint);
        let theme = ThemeController::load(store.clone(), hint).await?;
        tracing::debug!("[Bootstrap] 5/6 theme resolved to {}", theme.current());

        let auth = AuthService::with_guard(
            store.clone(),
            remote.clone(),
            self.guard.unwrap_or_default(),
        );
        let booking = BookingWorkflow::new(store.clone(), remote, catalog.clone());
        tracing::info!("[Bootstrap] 6/6 application ready");

        Ok(App {
            config,
            store,
            catalog,
            theme,
            auth,
            booking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagelink_core::route::{RouteDecision, View};
    use stagelink_core::store::keys;
    use stagelink_infrastructure::MockRemoteService;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_build_from_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StagelinkPaths::new(Some(temp_dir.path().to_path_buf()));

        let app = AppBootstrap::builder()
            .paths(paths.clone())
            .remote(Arc::new(MockRemoteService::instant()))
            .system_hint(Some(ThemePreference::Light))
            .build()
            .await
            .unwrap();

        assert_eq!(app.theme.current(), ThemePreference::Light);
        assert_eq!(app.catalog.len(), 2);
        assert!(paths.config_file().unwrap().exists());
        assert!(paths.storage_file().unwrap().exists());
        assert_eq!(
            app.store.get(keys::THEME).await.unwrap().as_deref(),
            Some("light")
        );
    }

    #[tokio::test]
    async fn test_stored_theme_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StagelinkPaths::new(Some(temp_dir.path().to_path_buf()));
        let build = || {
            AppBootstrap::builder()
                .paths(paths.clone())
                .remote(Arc::new(MockRemoteService::instant()))
                .system_hint(Some(ThemePreference::Dark))
                .build()
        };

        let app = build().await.unwrap();
        app.theme.set_theme(ThemePreference::Light).await.unwrap();
        drop(app);

        let app = build().await.unwrap();
        assert_eq!(app.theme.get_theme().await.unwrap(), ThemePreference::Light);
    }

    #[tokio::test]
    async fn test_custom_guard_reaches_auth() {
        let temp_dir = TempDir::new().unwrap();
        let app = AppBootstrap::builder()
            .paths(StagelinkPaths::new(Some(temp_dir.path().to_path_buf())))
            .remote(Arc::new(MockRemoteService::instant()))
            .guard(RouteGuard::new([View::Booking]))
            .build()
            .await
            .unwrap();

        assert_eq!(
            app.auth.enter(View::Booking).await.unwrap(),
            RouteDecision::Redirect(View::Login)
        );
        assert_eq!(
            app.auth.enter(View::BookerDashboard).await.unwrap(),
            RouteDecision::Allow
        );
    }
}
