//! Authentication use cases.
//!
//! The persisted session record is the only authentication signal: login and
//! signup write it, logout deletes it.

use std::sync::Arc;

use stagelink_core::error::Result;
use stagelink_core::remote::RemoteService;
use stagelink_core::route::{RouteDecision, RouteGuard, View};
use stagelink_core::session::{AuthOutcome, CredentialRequest, SignupProfile, UserSession};
use stagelink_core::store::{KeyValueStore, keys, load_json, store_json};

pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    remote: Arc<dyn RemoteService>,
    guard: RouteGuard,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>, remote: Arc<dyn RemoteService>) -> Self {
        Self::with_guard(store, remote, RouteGuard::default())
    }

    pub fn with_guard(
        store: Arc<dyn KeyValueStore>,
        remote: Arc<dyn RemoteService>,
        guard: RouteGuard,
    ) -> Self {
        Self {
            store,
            remote,
            guard,
        }
    }

    /// Logs in and persists the session.
    ///
    /// # Errors
    ///
    /// Returns `RequestFailed` if the credential exchange fails; nothing is
    /// stored in that case.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        tracing::info!("[Auth] Logging in {}", email);
        let request = CredentialRequest::Login {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.authenticate(request).await
    }

    /// Creates an account and persists the session.
    pub async fn signup(&self, profile: SignupProfile) -> Result<AuthOutcome> {
        tracing::info!("[Auth] Signing up {} as {}", profile.email, profile.role);
        self.authenticate(CredentialRequest::Signup(profile)).await
    }

    /// Deletes the session. Idempotent. Returns the view to land on.
    pub async fn logout(&self) -> Result<View> {
        self.store.remove(keys::USER).await?;
        self.store.remove(keys::TOKEN).await?;
        tracing::info!("[Auth] Logged out");
        Ok(View::Home)
    }

    pub async fn is_authenticated(&self) -> Result<bool> {
        self.store.contains(keys::USER).await
    }

    pub async fn current_user(&self) -> Result<Option<UserSession>> {
        load_json(self.store.as_ref(), keys::USER).await
    }

    /// Applies the route guard for entering `view`.
    pub async fn enter(&self, view: View) -> Result<RouteDecision> {
        let decision = self.guard.check(view, self.is_authenticated().await?);
        if let RouteDecision::Redirect(target) = decision {
            tracing::debug!("[Auth] {} requires a session, redirecting to {}", view, target);
        }
        Ok(decision)
    }

    async fn authenticate(&self, request: CredentialRequest) -> Result<AuthOutcome> {
        let user = self.remote.exchange_credentials(request).await?;
        store_json(self.store.as_ref(), keys::USER, &user).await?;
        tracing::info!("[Auth] Authenticated user {} ({})", user.id, user.role);
        Ok(AuthOutcome::new(user))
    }
}
