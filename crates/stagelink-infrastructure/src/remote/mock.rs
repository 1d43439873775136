//! Fixed-delay remote service that always succeeds.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use stagelink_core::booking::{BookingConfirmation, BookingRequest};
use stagelink_core::error::Result;
use stagelink_core::remote::RemoteService;
use stagelink_core::session::{CredentialRequest, Role, UserSession};

use super::ids::{UserIdGenerator, new_booking_id};
use crate::config::RemoteConfig;

/// Id the mock backend assigns to every login.
pub const MOCK_LOGIN_USER_ID: u64 = 1;

pub const BOOKING_SENT_MESSAGE: &str = "Booking request sent successfully!";

/// Stand-in backend.
///
/// Each call completes after its artificial delay. The password is never
/// checked; login derives the role from the email, signup trusts the caller.
#[derive(Debug, Clone)]
pub struct MockRemoteService {
    auth_delay: Duration,
    booking_delay: Duration,
    user_ids: Arc<UserIdGenerator>,
}

impl MockRemoteService {
    pub fn new(auth_delay: Duration, booking_delay: Duration) -> Self {
        Self {
            auth_delay,
            booking_delay,
            user_ids: Arc::new(UserIdGenerator::new()),
        }
    }

    /// Mock without latency.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(config.auth_delay(), config.booking_delay())
    }

    async fn simulate_latency(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockRemoteService {
    fn default() -> Self {
        Self::from_config(&RemoteConfig::default())
    }
}

#[async_trait]
impl RemoteService for MockRemoteService {
    async fn exchange_credentials(&self, request: CredentialRequest) -> Result<UserSession> {
        tracing::debug!("[MockRemote] Exchanging credentials for {}", request.email());
        Self::simulate_latency(self.auth_delay).await;

        let user = match request {
            CredentialRequest::Login { email, .. } => UserSession {
                id: MOCK_LOGIN_USER_ID,
                role: Role::from_email(&email),
                email,
                name: None,
            },
            CredentialRequest::Signup(profile) => UserSession {
                id: self.user_ids.next_id(),
                email: profile.email,
                role: profile.role,
                name: Some(profile.name),
            },
        };
        Ok(user)
    }

    async fn submit_booking(&self, request: BookingRequest) -> Result<BookingConfirmation> {
        tracing::debug!(
            "[MockRemote] Creating booking for creative {} ({})",
            request.creative_id,
            request.service
        );
        Self::simulate_latency(self.booking_delay).await;

        Ok(BookingConfirmation {
            booking_id: new_booking_id(),
            message: BOOKING_SENT_MESSAGE.to_string(),
        })
    }
}
