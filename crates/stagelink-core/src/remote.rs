//! Remote-call capability.
//!
//! Credential exchange and booking submission go through this trait so the
//! fixed-delay mock and a real network backend are interchangeable without
//! changing the callers.

use async_trait::async_trait;

use crate::booking::{BookingConfirmation, BookingRequest};
use crate::error::Result;
use crate::session::{CredentialRequest, UserSession};

#[async_trait]
pub trait RemoteService: Send + Sync {
    /// Exchanges credentials (login or signup) for a user record.
    ///
    /// # Errors
    ///
    /// Returns `RequestFailed` when the backend cannot be reached or rejects the call.
    async fn exchange_credentials(&self, request: CredentialRequest) -> Result<UserSession>;

    /// Submits a booking request.
    ///
    /// # Errors
    ///
    /// Returns `RequestFailed` when the backend cannot be reached or rejects the call.
    async fn submit_booking(&self, request: BookingRequest) -> Result<BookingConfirmation>;
}
