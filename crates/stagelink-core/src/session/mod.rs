//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: the authenticated user record, roles, and credential payloads

mod model;

pub use model::{AuthOutcome, CredentialRequest, Role, SignupProfile, UserSession};
