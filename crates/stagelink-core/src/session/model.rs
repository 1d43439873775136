//! UserSession domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::route::View;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Creative,
    Booker,
}

impl Role {
    /// Heuristic used by the mock backend at login time: an email containing
    /// `creative` belongs to a creative, anything else to a booker.
    pub fn from_email(email: &str) -> Self {
        if email.contains("creative") {
            Self::Creative
        } else {
            Self::Booker
        }
    }

    /// View a freshly authenticated user lands on.
    pub fn landing_view(self) -> View {
        match self {
            Self::Creative => View::CreativeDashboard,
            Self::Booker => View::BookerDashboard,
        }
    }
}

/// The locally persisted record of an authenticated user.
///
/// Its presence in the store is the authentication signal. There is no token
/// and no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: u64,
    pub email: String,
    pub role: Role,
    /// Display name, only known after signup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Profile supplied to signup. The role is trusted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupProfile {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Payload of a credential exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CredentialRequest {
    Login { email: String, password: String },
    Signup(SignupProfile),
}

impl CredentialRequest {
    pub fn email(&self) -> &str {
        match self {
            Self::Login { email, .. } => email,
            Self::Signup(profile) => &profile.email,
        }
    }
}

/// Result of a successful login or signup.
///
/// `landing` carries the role so the caller can route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub user: UserSession,
    pub landing: View,
}

impl AuthOutcome {
    pub fn new(user: UserSession) -> Self {
        let landing = user.role.landing_view();
        Self { user, landing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_email() {
        assert_eq!(Role::from_email("creative.dj@example.com"), Role::Creative);
        assert_eq!(Role::from_email("booker@example.com"), Role::Booker);
        assert_eq!(Role::from_email("Creative@example.com"), Role::Booker);
    }

    #[test]
    fn test_landing_view_follows_role() {
        assert_eq!(Role::Creative.landing_view(), View::CreativeDashboard);
        assert_eq!(Role::Booker.landing_view(), View::BookerDashboard);
    }

    #[test]
    fn test_session_json_shape() {
        let session = UserSession {
            id: 1,
            email: "booker@example.com".to_string(),
            role: Role::Booker,
            name: None,
        };
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"id":1,"email":"booker@example.com","role":"booker"}"#);

        let back: UserSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
