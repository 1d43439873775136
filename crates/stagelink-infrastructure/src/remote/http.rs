//! JSON-over-HTTP remote service.
//!
//! Endpoints (relative to `base_url`):
//!
//! | operation | request |
//! |---|---|
//! | login | `POST /auth/login` `{email, password}` |
//! | signup | `POST /auth/signup` `{name, email, password, role}` |
//! | booking | `POST /bookings` `{creativeId, service, date, budget, message, location}` |
//!
//! Responses carry a `success` flag; `success: false`, a non-2xx status, or a
//! transport error all surface as `RequestFailed`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use stagelink_core::booking::{BookingConfirmation, BookingRequest};
use stagelink_core::error::{Result, StagelinkError};
use stagelink_core::remote::RemoteService;
use stagelink_core::session::{CredentialRequest, UserSession};

use crate::config::RemoteConfig;

#[derive(Debug, Deserialize)]
struct AuthResponse {
    success: bool,
    user: Option<UserSession>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingResponse {
    success: bool,
    booking_id: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpRemoteService {
    client: Client,
    base_url: String,
}

impl HttpRemoteService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| StagelinkError::config("remote.base_url is not set"))?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| StagelinkError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::new(client, base_url))
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("[HttpRemote] POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| StagelinkError::request_failed(format!("POST {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StagelinkError::request_failed(format!(
                "POST {} returned {}",
                url, status
            )));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| StagelinkError::request_failed(format!("Invalid response from {}: {}", url, e)))
    }
}

fn rejected(message: Option<String>) -> StagelinkError {
    StagelinkError::request_failed(message.unwrap_or_else(|| "request rejected".to_string()))
}

#[async_trait]
impl RemoteService for HttpRemoteService {
    async fn exchange_credentials(&self, request: CredentialRequest) -> Result<UserSession> {
        let response: AuthResponse = match &request {
            CredentialRequest::Login { email, password } => {
                let body = serde_json::json!({ "email": email, "password": password });
                self.post("auth/login", &body).await?
            }
            CredentialRequest::Signup(profile) => self.post("auth/signup", profile).await?,
        };

        match response {
            AuthResponse {
                success: true,
                user: Some(user),
                ..
            } => Ok(user),
            AuthResponse { message, .. } => Err(rejected(message)),
        }
    }

    async fn submit_booking(&self, request: BookingRequest) -> Result<BookingConfirmation> {
        let response: BookingResponse = self.post("bookings", &request).await?;

        match response {
            BookingResponse {
                success: true,
                booking_id: Some(booking_id),
                message,
            } => Ok(BookingConfirmation {
                booking_id,
                message: message.unwrap_or_default(),
            }),
            BookingResponse { message, .. } => Err(rejected(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stagelink_core::booking::BookingForm;
    use stagelink_core::catalog::CreativeId;
    use stagelink_core::session::Role;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> HttpRemoteService {
        HttpRemoteService::new(Client::new(), format!("{}/", server.uri()))
    }

    #[tokio::test]
    async fn test_login_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_partial_json(json!({ "email": "creative.dj@example.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "user": { "id": 7, "email": "creative.dj@example.com", "role": "creative" }
            })))
            .mount(&server)
            .await;

        let user = service(&server)
            .exchange_credentials(CredentialRequest::Login {
                email: "creative.dj@example.com".into(),
                password: "x".into(),
            })
            .await
            .unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Creative);
    }

    #[tokio::test]
    async fn test_rejected_login_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "bad credentials"
            })))
            .mount(&server)
            .await;

        let err = service(&server)
            .exchange_credentials(CredentialRequest::Login {
                email: "a@b.c".into(),
                password: "x".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, StagelinkError::request_failed("bad credentials"));
    }

    #[tokio::test]
    async fn test_booking_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bookings"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let request = BookingRequest::new(CreativeId::from(1u32), BookingForm::default());
        let err = service(&server).submit_booking(request).await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_booking_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bookings"))
            .and(body_partial_json(json!({ "creativeId": "2" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "bookingId": "BK-42",
                "message": "ok"
            })))
            .mount(&server)
            .await;

        let request = BookingRequest::new(CreativeId::from(2u32), BookingForm::default());
        let confirmation = service(&server).submit_booking(request).await.unwrap();
        assert_eq!(confirmation.booking_id, "BK-42");
    }
}
