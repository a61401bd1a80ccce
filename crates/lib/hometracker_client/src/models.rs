//! Wire types for the HomeTracker backend.
//!
//! Field names are camelCase on the wire. The backend reports soft failures
//! inside 2xx bodies as `success: false` plus a message; response helpers
//! fold those into [`ClientError::Api`] so callers only see `Result`.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use hometracker_core::models::User;

use crate::error::{ClientError, Result};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendVerificationRequest {
    pub email: String,
}

/// Full profile replacement sent to `PUT /api/v1/user/profile`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// One of `fr`, `nl`, `en`, `de`.
    pub locale: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Login and refresh response: the session triple plus the soft-failure flag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    /// Access token, named `token` on the wire.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl AuthResponse {
    /// Split a 2xx response into its session triple.
    ///
    /// `success: false` and structurally incomplete responses both collapse
    /// into [`ClientError::Api`].
    pub(crate) fn into_session_triple(self) -> Result<(User, String, Option<String>)> {
        if !self.success {
            return Err(ClientError::Api {
                status: StatusCode::OK,
                message: self
                    .message
                    .unwrap_or_else(|| "authentication rejected".into()),
            });
        }
        match (self.user, self.token) {
            (Some(user), Some(token)) => Ok((user, token, self.refresh_token)),
            _ => Err(ClientError::Api {
                status: StatusCode::OK,
                message: "auth response is missing user or token".into(),
            }),
        }
    }
}

/// Plain acknowledgement returned by most account endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Ack {
    pub(crate) fn into_result(self) -> Result<Ack> {
        if self.success {
            Ok(self)
        } else {
            Err(ClientError::Api {
                status: StatusCode::OK,
                message: self.message.unwrap_or_else(|| "request rejected".into()),
            })
        }
    }
}

/// Response to a profile update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Error payload shape used by the backend: `{ "message": ... }`.
/// Other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
