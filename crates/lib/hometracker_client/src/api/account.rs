//! Signed-in account endpoints.

use reqwest::StatusCode;

use hometracker_core::models::User;

use crate::client::{ApiClient, Auth};
use crate::error::{ClientError, Result};
use crate::models::{Ack, ChangePasswordRequest, ProfileResponse, ProfileUpdate};

impl ApiClient {
    /// `PUT /api/v1/user/profile`: replace the profile fields.
    ///
    /// The session keeps its token pair but adopts the updated user
    /// record returned by the backend.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let resp: ProfileResponse = self
            .put_json(&self.url("/api/v1/user/profile"), update, Auth::Session)
            .await?;
        if !resp.success {
            return Err(ClientError::Api {
                status: StatusCode::OK,
                message: resp.message.unwrap_or_else(|| "profile update rejected".into()),
            });
        }
        let user = resp.user.ok_or_else(|| ClientError::Api {
            status: StatusCode::OK,
            message: "profile response is missing the user".into(),
        })?;
        self.session().replace_user(user.clone());
        Ok(user)
    }

    /// `POST /api/v1/user/change-password`.
    ///
    /// The session stays signed in; the backend rotates nothing here.
    pub async fn change_password(&self, current_password: &str, new_password: &str) -> Result<Ack> {
        let body = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let ack: Ack = self
            .post_json(&self.url("/api/v1/user/change-password"), &body, Auth::Session)
            .await?;
        ack.into_result()
    }
}
