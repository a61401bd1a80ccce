//! Authentication endpoints.
//!
//! `login` is the only call here that establishes a session; the rest are
//! the email-driven flows (signup, password reset, email verification)
//! which stay unauthenticated end to end.

use tracing::info;

use hometracker_core::models::User;

use crate::client::{ApiClient, Auth};
use crate::error::Result;
use crate::models::{
    Ack, AuthResponse, ForgotPasswordRequest, LoginRequest, ResendVerificationRequest,
    ResetPasswordRequest, SignupRequest, VerifyEmailRequest,
};

impl ApiClient {
    /// `POST /auth/login`: authenticate and establish the session.
    ///
    /// On success the session manager takes over the returned token pair;
    /// the caller gets the signed-in user back.
    pub async fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<User> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            remember_me,
        };
        let resp: AuthResponse = self
            .post_json(&self.url("/auth/login"), &body, Auth::None)
            .await?;
        let (user, access_token, refresh_token) = resp.into_session_triple()?;
        self.session()
            .set_auth(user.clone(), access_token, refresh_token);
        info!(email, "signed in");
        Ok(user)
    }

    /// `POST /auth/signup`: create an account. A verification email
    /// follows; the account is not signed in yet.
    pub async fn signup(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Ack> {
        let body = SignupRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let ack: Ack = self
            .post_json(&self.url("/auth/signup"), &body, Auth::None)
            .await?;
        ack.into_result()
    }

    /// `POST /api/v1/auth/forgot-password`: request a reset email.
    pub async fn forgot_password(&self, email: &str) -> Result<Ack> {
        let body = ForgotPasswordRequest {
            email: email.to_string(),
        };
        let ack: Ack = self
            .post_json(&self.url("/api/v1/auth/forgot-password"), &body, Auth::None)
            .await?;
        ack.into_result()
    }

    /// `POST /api/v1/auth/reset-password`: set a new password using the
    /// token from the reset email.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<Ack> {
        let body = ResetPasswordRequest {
            token: token.to_string(),
            password: password.to_string(),
        };
        let ack: Ack = self
            .post_json(&self.url("/api/v1/auth/reset-password"), &body, Auth::None)
            .await?;
        ack.into_result()
    }

    /// `POST /api/v1/auth/verify-email`: confirm an address with the token
    /// from the verification email.
    pub async fn verify_email(&self, token: &str) -> Result<Ack> {
        let body = VerifyEmailRequest {
            token: token.to_string(),
        };
        let ack: Ack = self
            .post_json(&self.url("/api/v1/auth/verify-email"), &body, Auth::None)
            .await?;
        ack.into_result()
    }

    /// `POST /api/v1/auth/resend-verification`: send the verification
    /// email again.
    pub async fn resend_verification(&self, email: &str) -> Result<Ack> {
        let body = ResendVerificationRequest {
            email: email.to_string(),
        };
        let ack: Ack = self
            .post_json(
                &self.url("/api/v1/auth/resend-verification"),
                &body,
                Auth::None,
            )
            .await?;
        ack.into_result()
    }
}
