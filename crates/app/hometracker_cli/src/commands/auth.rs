//! Session commands: sign in and out, whoami, refresh, and the
//! email-driven flows.

use hometracker_client::{ApiClient, RefreshOutcome};

use super::resolve_secret;
use crate::{Error, Result};

pub async fn login(
    client: &ApiClient,
    email: &str,
    password: Option<String>,
    remember: bool,
) -> Result<()> {
    let password = resolve_secret(password, "Password: ")?;
    let user = client.login(email, &password, remember).await?;
    println!("Signed in as {} <{}>", user.full_name(), user.email);
    if !user.email_verified {
        log::warn!("email address not verified yet");
    }
    Ok(())
}

pub async fn signup(
    client: &ApiClient,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = resolve_secret(password, "Password: ")?;
    let ack = client.signup(first_name, last_name, email, &password).await?;
    println!(
        "{}",
        ack.message
            .unwrap_or_else(|| "Account created, check your inbox to verify it.".into())
    );
    Ok(())
}

pub fn logout(client: &ApiClient) -> Result<()> {
    client.session().logout();
    println!("Signed out.");
    Ok(())
}

pub fn whoami(client: &ApiClient) -> Result<()> {
    let Some(user) = client.session().user() else {
        return Err(Error::NotSignedIn);
    };
    println!("{} <{}>", user.full_name(), user.email);
    println!("role: {}", user.role);
    if let Some(tenant) = &user.tenant {
        println!("organization: {} ({})", tenant.name, tenant.plan);
    } else {
        println!("organization: {}", user.tenant_id);
    }
    Ok(())
}

pub async fn refresh(client: &ApiClient) -> Result<()> {
    match client.session().refresh_session().await {
        RefreshOutcome::Refreshed => {
            println!("Session refreshed.");
            Ok(())
        }
        RefreshOutcome::LoggedOut => Err(Error::SessionExpired),
    }
}

pub async fn forgot_password(client: &ApiClient, email: &str) -> Result<()> {
    let ack = client.forgot_password(email).await?;
    println!(
        "{}",
        ack.message
            .unwrap_or_else(|| "If the address exists, a reset email is on its way.".into())
    );
    Ok(())
}

pub async fn reset_password(
    client: &ApiClient,
    token: &str,
    password: Option<String>,
) -> Result<()> {
    let password = resolve_secret(password, "New password: ")?;
    client.reset_password(token, &password).await?;
    println!("Password reset, you can sign in with it now.");
    Ok(())
}

pub async fn verify_email(client: &ApiClient, token: &str) -> Result<()> {
    client.verify_email(token).await?;
    println!("Email address verified.");
    Ok(())
}

pub async fn resend_verification(client: &ApiClient, email: &str) -> Result<()> {
    let ack = client.resend_verification(email).await?;
    println!(
        "{}",
        ack.message
            .unwrap_or_else(|| "Verification email sent again.".into())
    );
    Ok(())
}
