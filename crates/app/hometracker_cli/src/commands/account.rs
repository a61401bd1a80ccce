//! Signed-in account commands.

use hometracker_client::ApiClient;
use hometracker_client::models::ProfileUpdate;

use super::resolve_secret;
use crate::{Error, Result};

// Profile defaults applied when neither the account nor a flag sets them.
const DEFAULT_LOCALE: &str = "fr";
const DEFAULT_TIMEZONE: &str = "Europe/Brussels";

pub async fn profile(
    client: &ApiClient,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    locale: Option<String>,
    timezone: Option<String>,
) -> Result<()> {
    // The endpoint replaces the whole profile, so start from the current
    // user and overlay the flags.
    let Some(user) = client.session().user() else {
        return Err(Error::NotSignedIn);
    };
    let update = ProfileUpdate {
        first_name: first_name.unwrap_or(user.first_name),
        last_name: last_name.unwrap_or(user.last_name),
        phone: phone.or(user.phone),
        locale: locale
            .or(user.locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.into()),
        timezone: timezone
            .or(user.timezone)
            .unwrap_or_else(|| DEFAULT_TIMEZONE.into()),
    };

    let user = client.update_profile(&update).await?;
    println!("Profile updated for {} <{}>.", user.full_name(), user.email);
    Ok(())
}

pub async fn change_password(
    client: &ApiClient,
    current: Option<String>,
    new: Option<String>,
) -> Result<()> {
    if !client.session().is_authenticated() {
        return Err(Error::NotSignedIn);
    }
    let current = resolve_secret(current, "Current password: ")?;
    let new = resolve_secret(new, "New password: ")?;
    client.change_password(&current, &new).await?;
    println!("Password changed.");
    Ok(())
}
