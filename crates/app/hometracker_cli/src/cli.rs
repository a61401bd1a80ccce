//! Command-line interface definition.

use clap::{Parser, Subcommand};

/// HomeTracker terminal client.
#[derive(Parser, Debug)]
#[command(name = "hometracker_cli", version, about = "HomeTracker construction platform client")]
pub struct Cli {
    /// Override the backend API base URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session locally.
    Login {
        #[arg(long)]
        email: String,
        /// Password (prompted when omitted).
        #[arg(long)]
        password: Option<String>,
        /// Ask the backend for a long-lived session.
        #[arg(long)]
        remember: bool,
    },

    /// Create a new account.
    Signup {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Password (prompted when omitted).
        #[arg(long)]
        password: Option<String>,
    },

    /// Discard the local session.
    Logout,

    /// Show the signed-in user.
    Whoami,

    /// Exchange the refresh token for a new token pair.
    Refresh,

    /// Request a password-reset email.
    ForgotPassword {
        #[arg(long)]
        email: String,
    },

    /// Set a new password using the token from the reset email.
    ResetPassword {
        #[arg(long)]
        token: String,
        /// New password (prompted when omitted).
        #[arg(long)]
        password: Option<String>,
    },

    /// Confirm an email address with the token from the verification email.
    VerifyEmail {
        #[arg(long)]
        token: String,
    },

    /// Send the verification email again.
    ResendVerification {
        #[arg(long)]
        email: String,
    },

    /// Update profile fields; omitted flags keep their current value.
    Profile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// One of fr, nl, en, de.
        #[arg(long)]
        locale: Option<String>,
        /// IANA timezone name, e.g. Europe/Brussels.
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Change the account password.
    ChangePassword {
        /// Current password (prompted when omitted).
        #[arg(long)]
        current: Option<String>,
        /// New password (prompted when omitted).
        #[arg(long)]
        new: Option<String>,
    },

    /// Show backend health and metrics.
    Health,

    /// Print the client version.
    Version,
}
