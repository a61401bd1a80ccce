// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use hometracker_client::{ApiClient, ClientConfig};

mod cli;
mod commands;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();

    if let Commands::Version = args.command {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = &args.api_url {
        config.api_base_url = api_url.clone();
    }

    let client = ApiClient::builder(config).build()?;
    // A broken session file must not block the CLI; commands that need a
    // session will say so themselves.
    if let Err(e) = client.session().bootstrap() {
        log::warn!("could not read the saved session: {}", e);
    }

    match args.command {
        Commands::Login {
            email,
            password,
            remember,
        } => commands::auth::login(&client, &email, password, remember).await,
        Commands::Signup {
            first_name,
            last_name,
            email,
            password,
        } => commands::auth::signup(&client, &first_name, &last_name, &email, password).await,
        Commands::Logout => commands::auth::logout(&client),
        Commands::Whoami => commands::auth::whoami(&client),
        Commands::Refresh => commands::auth::refresh(&client).await,
        Commands::ForgotPassword { email } => {
            commands::auth::forgot_password(&client, &email).await
        }
        Commands::ResetPassword { token, password } => {
            commands::auth::reset_password(&client, &token, password).await
        }
        Commands::VerifyEmail { token } => commands::auth::verify_email(&client, &token).await,
        Commands::ResendVerification { email } => {
            commands::auth::resend_verification(&client, &email).await
        }
        Commands::Profile {
            first_name,
            last_name,
            phone,
            locale,
            timezone,
        } => {
            commands::account::profile(&client, first_name, last_name, phone, locale, timezone)
                .await
        }
        Commands::ChangePassword { current, new } => {
            commands::account::change_password(&client, current, new).await
        }
        Commands::Health => commands::diagnostics::health(&client).await,
        Commands::Version => unreachable!("handled above"),
    }
}
