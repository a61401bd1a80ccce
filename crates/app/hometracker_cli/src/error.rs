use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("not signed in (run the login command first)")]
    NotSignedIn,

    #[error("session expired, sign in again")]
    SessionExpired,

    #[error("{}", .0)]
    Client(#[from] hometracker_client::ClientError),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("Serde::{:?}: {}", .0, .0)]
    Serde(#[from] serde_json::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),
}
