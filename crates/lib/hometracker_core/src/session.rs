//! Client session state.
//!
//! A [`Session`] is either still bootstrapping (persisted state not yet
//! examined), unauthenticated, or authenticated. The authenticated variant
//! carries an [`Identity`], so "a user and an access token are present" is
//! guaranteed by construction rather than checked at use sites.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Identity and credentials held while signed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user: User,
    /// Bearer token attached to credentialed requests.
    pub access_token: String,
    /// Long-lived token used to obtain a new pair. A session without one
    /// cannot survive an access-token rejection.
    pub refresh_token: Option<String>,
}

/// Lifecycle state of the client session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    /// Process start, before any persisted record has been consulted.
    #[default]
    Bootstrapping,
    /// No credentials held.
    Unauthenticated,
    /// Signed in with a live identity.
    Authenticated(Identity),
}

impl Session {
    /// True until the persisted record has been consulted once.
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Bootstrapping)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(identity) => Some(&identity.user),
            _ => None,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            Session::Authenticated(identity) => Some(identity.access_token.as_str()),
            _ => None,
        }
    }

    pub fn refresh_token(&self) -> Option<&str> {
        match self {
            Session::Authenticated(identity) => identity.refresh_token.as_deref(),
            _ => None,
        }
    }

    /// Snapshot suitable for persistence.
    pub fn to_record(&self) -> SessionRecord {
        match self {
            Session::Authenticated(identity) => SessionRecord {
                user: Some(identity.user.clone()),
                token: Some(identity.access_token.clone()),
                refresh_token: identity.refresh_token.clone(),
                is_authenticated: true,
            },
            _ => SessionRecord::signed_out(),
        }
    }

    /// Rebuild a session from a persisted record.
    ///
    /// The record's `isAuthenticated` flag is advisory only: a session is
    /// authenticated exactly when the record holds both a user and an
    /// access token, whatever the flag claims.
    pub fn from_record(record: SessionRecord) -> Self {
        match (record.user, record.token) {
            (Some(user), Some(token)) => Session::Authenticated(Identity {
                user,
                access_token: token,
                refresh_token: record.refresh_token,
            }),
            _ => Session::Unauthenticated,
        }
    }
}

/// Persisted session snapshot.
///
/// The field names match the web client's stored record, so a session
/// written by either client deserializes in the other. The access token
/// is stored under `token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl SessionRecord {
    /// Record representing a signed-out session.
    pub fn signed_out() -> Self {
        SessionRecord {
            user: None,
            token: None,
            refresh_token: None,
            is_authenticated: false,
        }
    }
}
