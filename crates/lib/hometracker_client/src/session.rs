//! Session ownership.
//!
//! [`SessionManager`] is the single writer of session state. It holds the
//! current [`Session`] behind a lock, writes every change through the
//! injected [`SessionStore`], and owns the silent token refresh. Everything
//! else reads the session through accessors and never mutates it directly.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use hometracker_core::models::User;
use hometracker_core::session::{Identity, Session};
use hometracker_core::store::{SessionStore, StoreError};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::RefreshRequest;

/// Outcome of a [`SessionManager::refresh_session`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A fresh token pair is in place, rotated by this call or by a
    /// concurrent one this call coalesced with.
    Refreshed,
    /// The session could not be refreshed and has been cleared.
    LoggedOut,
}

struct SessionInner {
    state: RwLock<Session>,
    store: Box<dyn SessionStore>,
    /// Serializes refresh attempts so concurrent expiries collapse into a
    /// single backend call.
    refresh_gate: tokio::sync::Mutex<()>,
    http: reqwest::Client,
    refresh_url: String,
}

/// Owner of the client session. Clones share the same underlying state.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<SessionInner>,
}

impl SessionManager {
    pub(crate) fn new(
        config: &ClientConfig,
        http: reqwest::Client,
        store: Box<dyn SessionStore>,
    ) -> Self {
        let refresh_url = format!(
            "{}/auth/refresh",
            config.api_base_url.trim_end_matches('/')
        );
        SessionManager {
            inner: Arc::new(SessionInner {
                state: RwLock::new(Session::default()),
                store,
                refresh_gate: tokio::sync::Mutex::new(()),
                http,
                refresh_url,
            }),
        }
    }

    /// Rehydrate the session from the persisted record.
    ///
    /// A stored token is trusted without contacting the backend; its
    /// liveness is only discovered when the first credentialed request is
    /// rejected. Whatever happens, the session leaves the loading state:
    /// an unreadable record yields an unauthenticated session and the
    /// error is returned for the caller to report.
    pub fn bootstrap(&self) -> Result<Session, StoreError> {
        let loaded = self.inner.store.load();
        let session = match &loaded {
            Ok(Some(record)) => Session::from_record(record.clone()),
            _ => Session::Unauthenticated,
        };
        debug!(
            authenticated = session.is_authenticated(),
            "session bootstrapped"
        );
        *self.inner.state.write() = session.clone();
        loaded.map(|_| session)
    }

    /// Replace the session with a freshly issued identity and persist it.
    ///
    /// Tokens are stored as given; no shape or expiry validation happens
    /// here. A persistence failure is logged and swallowed, leaving a
    /// usable in-memory session.
    pub fn set_auth(&self, user: User, access_token: String, refresh_token: Option<String>) {
        info!(user_id = %user.id, "session established");
        let record = {
            let mut state = self.inner.state.write();
            *state = Session::Authenticated(Identity {
                user,
                access_token,
                refresh_token,
            });
            state.to_record()
        };
        if let Err(e) = self.inner.store.save(&record) {
            warn!(error = %e, "failed to persist session");
        }
    }

    /// Clear the session and its persisted record.
    ///
    /// Local-only: the backend is not notified and the refresh token is
    /// not revoked server-side. Already signed out is a no-op.
    pub fn logout(&self) {
        *self.inner.state.write() = Session::Unauthenticated;
        if let Err(e) = self.inner.store.clear() {
            warn!(error = %e, "failed to clear persisted session");
        }
        info!("session cleared");
    }

    /// Exchange the held refresh token for a new token pair.
    ///
    /// This never returns an error: any unusable refresh token, transport
    /// failure or backend rejection resolves to a cleared session and
    /// [`RefreshOutcome::LoggedOut`].
    ///
    /// Concurrent calls coalesce. While one refresh is in flight, later
    /// callers wait on it and adopt its outcome instead of issuing their
    /// own backend request.
    pub async fn refresh_session(&self) -> RefreshOutcome {
        let stale_token = self.access_token();

        let _gate = self.inner.refresh_gate.lock().await;

        // A caller that waited on the gate may find the rotation already
        // done: the token it saw expire is no longer the current one.
        {
            let state = self.inner.state.read();
            if let Session::Authenticated(identity) = &*state
                && stale_token.as_deref() != Some(identity.access_token.as_str())
            {
                debug!("refresh coalesced with a concurrent rotation");
                return RefreshOutcome::Refreshed;
            }
        }

        let Some(refresh_token) = self.refresh_token() else {
            debug!("no refresh token held, clearing session");
            self.logout();
            return RefreshOutcome::LoggedOut;
        };

        match self.request_refresh(&refresh_token).await {
            Ok((user, access_token, refresh_token)) => {
                self.set_auth(user, access_token, refresh_token);
                debug!("token pair rotated");
                RefreshOutcome::Refreshed
            }
            Err(e) => {
                warn!(error = %e, "token refresh failed, logging out");
                self.logout();
                RefreshOutcome::LoggedOut
            }
        }
    }

    /// One refresh round-trip against the backend.
    async fn request_refresh(
        &self,
        refresh_token: &str,
    ) -> Result<(User, String, Option<String>), ClientError> {
        let body = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        let resp = self
            .inner
            .http
            .post(&self.inner.refresh_url)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let message = crate::client::extract_message(resp).await;
            return Err(ClientError::Api { status, message });
        }
        let auth: crate::models::AuthResponse = resp.json().await?;
        auth.into_session_triple()
    }

    /// Cloned snapshot of the current session.
    pub fn current(&self) -> Session {
        self.inner.state.read().clone()
    }

    /// True until [`bootstrap`](Self::bootstrap) has run once.
    pub fn is_loading(&self) -> bool {
        self.inner.state.read().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().is_authenticated()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.state.read().user().cloned()
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.state.read().access_token().map(str::to_owned)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner.state.read().refresh_token().map(str::to_owned)
    }

    /// Swap the identity's user record, keeping the token pair.
    ///
    /// No-op unless authenticated.
    pub(crate) fn replace_user(&self, user: User) {
        let record = {
            let mut state = self.inner.state.write();
            let Session::Authenticated(identity) = &mut *state else {
                return;
            };
            identity.user = user;
            state.to_record()
        };
        if let Err(e) = self.inner.store.save(&record) {
            warn!(error = %e, "failed to persist session");
        }
    }
}
