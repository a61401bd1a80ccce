//! HTTP plumbing: client construction, per-request credential attachment
//! and the one-shot refresh-retry on an authorization rejection.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use hometracker_core::store::{FileSessionStore, SessionStore};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::ErrorBody;
use crate::session::{RefreshOutcome, SessionManager};

/// How a request authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    /// Public endpoint. A 401 is a final answer.
    None,
    /// Attach the session's bearer token; a 401 goes through the silent
    /// refresh-and-retry path.
    Session,
}

/// Client for the HomeTracker backend.
///
/// Cheap to clone: clones share the connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: SessionManager,
}

impl ApiClient {
    /// Builder with the given configuration and the default on-disk
    /// session store.
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            store: None,
        }
    }

    /// Client from environment configuration and the default session store.
    pub fn from_env() -> Result<Self> {
        Self::builder(ClientConfig::from_env()).build()
    }

    /// Handle to the session owner.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL under the API base.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), path)
    }

    /// Absolute URL under the server root (diagnostics).
    pub(crate) fn root_url(&self, path: &str) -> String {
        format!("{}{}", self.config.server_root_url(), path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str, auth: Auth) -> Result<T> {
        self.request(Method::GET, url, None::<&()>, auth).await
    }

    pub(crate) async fn post_json<B, T>(&self, url: &str, body: &B, auth: Auth) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, url, Some(body), auth).await
    }

    pub(crate) async fn put_json<B, T>(&self, url: &str, body: &B, auth: Auth) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, url, Some(body), auth).await
    }

    /// Send a JSON request and decode the response body.
    ///
    /// Credentialed requests read the live access token per attempt, so a
    /// retry automatically picks up a rotated token. The retry happens at
    /// most once, only after a 401 and a successful silent refresh; when
    /// the refresh ends in a logout, the original rejection is returned.
    /// Whatever the retried attempt yields, success or failure, is final.
    async fn request<B, T>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.send_once(method.clone(), url, body, auth).await {
            Err(ClientError::Api { status, message })
                if status == StatusCode::UNAUTHORIZED && auth == Auth::Session =>
            {
                debug!(url, "request rejected, attempting silent refresh");
                match self.session.refresh_session().await {
                    RefreshOutcome::Refreshed => self.send_once(method, url, body, auth).await,
                    RefreshOutcome::LoggedOut => Err(ClientError::Api { status, message }),
                }
            }
            other => other,
        }
    }

    /// One attempt: build, attach current credentials, send, decode.
    async fn send_once<B, T>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut req = self.http.request(method, url);
        if auth == Auth::Session
            && let Some(token) = self.session.access_token()
        {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = extract_message(resp).await;
            return Err(ClientError::Api { status, message });
        }
        Ok(resp.json::<T>().await?)
    }
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    config: ClientConfig,
    store: Option<Box<dyn SessionStore>>,
}

impl ApiClientBuilder {
    /// Use a specific session store instead of the default file store.
    pub fn session_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        url::Url::parse(&self.config.api_base_url).map_err(|e| {
            ClientError::Config(format!(
                "invalid API base URL '{}': {e}",
                self.config.api_base_url
            ))
        })?;

        let http = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()?;
        let store = self
            .store
            .unwrap_or_else(|| Box::new(FileSessionStore::default()));
        let session = SessionManager::new(&self.config, http.clone(), store);

        Ok(ApiClient {
            http,
            config: self.config,
            session,
        })
    }
}

/// Best-effort extraction of the backend's error message.
///
/// The backend sends `{ "message": ... }`; anything else falls back to the
/// raw body, then to the status text.
pub(crate) async fn extract_message(resp: reqwest::Response) -> String {
    let status = resp.status();
    match resp.text().await {
        Ok(body) if !body.is_empty() => serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or(body),
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}
