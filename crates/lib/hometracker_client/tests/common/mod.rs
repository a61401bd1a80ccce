//! In-process stub of the HomeTracker backend used by the client tests.
//!
//! The stub issues `tok<N>`/`ref<N>` token pairs and only accepts the
//! latest access token on protected routes, so a test can expire the
//! client's token by rotating `current_token` underneath it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use hometracker_client::{ApiClient, ClientConfig};
use hometracker_core::store::SessionStore;

/// Behavior knobs and call counters shared with the test body.
pub struct StubBackend {
    pub login_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
    /// The refresh endpoint answers 401 when false.
    pub refresh_ok: AtomicBool,
    /// Protected routes reject every token when false.
    pub accept_tokens: AtomicBool,
    /// Access token the protected routes currently accept.
    pub current_token: Mutex<String>,
    /// Delay inside the refresh handler, used to widen race windows.
    pub refresh_delay: Mutex<Duration>,
    generation: AtomicUsize,
}

impl StubBackend {
    fn new() -> Self {
        StubBackend {
            login_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
            profile_calls: AtomicUsize::new(0),
            refresh_ok: AtomicBool::new(true),
            accept_tokens: AtomicBool::new(true),
            current_token: Mutex::new(String::new()),
            refresh_delay: Mutex::new(Duration::ZERO),
            generation: AtomicUsize::new(0),
        }
    }

    /// Issue the next `tok<N>`/`ref<N>` pair and make it the accepted one.
    fn issue_tokens(&self) -> (String, String) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = format!("tok{generation}");
        *self.current_token.lock() = token.clone();
        (token, format!("ref{generation}"))
    }

    /// Invalidate the client's access token without issuing a new one.
    pub fn expire_current_token(&self) {
        *self.current_token.lock() = "expired".into();
    }
}

pub fn demo_user() -> Value {
    json!({
        "id": "usr_01",
        "email": "jean@chantier.be",
        "firstName": "Jean",
        "lastName": "Dupont",
        "role": "owner",
        "tenantId": "ten_01",
        "createdAt": "2026-01-15T09:30:00Z"
    })
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn authorized(stub: &StubBackend, headers: &HeaderMap) -> bool {
    stub.accept_tokens.load(Ordering::SeqCst)
        && bearer(headers) == Some(stub.current_token.lock().as_str())
}

async fn login(
    State(stub): State<Arc<StubBackend>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.login_calls.fetch_add(1, Ordering::SeqCst);
    match body["password"].as_str() {
        Some("Demo123!") => {
            let (token, refresh_token) = stub.issue_tokens();
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "user": demo_user(),
                    "token": token,
                    "refreshToken": refresh_token,
                })),
            )
        }
        Some("locked") => (
            StatusCode::OK,
            Json(json!({ "success": false, "message": "Compte verrouillé" })),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Email ou mot de passe incorrect" })),
        ),
    }
}

async fn signup(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"].as_str().is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Email requis" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Vérifiez votre boîte mail" })),
    )
}

async fn refresh(
    State(stub): State<Arc<StubBackend>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.refresh_calls.fetch_add(1, Ordering::SeqCst);
    let delay = *stub.refresh_delay.lock();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    if !stub.refresh_ok.load(Ordering::SeqCst) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Refresh token invalide" })),
        );
    }
    if body["refreshToken"].as_str().is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "refreshToken manquant" })),
        );
    }
    let (token, refresh_token) = stub.issue_tokens();
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "user": demo_user(),
            "token": token,
            "refreshToken": refresh_token,
        })),
    )
}

async fn forgot_password(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "success": true, "message": "Email de réinitialisation envoyé" }))
}

async fn reset_password(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["token"].as_str() == Some("reset-ok") {
        (StatusCode::OK, Json(json!({ "success": true })))
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Jeton expiré" })),
        )
    }
}

async fn verify_email(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["token"].as_str() == Some("verify-ok") {
        (StatusCode::OK, Json(json!({ "success": true })))
    } else {
        (StatusCode::OK, Json(json!({ "success": false, "message": "Jeton invalide" })))
    }
}

async fn resend_verification(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({ "success": true, "message": "Email renvoyé" }))
}

async fn update_profile(
    State(stub): State<Arc<StubBackend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.profile_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&stub, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Token expiré" })),
        );
    }
    let mut user = demo_user();
    if let Some(first_name) = body["firstName"].as_str() {
        user["firstName"] = json!(first_name);
    }
    if let Some(last_name) = body["lastName"].as_str() {
        user["lastName"] = json!(last_name);
    }
    (StatusCode::OK, Json(json!({ "success": true, "user": user })))
}

async fn change_password(
    State(stub): State<Arc<StubBackend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&stub, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Token expiré" })),
        );
    }
    if body["currentPassword"].as_str() != Some("Demo123!") {
        return (
            StatusCode::OK,
            Json(json!({ "success": false, "message": "Mot de passe actuel incorrect" })),
        );
    }
    (StatusCode::OK, Json(json!({ "success": true })))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "uptime": 42 }))
}

async fn metrics() -> Json<Value> {
    Json(json!({ "requestsTotal": 7, "activeUsers": 1 }))
}

fn router(stub: Arc<StubBackend>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/auth/refresh", post(refresh))
        .route("/api/v1/auth/forgot-password", post(forgot_password))
        .route("/api/v1/auth/reset-password", post(reset_password))
        .route("/api/v1/auth/verify-email", post(verify_email))
        .route("/api/v1/auth/resend-verification", post(resend_verification))
        .route("/api/v1/user/profile", put(update_profile))
        .route("/api/v1/user/change-password", post(change_password))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .with_state(stub)
}

/// Bind the stub to an ephemeral port and serve it in the background.
pub async fn spawn_backend() -> (Arc<StubBackend>, SocketAddr) {
    let stub = Arc::new(StubBackend::new());
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub local addr");
    let app = router(stub.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub backend");
    });
    (stub, addr)
}

/// Client pointed at the stub, with the given session store.
pub fn client_for(addr: SocketAddr, store: impl SessionStore + 'static) -> ApiClient {
    let config = ClientConfig {
        api_base_url: format!("http://{addr}"),
        environment: "test".into(),
        timeout: Duration::from_secs(5),
    };
    ApiClient::builder(config)
        .session_store(store)
        .build()
        .expect("build client")
}
