//! HTTP API for journaling, mood analysis, and support chat.
//!
//! ## Endpoints
//!
//! - `GET /health` — liveness check
//! - `POST /analyze` — classify journal text and return supportive content
//! - `POST /journal` — save a journal entry
//! - `GET /logs` — list saved journal entries
//! - `POST /chat` — get a canned supportive reply (persisted to transcript)
//! - `GET /chat/history` — full chat transcript
//! - `DELETE /chat/history` — clear the chat transcript
//!
//! The classification core is pure and lock-free; only the flat-file store
//! sits behind a mutex so concurrent appends cannot interleave.

use crate::chat;
use crate::config::ServiceConfig;
use crate::content;
use crate::history::{ChatRecord, HistoryStore, JournalEntry};
use crate::sentiment::{self, Mood, Sentiment};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-text journal entry to classify.
    pub text: String,
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's chat message.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response from `POST /analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    /// Coarse polarity of the text.
    pub sentiment: Sentiment,
    /// Heuristic confidence in `0.7..=0.95`.
    pub confidence: f32,
    /// Dominant mood.
    pub mood: Mood,
    /// RFC 3339 timestamp of the analysis.
    pub timestamp: String,
    /// Supportive advice for the mood.
    pub recommendation: &'static str,
    /// An attributed quote.
    pub quote: &'static str,
    /// A concrete activity suggestion.
    pub activity: &'static str,
    /// A song to listen to.
    pub song_suggestion: &'static str,
}

/// Response from `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// The selected supportive reply.
    pub response: &'static str,
    /// RFC 3339 timestamp of the exchange.
    pub timestamp: String,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the service is up.
    pub status: &'static str,
    /// Human-readable status line.
    pub message: &'static str,
}

/// Acknowledgment body for writes without a richer payload.
#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    /// Human-readable confirmation.
    pub message: &'static str,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// Shared state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Flat-file store; the mutex serializes whole-file rewrites.
    store: Arc<Mutex<HistoryStore>>,
}

impl AppState {
    /// Wrap a store for sharing across handlers.
    pub fn new(store: HistoryStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

/// Build the API router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/analyze", post(handle_analyze))
        .route("/journal", post(handle_journal))
        .route("/logs", get(handle_logs))
        .route("/chat", post(handle_chat))
        .route(
            "/chat/history",
            get(handle_chat_history).delete(handle_clear_chat_history),
        )
        .with_state(state)
}

/// CORS layer restricted to the configured frontend origins.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

// ---------------------------------------------------------------------------
// ApiServer
// ---------------------------------------------------------------------------

/// HTTP server wrapping the journaling and chat API.
pub struct ApiServer {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl ApiServer {
    /// Start the API server.
    ///
    /// Binds to `{config.server.host}:{config.server.port}` (use port `0`
    /// for auto-assign) and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(config: &ServiceConfig) -> crate::error::Result<Self> {
        let state = AppState::new(HistoryStore::new(&config.storage.data_dir));
        let app = router(state).layer(cors_layer(&config.server.allowed_origins));

        let bind_addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&bind_addr).await.map_err(|e| {
            crate::error::ServiceError::Server(format!("bind {bind_addr} failed: {e}"))
        })?;

        let addr = listener.local_addr().map_err(|e| {
            crate::error::ServiceError::Server(format!("failed to get local addr: {e}"))
        })?;

        info!("solace API listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("API server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for ApiServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current timestamp in RFC 3339 (UTC).
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
        .into_response()
}

fn storage_error(e: crate::error::ServiceError) -> Response {
    tracing::error!("storage failure: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// `GET /health` — liveness check.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "solace API is running",
    })
}

/// `POST /analyze` — classify journal text and return supportive content.
///
/// Blank input is rejected before the classifier runs.
async fn handle_analyze(Json(request): Json<AnalyzeRequest>) -> Response {
    if request.text.trim().is_empty() {
        return bad_request("text input cannot be empty");
    }

    let result = sentiment::classify(&request.text);
    let bundle = content::bundle_for(result.mood);

    Json(AnalyzeResponse {
        sentiment: result.sentiment,
        confidence: result.confidence,
        mood: result.mood,
        timestamp: now_rfc3339(),
        recommendation: bundle.recommendation,
        quote: bundle.quote,
        activity: bundle.activity,
        song_suggestion: bundle.song_suggestion,
    })
    .into_response()
}

/// `POST /journal` — append a journal entry to the log.
async fn handle_journal(State(state): State<AppState>, Json(entry): Json<JournalEntry>) -> Response {
    let store = state.store.lock().await;
    match store.append_journal(entry) {
        Ok(()) => Json(AckResponse {
            message: "journal entry saved",
        })
        .into_response(),
        Err(e) => storage_error(e),
    }
}

/// `GET /logs` — all saved journal entries, oldest first.
async fn handle_logs(State(state): State<AppState>) -> Response {
    let store = state.store.lock().await;
    match store.journal_entries() {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => storage_error(e),
    }
}

/// `POST /chat` — select a supportive reply and persist the exchange.
async fn handle_chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    if request.message.trim().is_empty() {
        return bad_request("message cannot be empty");
    }

    // Draw the reply before touching the store; ThreadRng is not held
    // across await points.
    let reply = {
        let mut rng = rand::thread_rng();
        chat::respond(&request.message, &mut rng)
    };
    let timestamp = now_rfc3339();

    let user = ChatRecord {
        message: request.message,
        is_user: true,
        timestamp: timestamp.clone(),
    };
    let bot = ChatRecord {
        message: reply.to_owned(),
        is_user: false,
        timestamp: timestamp.clone(),
    };

    let store = state.store.lock().await;
    match store.append_chat_exchange(user, bot) {
        Ok(()) => Json(ChatResponse {
            response: reply,
            timestamp,
        })
        .into_response(),
        Err(e) => storage_error(e),
    }
}

/// `GET /chat/history` — the full chat transcript.
async fn handle_chat_history(State(state): State<AppState>) -> Response {
    let store = state.store.lock().await;
    match store.chat_history() {
        Ok(records) => Json(records).into_response(),
        Err(e) => storage_error(e),
    }
}

/// `DELETE /chat/history` — clear the chat transcript.
async fn handle_clear_chat_history(State(state): State<AppState>) -> Response {
    let store = state.store.lock().await;
    match store.clear_chat_history() {
        Ok(()) => Json(AckResponse {
            message: "chat history cleared",
        })
        .into_response(),
        Err(e) => storage_error(e),
    }
}
