//! Clipboard relay server.
//!
//! A producer (e.g. tmux copy-pipe) POSTs text here; the poller GETs it
//! and pushes it to the system clipboard. The GET is destructive (clears
//! after read) so the same text is never written to the clipboard twice.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    extract::State,
    http::{Method, header},
    response::{IntoResponse, Json},
    routing::get,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Pending clipboard text plus a counter of how many posts were received.
#[derive(Debug, Default)]
struct ClipStore {
    text: String,
    version: u64,
}

/// Application state shared across handlers
#[derive(Clone, Default)]
struct AppState {
    store: Arc<Mutex<ClipStore>>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: u64,
}

/// Build the relay router.
///
/// The bare `/` routes match the original producer scripts; `/clipboard/`
/// is the path the poller uses (it survives reverse-proxy prefixing).
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(fetch_text).post(store_text))
        .route("/clipboard/", get(fetch_text).post(store_text))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState::default())
}

/// Bind on loopback and serve until the process exits.
pub async fn serve(port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!(port, "clipboard relay listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Store text posted by a producer.
async fn store_text(State(state): State<AppState>, body: String) -> &'static str {
    let mut store = state.store.lock().await;
    store.text = body;
    store.version += 1;
    debug!(version = store.version, bytes = store.text.len(), "stored clipboard text");
    "ok"
}

/// Return the pending text and clear it.
async fn fetch_text(State(state): State<AppState>) -> impl IntoResponse {
    let mut store = state.store.lock().await;
    let text = std::mem::take(&mut store.text);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.lock().await;
    Json(HealthResponse {
        status: "ok",
        version: store.version,
    })
}
