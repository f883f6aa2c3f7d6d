use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{speech, voices};
use crate::state::AppState;
use std::sync::Arc;

/// Create the OpenAI-compatible API router
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/v1/audio/speech", post(speech::create_speech))
        .route("/v1/voices", get(voices::list_voices))
        .layer(TraceLayer::new_for_http())
}
