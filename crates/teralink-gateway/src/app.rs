use std::path::PathBuf;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers::{health_handler, resolve_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// API routes only, without static files or middleware.
    pub fn api(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest("/api", Router::new().route("/resolve", post(resolve_handler)))
            .with_state(state)
    }

    /// The full application: API routes, static files from `static_dir` for
    /// every other path, permissive CORS and request tracing.
    pub fn router(state: AppState, static_dir: impl Into<PathBuf>) -> Router {
        Self::api(state)
            .fallback_service(ServeDir::new(static_dir.into()))
            .layer(CorsLayer::permissive())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
    }
}
