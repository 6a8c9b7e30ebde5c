//! previsit-server
//!
//! HTTP boundary for the pre-visit summarizer. Runs behind API Gateway as a
//! Lambda function, or as a plain listener for local use.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use previsit_generation::backend::GenerationBackend;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router around a generation backend.
pub fn router<B: GenerationBackend + 'static>(state: AppState<B>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check::<B>))
        .route("/summarize", post(routes::summarize::summarize::<B>))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
