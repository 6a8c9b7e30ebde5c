use axum::Json;
use axum::extract::State;
use serde::Serialize;

use previsit_generation::backend::GenerationBackend;
use previsit_generation::prompt::INSTRUCTION_VERSION;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_id: String,
    pub instruction_version: &'static str,
}

/// Liveness probe. Does not call the generation backend.
pub async fn health_check<B: GenerationBackend>(
    State(state): State<AppState<B>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_id: state.backend.model_id().to_string(),
        instruction_version: INSTRUCTION_VERSION,
    })
}
