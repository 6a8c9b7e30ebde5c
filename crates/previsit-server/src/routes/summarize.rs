use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use previsit_core::models::questionnaire::QuestionnaireRecord;
use previsit_core::models::summary::ClinicalSummary;
use previsit_generation::backend::GenerationBackend;
use previsit_generation::pipeline;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(default)]
    pub questionnaire_data: Option<QuestionnaireRecord>,
}

/// Summarize one pre-visit questionnaire.
///
/// Responds with the `ClinicalSummary` as the top-level object, or a
/// generic `{ "error": ... }` body.
pub async fn summarize<B: GenerationBackend>(
    State(state): State<AppState<B>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<ClinicalSummary>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let run = pipeline::summarize(state.backend.as_ref(), request.questionnaire_data.as_ref());
    let result = tokio::time::timeout(state.request_timeout, run)
        .await
        .map_err(|_| ApiError::Timeout(state.request_timeout))??;

    Ok(Json(result.output))
}
