use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use previsit_generation::error::PipelineError;

/// Body of every failed summary response. Internal detail never goes here.
pub const GENERIC_FAILURE: &str = "AI 분석 실패";

/// Body for request payloads that are not a questionnaire.
pub const INVALID_REQUEST: &str = "잘못된 요청 형식";

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Pipeline(PipelineError),
    Timeout(Duration),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(detail) => {
                tracing::warn!(%detail, "rejected malformed request body");
                (StatusCode::BAD_REQUEST, INVALID_REQUEST)
            }
            ApiError::Pipeline(err) => {
                match err.raw_text() {
                    Some(raw_text) => tracing::error!(
                        error = %err,
                        stage = err.failed_stage().as_str(),
                        raw_text,
                        "summary generation failed"
                    ),
                    None => tracing::error!(
                        error = %err,
                        stage = err.failed_stage().as_str(),
                        "summary generation failed"
                    ),
                }
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
            }
            ApiError::Timeout(limit) => {
                tracing::error!(timeout_secs = limit.as_secs_f64(), "summary generation timed out");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        ApiError::Pipeline(e)
    }
}
