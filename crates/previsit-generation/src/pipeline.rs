use tracing::{debug, info, warn};
use uuid::Uuid;

use previsit_core::models::questionnaire::QuestionnaireRecord;
use previsit_core::models::summary::ClinicalSummary;
use previsit_core::narrative;
use previsit_core::parse::parse_summary;
use previsit_core::schema;

use crate::backend::GenerationBackend;
use crate::error::PipelineError;
use crate::prompt::{self, INSTRUCTION_VERSION};

/// Lifecycle of one summary request.
///
/// `Received → Formatted → Assembled → AwaitingGeneration → Parsed → Completed`,
/// or `Failed` from `AwaitingGeneration` or `Parsed`. Nothing is retried or
/// resumed; a failed request is resubmitted from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    Formatted,
    Assembled,
    AwaitingGeneration,
    Parsed,
    Completed,
    Failed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Received => "received",
            Stage::Formatted => "formatted",
            Stage::Assembled => "assembled",
            Stage::AwaitingGeneration => "awaiting_generation",
            Stage::Parsed => "parsed",
            Stage::Completed => "completed",
            Stage::Failed => "failed",
        }
    }
}

/// A completed summary request.
#[derive(Debug, Clone)]
pub struct SummaryResult {
    pub id: Uuid,
    pub model_id: String,
    pub output: ClinicalSummary,
}

/// Run one questionnaire through the pipeline.
///
/// The backend call is the only suspension point. No state outlives the
/// call.
pub async fn summarize<B: GenerationBackend>(
    backend: &B,
    record: Option<&QuestionnaireRecord>,
) -> Result<SummaryResult, PipelineError> {
    let request_id = Uuid::new_v4();
    let category = record.map_or("none", |r| r.category.kind().as_str());
    debug!(%request_id, stage = Stage::Received.as_str(), category, "questionnaire received");

    let narrative = narrative::format_optional(record);
    debug!(
        %request_id,
        stage = Stage::Formatted.as_str(),
        narrative_len = narrative.as_str().len(),
        "narrative formatted"
    );

    let prompt = prompt::assemble(&narrative);
    debug!(
        %request_id,
        stage = Stage::Assembled.as_str(),
        instruction_version = INSTRUCTION_VERSION,
        "prompt assembled"
    );

    info!(
        %request_id,
        stage = Stage::AwaitingGeneration.as_str(),
        model_id = backend.model_id(),
        category,
        "requesting clinical summary"
    );
    let raw_text = backend
        .generate(&prompt.request(schema::summary_schema()))
        .await
        .map_err(|e| failed(request_id, PipelineError::Backend(e)))?;

    let summary = parse_summary(&raw_text).map_err(|e| failed(request_id, PipelineError::Decode(e)))?;
    debug!(%request_id, stage = Stage::Parsed.as_str(), "summary parsed");

    let out_of_range = summary.out_of_range_scores();
    if !out_of_range.is_empty() {
        warn!(
            %request_id,
            ?out_of_range,
            "chart scores outside 0-10 passed through unchanged"
        );
    }

    info!(%request_id, stage = Stage::Completed.as_str(), "clinical summary complete");

    Ok(SummaryResult {
        id: request_id,
        model_id: backend.model_id().to_string(),
        output: summary,
    })
}

fn failed(request_id: Uuid, error: PipelineError) -> PipelineError {
    warn!(
        %request_id,
        stage = Stage::Failed.as_str(),
        from = error.failed_stage().as_str(),
        "summary pipeline failed"
    );
    error
}
