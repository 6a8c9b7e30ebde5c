use previsit_core::error::ParseFailure;
use thiserror::Error;

use crate::pipeline::Stage;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Why a summary request did not complete.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("generation failed: {0}")]
    Backend(#[from] GenerationError),

    #[error(transparent)]
    Decode(#[from] ParseFailure),
}

impl PipelineError {
    /// The stage the request was in when it failed.
    pub fn failed_stage(&self) -> Stage {
        match self {
            PipelineError::Backend(_) => Stage::AwaitingGeneration,
            PipelineError::Decode(_) => Stage::Parsed,
        }
    }

    /// Raw model output, when the failure happened after generation.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            PipelineError::Backend(_) => None,
            PipelineError::Decode(failure) => Some(&failure.raw_text),
        }
    }
}
