//! previsit-generation
//!
//! Prompt assembly, generation backends (Bedrock, Gemini), and the
//! questionnaire-to-summary pipeline.

pub mod backend;
pub mod bedrock;
pub mod config;
pub mod document;
pub mod error;
pub mod gemini;
pub mod pipeline;
pub mod prompt;
