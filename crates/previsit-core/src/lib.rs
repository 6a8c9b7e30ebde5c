//! previsit-core
//!
//! Pure domain types for the pre-visit pipeline: the questionnaire model,
//! narrative formatting, the clinical summary schema contract, and response
//! parsing. No network dependency; the rest of the summarizer shares these
//! types.

pub mod error;
pub mod models;
pub mod narrative;
pub mod parse;
pub mod schema;
