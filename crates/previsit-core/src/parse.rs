use serde_json::Value;

use crate::error::{ParseFailure, ParseFailureKind};
use crate::models::summary::ClinicalSummary;
use crate::schema;

/// Parse raw generated text into a `ClinicalSummary`.
///
/// The backend was asked to honour the schema contract, but its output is
/// re-validated here before decoding. Every input yields either a complete
/// summary, unchanged from the text, or a classified `ParseFailure`.
pub fn parse_summary(raw_text: &str) -> Result<ClinicalSummary, ParseFailure> {
    let fail = |kind| ParseFailure {
        raw_text: raw_text.to_string(),
        kind,
    };

    let value: Value =
        serde_json::from_str(raw_text).map_err(|e| fail(ParseFailureKind::MalformedJson(e)))?;

    schema::summary_schema()
        .validate(&value)
        .map_err(|violations| fail(ParseFailureKind::SchemaViolation(violations)))?;

    serde_json::from_value(value).map_err(|e| fail(ParseFailureKind::Decode(e)))
}
