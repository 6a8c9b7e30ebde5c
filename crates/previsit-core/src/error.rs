use thiserror::Error;

/// One way a generated response departs from the schema contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct SchemaViolation {
    /// Dotted location, e.g. `chartData.urgency` or `keywords[2]`.
    pub path: String,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViolationKind {
    #[error("missing required field")]
    MissingField,

    #[error("unexpected field")]
    UnexpectedField,

    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ParseFailureKind {
    #[error("response is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("response does not conform to the summary schema: {}", join_violations(.0))]
    SchemaViolation(Vec<SchemaViolation>),

    #[error("response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A generated response that could not be turned into a `ClinicalSummary`.
/// Keeps the raw text for diagnosis; it must never reach the caller.
#[derive(Debug, Error)]
#[error("failed to parse clinical summary: {kind}")]
pub struct ParseFailure {
    pub raw_text: String,
    pub kind: ParseFailureKind,
}

fn join_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
