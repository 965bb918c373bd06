use thiserror::Error;

/// Errors raised while assembling or submitting an inspection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectionError {
    #[error("Business information is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Checklist submission is incomplete: no status for item(s) {}", format_positions(.missing))]
    IncompleteSubmission { missing: Vec<usize> },

    #[error("Checklist has no item {position} (checklist has {len} items)")]
    UnknownItem { position: usize, len: usize },

    #[error("Expected {expected} responses but found {found}")]
    ResponseCountMismatch { expected: usize, found: usize },

    #[error("Invalid compliance status: '{0}' (expected Compliant, Non-Compliant or N/A)")]
    InvalidStatus(String),
}

fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
