//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid summary type: {0} (expected \"summary\" or \"takeaway\")")]
    InvalidSummaryType(String),

    #[error("Invalid summary engine: {0} (expected \"cecil\" or \"agnes\")")]
    InvalidEngine(String),

    #[error("Invalid truncation limits: {0}")]
    InvalidLimits(String),
}
