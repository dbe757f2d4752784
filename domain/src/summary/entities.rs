//! Summary entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Style of the produced summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    /// Paragraph prose
    #[default]
    Summary,
    /// Bulleted list of key points
    Takeaway,
}

impl SummaryType {
    pub fn as_str(&self) -> &str {
        match self {
            SummaryType::Summary => "summary",
            SummaryType::Takeaway => "takeaway",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == SummaryType::default()
    }

    pub const VARIANTS: [&'static str; 2] = ["summary", "takeaway"];
}

impl std::fmt::Display for SummaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SummaryType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "summary" => Ok(SummaryType::Summary),
            "takeaway" => Ok(SummaryType::Takeaway),
            _ => Err(DomainError::InvalidSummaryType(s.to_string())),
        }
    }
}

/// Summarization engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryEngine {
    /// Fast, general-purpose
    #[default]
    Cecil,
    /// Formal, technical, analytical
    Agnes,
}

impl SummaryEngine {
    pub fn as_str(&self) -> &str {
        match self {
            SummaryEngine::Cecil => "cecil",
            SummaryEngine::Agnes => "agnes",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == SummaryEngine::default()
    }

    pub const VARIANTS: [&'static str; 2] = ["cecil", "agnes"];
}

impl std::fmt::Display for SummaryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SummaryEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cecil" => Ok(SummaryEngine::Cecil),
            "agnes" => Ok(SummaryEngine::Agnes),
            _ => Err(DomainError::InvalidEngine(s.to_string())),
        }
    }
}

/// Optional knobs for a summarize request.
///
/// `None` means "not supplied": the remote service applies its own default
/// and the field is left out of the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_type: Option<SummaryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<SummaryEngine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
}

impl SummarizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary_type(mut self, summary_type: SummaryType) -> Self {
        self.summary_type = Some(summary_type);
        self
    }

    pub fn with_engine(mut self, engine: SummaryEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_target_language(mut self, language: impl Into<String>) -> Self {
        self.target_language = Some(language.into());
        self
    }

    /// Summary type with the service default applied
    pub fn effective_summary_type(&self) -> SummaryType {
        self.summary_type.unwrap_or_default()
    }

    /// Engine with the service default applied
    pub fn effective_engine(&self) -> SummaryEngine {
        self.engine.unwrap_or_default()
    }
}

/// A produced summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub output: String,
    /// Tokens consumed, 0 when the service does not report it
    #[serde(default)]
    pub tokens: u64,
}

impl Summary {
    pub fn new(output: impl Into<String>, tokens: u64) -> Self {
        Self {
            output: output.into(),
            tokens,
        }
    }
}
