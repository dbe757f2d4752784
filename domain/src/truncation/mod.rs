//! Head truncation of tool output.
//!
//! Tool output is bounded by both a line count and a byte count before it is
//! handed back to the host. [`truncate_head`] keeps the leading lines that fit
//! and reports exactly what was dropped so callers can spill the full text
//! elsewhere and tell the reader where it went.
//!
//! Lines are never split: if the very first line is already larger than the
//! byte budget, nothing is kept and
//! [`first_line_exceeds_limit`](TruncationResult::first_line_exceeds_limit) is set.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Default maximum number of lines returned by a tool
pub const DEFAULT_MAX_LINES: usize = 2000;

/// Default maximum number of bytes returned by a tool (50 KiB)
pub const DEFAULT_MAX_BYTES: usize = 50 * 1024;

/// Line and byte budget for tool output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationLimits {
    pub max_lines: usize,
    pub max_bytes: usize,
}

impl Default for TruncationLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl TruncationLimits {
    pub fn new(max_lines: usize, max_bytes: usize) -> Result<Self, DomainError> {
        if max_lines == 0 {
            return Err(DomainError::InvalidLimits("max_lines cannot be 0".to_string()));
        }
        if max_bytes == 0 {
            return Err(DomainError::InvalidLimits("max_bytes cannot be 0".to_string()));
        }
        Ok(Self {
            max_lines,
            max_bytes,
        })
    }
}

/// Which limit caused truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncatedBy {
    Lines,
    Bytes,
}

/// Outcome of [`truncate_head`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationResult {
    /// Text that fits within the limits
    pub content: String,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_by: Option<TruncatedBy>,
    pub total_lines: usize,
    pub total_bytes: usize,
    pub output_lines: usize,
    pub output_bytes: usize,
    /// Always false: head truncation keeps whole lines only
    pub last_line_partial: bool,
    pub first_line_exceeds_limit: bool,
    /// Limits the text was held to
    pub max_lines: usize,
    pub max_bytes: usize,
}

/// Keep the leading whole lines of `text` that fit within `limits`.
pub fn truncate_head(text: &str, limits: TruncationLimits) -> TruncationResult {
    let total_bytes = text.len();
    let lines: Vec<&str> = text.split('\n').collect();
    let total_lines = lines.len();

    if total_lines <= limits.max_lines && total_bytes <= limits.max_bytes {
        return TruncationResult {
            content: text.to_string(),
            truncated: false,
            truncated_by: None,
            total_lines,
            total_bytes,
            output_lines: total_lines,
            output_bytes: total_bytes,
            last_line_partial: false,
            first_line_exceeds_limit: false,
            max_lines: limits.max_lines,
            max_bytes: limits.max_bytes,
        };
    }

    if lines[0].len() > limits.max_bytes {
        return TruncationResult {
            content: String::new(),
            truncated: true,
            truncated_by: Some(TruncatedBy::Bytes),
            total_lines,
            total_bytes,
            output_lines: 0,
            output_bytes: 0,
            last_line_partial: false,
            first_line_exceeds_limit: true,
            max_lines: limits.max_lines,
            max_bytes: limits.max_bytes,
        };
    }

    let mut kept = 0usize;
    let mut kept_bytes = 0usize;
    let mut truncated_by = TruncatedBy::Lines;

    for (i, line) in lines.iter().take(limits.max_lines).enumerate() {
        // Joining newline counts against the budget for every line after the first
        let line_bytes = line.len() + usize::from(i > 0);
        if kept_bytes + line_bytes > limits.max_bytes {
            truncated_by = TruncatedBy::Bytes;
            break;
        }
        kept += 1;
        kept_bytes += line_bytes;
    }

    let content = lines[..kept].join("\n");
    let output_bytes = content.len();

    TruncationResult {
        content,
        truncated: true,
        truncated_by: Some(truncated_by),
        total_lines,
        total_bytes,
        output_lines: kept,
        output_bytes,
        last_line_partial: false,
        first_line_exceeds_limit: false,
        max_lines: limits.max_lines,
        max_bytes: limits.max_bytes,
    }
}

/// Human-readable byte size: `512B`, `1.5KB`, `2.0MB`
pub fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1}KB", bytes as f64 / KIB)
    } else {
        format!("{:.1}MB", bytes as f64 / (KIB * KIB))
    }
}
