//! Shared output handling for tool use cases.
//!
//! Both tools run their formatted text through the same budget: head
//! truncation, then spill of the untouched text to the [`OutputStore`] and a
//! trailing note telling the reader where the rest went.

use crate::ports::output_store::OutputStore;
use kagi_domain::{TruncationLimits, TruncationResult, format_size, truncate_head};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Text ready to hand back to the host, plus what happened to it
#[derive(Debug, Clone)]
pub(crate) struct BoundedOutput {
    pub text: String,
    /// Present only when the output was truncated
    pub truncation: Option<TruncationResult>,
    /// Present only when the full output was saved
    pub full_output_path: Option<PathBuf>,
}

/// Apply `limits` to `output`, spilling the full text when it does not fit.
pub(crate) fn bound_output(
    output: &str,
    limits: TruncationLimits,
    store: &dyn OutputStore,
    prefix: &str,
) -> BoundedOutput {
    let truncation = truncate_head(output, limits);
    if !truncation.truncated {
        return BoundedOutput {
            text: truncation.content,
            truncation: None,
            full_output_path: None,
        };
    }

    let mut text = truncation.content.clone();
    text.push_str(&format!(
        "\n\n[Output truncated: showing {} of {} lines ({} of {}).",
        truncation.output_lines,
        truncation.total_lines,
        format_size(truncation.output_bytes),
        format_size(truncation.total_bytes),
    ));

    let full_output_path = match store.save_full_output(prefix, output) {
        Ok(path) => {
            debug!(path = %path.display(), "Saved full tool output");
            text.push_str(&format!(" Full output saved to: {}]", path.display()));
            Some(path)
        }
        Err(e) => {
            warn!(error = %e, "Failed to save full tool output");
            text.push_str(&format!(" Full output could not be saved: {}]", e));
            None
        }
    };

    BoundedOutput {
        text,
        truncation: Some(truncation),
        full_output_path,
    }
}
