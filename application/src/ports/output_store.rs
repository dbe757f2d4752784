//! Output store port
//!
//! Where the full text of a truncated tool result is written.

use std::path::PathBuf;

/// Port for persisting full tool output that did not fit the budget.
///
/// Implementations must give every call its own fresh location so that
/// concurrent invocations never collide. Nothing is cleaned up afterwards.
pub trait OutputStore: Send + Sync {
    /// Write `content` verbatim and return the path of the created file.
    ///
    /// `prefix` identifies the tool (e.g. `pi-web-search-`).
    fn save_full_output(&self, prefix: &str, content: &str) -> std::io::Result<PathBuf>;
}
