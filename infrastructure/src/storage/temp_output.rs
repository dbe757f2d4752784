//! Temp-directory backed [`OutputStore`].

use kagi_application::OutputStore;
use std::path::PathBuf;
use tracing::debug;

/// File name written inside each spill directory
pub const OUTPUT_FILE_NAME: &str = "output.txt";

/// Writes each spilled output to `<root>/<prefix><random>/output.txt`.
///
/// Directories are kept after the process exits so the path handed back
/// to the caller stays readable.
#[derive(Debug, Clone, Default)]
pub struct TempOutputStore {
    root: Option<PathBuf>,
}

impl TempOutputStore {
    /// Store under the system temp directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Store under `root` instead of the system temp directory
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

impl OutputStore for TempOutputStore {
    fn save_full_output(&self, prefix: &str, content: &str) -> std::io::Result<PathBuf> {
        let root = self.root.clone().unwrap_or_else(std::env::temp_dir);
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir_in(root)?
            .keep();

        let path = dir.join(OUTPUT_FILE_NAME);
        std::fs::write(&path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "Saved full output");
        Ok(path)
    }
}
