//! Configuration file loading for kagi-tools
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `KAGI_API_KEY` environment variable
//! 2. `--config <path>` specified file
//! 3. Project root: `./kagi-tools.toml` or `./.kagi-tools.toml`
//! 4. Global: `~/.config/kagi-tools/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileKagiConfig, FileOutputConfig};
pub use loader::{ConfigError, ConfigLoader};
