//! Infrastructure layer for kagi-tools
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod kagi;
pub mod storage;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileKagiConfig, FileOutputConfig,
};
pub use kagi::{DEFAULT_BASE_URL, KagiClient, KagiClientError};
pub use storage::TempOutputStore;
pub use tools::JsonSchemaToolConverter;
