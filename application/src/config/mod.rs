//! Application configuration types

pub mod tools_config;

pub use tools_config::{API_KEY_ENV, ApiKey, ToolsConfig};
