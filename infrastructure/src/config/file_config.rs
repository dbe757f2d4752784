//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! ```toml
//! [kagi]
//! api_key = "..."                     # KAGI_API_KEY overrides this
//! base_url = "https://kagi.com/api/v0/"
//! timeout_seconds = 30                # unset: HTTP client defaults
//!
//! [output]
//! color = true
//! max_lines = 2000
//! max_bytes = 51200
//! ```

use crate::kagi::DEFAULT_BASE_URL;
use kagi_application::ToolsConfig;
use kagi_domain::{DEFAULT_MAX_BYTES, DEFAULT_MAX_LINES, TruncationLimits};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("kagi.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("kagi.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),

    #[error("output.max_lines cannot be 0")]
    ZeroMaxLines,

    #[error("output.max_bytes cannot be 0")]
    ZeroMaxBytes,
}

/// Raw `[kagi]` section
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKagiConfig {
    /// API key; the `KAGI_API_KEY` environment variable takes precedence
    pub api_key: Option<String>,
    /// API root the endpoints are resolved against
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for FileKagiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl fmt::Debug for FileKagiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileKagiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl FileKagiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Raw `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Line budget for tool output
    pub max_lines: usize,
    /// Byte budget for tool output
    pub max_bytes: usize,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            max_lines: DEFAULT_MAX_LINES,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub kagi: FileKagiConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.kagi.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if let Err(e) = url::Url::parse(&self.kagi.base_url) {
            return Err(ConfigValidationError::InvalidBaseUrl(format!(
                "{} ({})",
                self.kagi.base_url, e
            )));
        }
        if self.output.max_lines == 0 {
            return Err(ConfigValidationError::ZeroMaxLines);
        }
        if self.output.max_bytes == 0 {
            return Err(ConfigValidationError::ZeroMaxBytes);
        }
        Ok(())
    }

    /// Validated truncation budget
    pub fn limits(&self) -> Result<TruncationLimits, ConfigValidationError> {
        TruncationLimits::new(self.output.max_lines, self.output.max_bytes).map_err(|_| {
            if self.output.max_lines == 0 {
                ConfigValidationError::ZeroMaxLines
            } else {
                ConfigValidationError::ZeroMaxBytes
            }
        })
    }

    /// Build the configuration handed to the tools
    pub fn to_tools_config(&self) -> Result<ToolsConfig, ConfigValidationError> {
        self.validate()?;
        let mut config = ToolsConfig::new().with_limits(self.limits()?);
        if let Some(key) = &self.kagi.api_key {
            config = config.with_api_key(key.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.kagi.api_key.is_none());
        assert_eq!(config.kagi.base_url, "https://kagi.com/api/v0/");
        assert!(config.kagi.timeout().is_none());
        assert!(config.output.color);
        assert_eq!(config.output.max_lines, 2000);
        assert_eq!(config.output.max_bytes, 50 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[kagi]
timeout_seconds = 15

[output]
max_lines = 100
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.kagi.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.kagi.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output.max_lines, 100);
        assert_eq!(config.output.max_bytes, DEFAULT_MAX_BYTES);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.kagi.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = FileConfig::default();
        config.kagi.base_url = "kagi dot com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = FileConfig::default();
        config.output.max_bytes = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroMaxBytes));
        assert!(config.to_tools_config().is_err());

        config.output.max_bytes = 10;
        config.output.max_lines = 0;
        assert_eq!(config.limits().unwrap_err(), ConfigValidationError::ZeroMaxLines);
    }

    #[test]
    fn test_to_tools_config() {
        let mut config = FileConfig::default();
        config.kagi.api_key = Some("secret".to_string());
        config.output.max_lines = 10;

        let tools = config.to_tools_config().unwrap();
        assert_eq!(tools.api_key.as_ref().unwrap().expose(), "secret");
        assert_eq!(tools.limits.max_lines, 10);
        assert_eq!(tools.limits.max_bytes, DEFAULT_MAX_BYTES);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = FileConfig::default();
        config.kagi.api_key = Some("super-secret".to_string());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
