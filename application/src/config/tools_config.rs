//! Tool configuration: credential and output budget.
//!
//! [`ToolsConfig`] is built once at startup (by the infrastructure config
//! loader) and handed to every tool. Tools never read the environment
//! themselves.

use kagi_domain::TruncationLimits;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable that carries the Kagi API key
pub const API_KEY_ENV: &str = "KAGI_API_KEY";

/// Kagi API key, redacted in `Debug` output
#[derive(Debug)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Wrap a raw key; blank keys are treated as absent
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(SecretString::new(trimmed.into())))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Configuration shared by all tools
#[derive(Debug, Default)]
pub struct ToolsConfig {
    /// API key; `None` makes every tool answer with a missing-credential error
    pub api_key: Option<ApiKey>,
    /// Output budget applied before returning text to the host
    pub limits: TruncationLimits,
}

impl ToolsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::new(key);
        self
    }

    pub fn with_limits(mut self, limits: TruncationLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
