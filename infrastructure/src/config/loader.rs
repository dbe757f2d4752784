//! Configuration file loader with multi-source merging

use super::file_config::{ConfigValidationError, FileConfig};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use kagi_application::API_KEY_ENV;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["kagi-tools.toml", ".kagi-tools.toml"];

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `KAGI_API_KEY` environment variable (for `kagi.api_key`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./kagi-tools.toml` or `./.kagi-tools.toml`
    /// 4. Global: `<config dir>/kagi-tools/config.toml`
    /// 5. Default values
    ///
    /// With `no_config`, only 1 and 5 apply.
    pub fn load(config_path: Option<&PathBuf>, no_config: bool) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if !no_config {
            if let Some(global_path) = Self::global_config_path()
                && global_path.exists()
            {
                figment = figment.merge(Toml::file(&global_path));
            }

            if let Some(path) = Self::project_config_path() {
                figment = figment.merge(Toml::file(&path));
            }

            if let Some(path) = config_path {
                figment = figment.merge(Toml::file(path));
            }
        }

        // Taken verbatim: a key that looks like a number or bool is still a string
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            figment = figment.merge(Serialized::default("kagi.api_key", key));
        }

        let config: FileConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/kagi-tools/config.toml`, falling back to
    /// `~/.config/kagi-tools/config.toml`
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("kagi-tools").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        let env_state = if std::env::var_os(API_KEY_ENV).is_some() {
            "[FOUND]"
        } else {
            "[     ]"
        };
        println!("  {} Env:     {}", env_state, API_KEY_ENV);

        if let Some(path) = config_path {
            println!("  {} Flag:    {}", found(path), path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./kagi-tools.toml or ./.kagi-tools.toml");
        }

        if let Some(path) = Self::global_config_path() {
            println!("  {} Global:  {}", found(&path), path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

fn found(path: &Path) -> &'static str {
    if path.exists() { "[FOUND]" } else { "[     ]" }
}
