//! Configuration file support
//!
//! Loads application configuration from TOML files. Every section is
//! optional; missing sections and fields take the built-in defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, LoggingConfig, RenamerConfig};
use crate::error::{PluginError, Result};
use crate::host::PluginInputs;
use crate::plugins::all_plugins;
use crate::template::GrammarSelection;

/// Configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Logging settings
    pub logging: Option<LoggingSettings>,
    /// Renamer settings
    pub renamer: Option<RenamerSettings>,
    /// Per-plugin default input overrides, keyed by plugin id
    pub defaults: Option<BTreeMap<String, PluginInputs>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamerSettings {
    /// Template grammar (auto, brace, token_list)
    pub grammar: Option<GrammarSelection>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
            renamer: Some(RenamerSettings {
                grammar: Some(GrammarSelection::Auto),
            }),
            defaults: Some(BTreeMap::new()),
        }
    }

    /// Check that every default override names a known plugin
    pub fn validate(&self) -> Result<()> {
        let Some(defaults) = &self.defaults else {
            return Ok(());
        };
        let plugins = all_plugins(GrammarSelection::Auto);
        for id in defaults.keys() {
            if !plugins.iter().any(|p| p.id() == id) {
                return Err(PluginError::Config(format!(
                    "defaults given for unknown plugin {}",
                    id
                )));
            }
        }
        Ok(())
    }

    /// Convert to AppConfig
    pub fn into_app_config(self) -> AppConfig {
        let logging_default = LoggingConfig::default();
        AppConfig {
            logging: self
                .logging
                .map(|l| LoggingConfig {
                    level: l.level,
                    format: l.format.unwrap_or(logging_default.format.clone()),
                })
                .unwrap_or(logging_default),
            renamer: RenamerConfig {
                grammar: self
                    .renamer
                    .and_then(|r| r.grammar)
                    .unwrap_or_default(),
            },
            defaults: self.defaults.unwrap_or_default(),
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
