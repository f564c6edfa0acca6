//! Application configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::host::{DefaultValueLoader, PluginInputs};
use crate::template::GrammarSelection;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset
    pub level: String,

    /// Output format (pretty, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// `EnvFilter` directives for this crate and the binary
    pub fn filter(&self) -> String {
        format!(
            "flow_stream_plugins={},flow_plugins={}",
            self.level, self.level
        )
    }
}

/// Renamer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerConfig {
    /// Template grammar for title formats
    pub grammar: GrammarSelection,
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,

    pub renamer: RenamerConfig,

    /// Per-plugin default input overrides, keyed by plugin id
    pub defaults: BTreeMap<String, PluginInputs>,
}

impl AppConfig {
    /// Input loader honouring the configured default overrides
    pub fn default_loader(&self) -> DefaultValueLoader {
        DefaultValueLoader::with_overrides(self.defaults.clone())
    }
}
