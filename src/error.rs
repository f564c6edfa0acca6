use thiserror::Error;

/// Main error type for the plugin host glue.
///
/// The plugins themselves never fail; these errors come from loading
/// arguments and configuration around them.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Plugin not found: {0}")]
    UnknownPlugin(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PluginError>;
