//! Flow Stream Plugins
//!
//! Two media-pipeline flow plugins operating on ffprobe stream metadata:
//! - `checkDetailedStreamProperty` routes a file by a property of its streams
//! - `ffmpegCommandRenameMetadata` adds per-stream title metadata to an
//!   ffmpeg command
//!
//! Both are pure functions of the engine state they are handed; all I/O
//! lives in the host glue (`config`, `config_file` and the CLI binary).

pub mod checker;
pub mod config;
pub mod config_file;
pub mod error;
pub mod host;
pub mod plugins;
pub mod probe;
pub mod renamer;
pub mod template;

#[cfg(test)]
mod integration;

pub use config::AppConfig;
pub use error::{PluginError, Result};
pub use host::{JobLog, PluginArgs, PluginOutput};
pub use plugins::{all_plugins, find_plugin, Plugin};
