//! Host engine contract
//!
//! This module models what the flow engine provides around a plugin call:
//! - Plugin arguments and routing output (file object, variables, inputs)
//! - Plugin schema declarations and default-value loading
//! - The job log sink

pub mod args;
pub mod details;
pub mod inputs;
pub mod log;

pub use args::{FfmpegCommand, FileObject, PluginArgs, PluginOutput, ProbeData, Variables};
pub use details::{
    DefaultValueLoader, InputDetails, InputLoader, InputType, InputUi, OutputDetails,
    PluginDetails,
};
pub use inputs::PluginInputs;
pub use log::{JobLog, MemoryJobLog, TracingJobLog};
