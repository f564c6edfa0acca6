//! Engine state passed into and out of a plugin call
//!
//! Field names follow the engine's camelCase JSON. Keys the plugins do not
//! know about are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::inputs::PluginInputs;
use crate::probe::StreamRecord;

/// The file being processed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileObject {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(rename = "ffProbeData", default)]
    pub ffprobe_data: ProbeData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// ffprobe output attached to the file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streams: Option<Vec<StreamRecord>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The command being assembled by the ffmpeg command plugins
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FfmpegCommand {
    pub init: bool,
    pub input_files: Vec<String>,
    pub streams: Vec<StreamRecord>,
    pub container: String,
    pub hardware_decoding: bool,
    pub should_process: bool,
    pub overall_input_arguments: Vec<String>,
    /// Spelled `overallOuputArguments` by the engine.
    #[serde(rename = "overallOuputArguments")]
    pub overall_output_arguments: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Flow variables shared between plugins of one job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ffmpeg_command: Option<FfmpegCommand>,
    pub flow_failed: bool,
    pub user: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Everything a plugin receives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginArgs {
    #[serde(default)]
    pub inputs: PluginInputs,
    #[serde(default)]
    pub input_file_obj: FileObject,
    #[serde(default)]
    pub variables: Variables,
}

/// Routing decision plus the (possibly updated) state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOutput {
    pub output_file_obj: FileObject,
    pub output_number: u32,
    pub variables: Variables,
}

impl PluginOutput {
    /// Hand the file and variables on to `output_number` unchanged
    pub fn route(args: PluginArgs, output_number: u32) -> Self {
        Self {
            output_file_obj: args.input_file_obj,
            output_number,
            variables: args.variables,
        }
    }
}
