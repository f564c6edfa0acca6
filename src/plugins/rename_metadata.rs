//! Rename Streams Metadata
//!
//! ffmpeg command plugin: appends a `-metadata:s:<index> title=<title>` pair
//! to the command's output arguments for every video, audio and subtitle
//! stream still in the command.

use serde_json::json;

use super::Plugin;
use crate::host::{
    InputDetails, InputLoader, InputType, JobLog, OutputDetails, PluginArgs, PluginDetails,
    PluginOutput,
};
use crate::renamer::{
    rename_streams, RenameConfig, DEFAULT_AUDIO_FORMAT, DEFAULT_SUBTITLE_FORMAT,
    DEFAULT_VIDEO_FORMAT,
};
use crate::template::GrammarSelection;

pub const OUTPUT_CONTINUE: u32 = 1;

const NOT_INITIALISED: &str = "Error: FFmpeg command plugins not used correctly. Please use the \
     \"Begin Command\" plugin before using this plugin. Afterwards, use the \"Execute\" plugin \
     to execute the command.";

#[derive(Debug, Default, Clone, Copy)]
pub struct RenameStreamsMetadata {
    grammar: GrammarSelection,
}

impl RenameStreamsMetadata {
    pub fn new(grammar: GrammarSelection) -> Self {
        Self { grammar }
    }
}

impl Plugin for RenameStreamsMetadata {
    fn id(&self) -> &'static str {
        "ffmpegCommandRenameMetadata"
    }

    fn details(&self) -> PluginDetails {
        PluginDetails {
            id: self.id().to_string(),
            name: "Rename Streams Metadata".to_string(),
            description: "Set the title of each video, audio and subtitle stream from a \
                          format string filled in with that stream's properties."
                .to_string(),
            tags: "video".to_string(),
            border_color: "#6efefc".to_string(),
            requires_version: "2.11.01".to_string(),
            icon: String::new(),
            inputs: vec![
                InputDetails::dropdown(
                    "streamType",
                    "Stream Type",
                    InputType::String,
                    json!("all"),
                    &["all", "video", "audio", "subtitle"],
                    "Which streams get a new title.",
                ),
                InputDetails::text(
                    "videoFormat",
                    "Video Format",
                    DEFAULT_VIDEO_FORMAT,
                    "Title for video streams. {property} is replaced by the stream's \
                     value, e.g. {width}x{height} ({codec_name}).",
                ),
                InputDetails::text(
                    "audioFormat",
                    "Audio Format",
                    DEFAULT_AUDIO_FORMAT,
                    "Title for audio streams, e.g. {tags.language} {channel_layout} \
                     ({codec_name}).",
                ),
                InputDetails::text(
                    "subtitleFormat",
                    "Subtitle Format",
                    DEFAULT_SUBTITLE_FORMAT,
                    "Title for subtitle streams. {disposition.forced} renders as \"Forced\" \
                     on forced streams and as nothing otherwise.",
                ),
            ],
            outputs: vec![OutputDetails {
                number: OUTPUT_CONTINUE,
                tooltip: "Continue to next plugin".to_string(),
            }],
        }
    }

    fn run(
        &self,
        mut args: PluginArgs,
        loader: &dyn InputLoader,
        log: &mut dyn JobLog,
    ) -> PluginOutput {
        args.inputs = loader.load(std::mem::take(&mut args.inputs), &self.details());
        let config = RenameConfig::from_inputs(&args.inputs, self.grammar);
        if config.stream_type.is_none() {
            tracing::warn!(
                "{}: unknown stream type {:?}, nothing renamed",
                self.id(),
                args.inputs.string("streamType")
            );
        }

        let initialised = args
            .variables
            .ffmpeg_command
            .as_ref()
            .is_some_and(|command| command.init);
        if !initialised {
            tracing::error!("{}: ffmpeg command not initialised", self.id());
            log.log(NOT_INITIALISED);
            return PluginOutput::route(args, OUTPUT_CONTINUE);
        }

        if let Some(command) = args.variables.ffmpeg_command.as_mut() {
            let metadata = rename_streams(&command.streams, &config, log);
            tracing::debug!("{}: {} metadata arguments added", self.id(), metadata.len());
            command.overall_output_arguments.extend(metadata);
        }

        PluginOutput::route(args, OUTPUT_CONTINUE)
    }
}
