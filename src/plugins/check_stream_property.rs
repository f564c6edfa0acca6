//! Check Detailed Stream Property

use serde_json::json;

use super::Plugin;
use crate::checker::{evaluate, FilterConfig};
use crate::host::{
    InputDetails, InputLoader, InputType, JobLog, OutputDetails, PluginArgs, PluginDetails,
    PluginOutput,
};

/// File has a matching stream property
pub const OUTPUT_MATCH: u32 = 1;
/// File does not have a matching stream property (or the options are invalid)
pub const OUTPUT_NO_MATCH: u32 = 2;

/// Routes a file by one property of its (filtered) streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckStreamProperty;

impl Plugin for CheckStreamProperty {
    fn id(&self) -> &'static str {
        "checkDetailedStreamProperty"
    }

    fn details(&self) -> PluginDetails {
        PluginDetails {
            id: self.id().to_string(),
            name: "Check Detailed Stream Property".to_string(),
            description: "Route files by audio/video/subtitle stream characteristics (codec, \
                          language, resolution, channels, ...) taken from the FFprobe data \
                          collected for the file."
                .to_string(),
            tags: String::new(),
            border_color: "orange".to_string(),
            requires_version: "2.11.01".to_string(),
            icon: "faQuestion".to_string(),
            inputs: vec![
                InputDetails::dropdown(
                    "streamType",
                    "Stream Type",
                    InputType::String,
                    json!("all"),
                    &["all", "video", "audio", "subtitle", "data"],
                    "Which streams to check. \"all\" checks every stream; the other \
                     choices only look at streams of that codec_type.",
                ),
                InputDetails::switch(
                    "enableChannel",
                    "Enable audio channel check",
                    false,
                    "Only check audio streams with the channel count below. Applies \
                     when Stream Type is \"audio\".",
                ),
                InputDetails::dropdown(
                    "audioChannelCount",
                    "Audio channel to check",
                    InputType::Number,
                    json!(2),
                    &["1", "2", "3", "6", "8"],
                    "Channel count an audio stream must have to be checked.",
                ),
                InputDetails::switch(
                    "enableLanguage",
                    "Enable Language check",
                    false,
                    "Only check streams whose tags.language is one of the languages below.",
                ),
                InputDetails::text(
                    "languageTag",
                    "Language to check",
                    "eng",
                    "Comma-separated language tags, e.g. \"eng\" or \"eng,jpn\" (either \
                     one matches). Case is ignored.",
                ),
                InputDetails::text(
                    "propertyToCheck",
                    "Property To Check",
                    "codec_name",
                    "Stream property to test, e.g. codec_name, width, height, channels, \
                     sample_rate, bit_rate, tags.language, codec_type. Nested properties \
                     use dots.",
                ),
                InputDetails::text(
                    "valuesToMatch",
                    "Values To Match",
                    "aac",
                    "Comma-separated values, e.g. \"aac,mp3,ac3\" or \"1920\". Case is ignored.",
                ),
                InputDetails::dropdown(
                    "condition",
                    "Condition",
                    InputType::String,
                    json!("includes"),
                    &["includes", "not_includes", "equals", "not_equals"],
                    "includes: some stream contains one of the values. \
                     not_includes: no stream contains any of the values. \
                     equals: some stream is exactly one of the values. \
                     not_equals: no stream is exactly any of the values.",
                ),
            ],
            outputs: vec![
                OutputDetails {
                    number: OUTPUT_MATCH,
                    tooltip: "File has matching stream property".to_string(),
                },
                OutputDetails {
                    number: OUTPUT_NO_MATCH,
                    tooltip: "File does not have matching stream property".to_string(),
                },
            ],
        }
    }

    fn run(
        &self,
        mut args: PluginArgs,
        loader: &dyn InputLoader,
        log: &mut dyn JobLog,
    ) -> PluginOutput {
        args.inputs = loader.load(std::mem::take(&mut args.inputs), &self.details());

        let config = match FilterConfig::from_inputs(&args.inputs) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}: {}", self.id(), e);
                log.log(&e.to_string());
                return PluginOutput::route(args, OUTPUT_NO_MATCH);
            }
        };
        tracing::debug!("{}: {:?}", self.id(), config);

        let matched = match &args.input_file_obj.ffprobe_data.streams {
            Some(streams) => evaluate(streams, &config, log),
            None => {
                tracing::debug!("{}: file has no probed streams", self.id());
                false
            }
        };

        let output = if matched { OUTPUT_MATCH } else { OUTPUT_NO_MATCH };
        log.log(&format!(
            "File routed to output {} - {} matching stream property",
            output,
            if matched { "has" } else { "does not have" }
        ));
        tracing::info!("{}: routed to output {}", self.id(), output);

        PluginOutput::route(args, output)
    }
}
