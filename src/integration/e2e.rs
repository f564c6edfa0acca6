//! End-to-end integration tests
//!
//! Drives both plugins through the `Plugin` trait the way the engine does:
//! engine-shaped arguments in, routing decision and updated state out.

use crate::config::AppConfig;
use crate::host::{MemoryJobLog, PluginArgs, PluginInputs, PluginOutput};
use crate::plugins::{find_plugin, Plugin};
use crate::template::GrammarSelection;

/// Run a plugin by id with the configured default loader
pub fn run_plugin(
    id: &str,
    config: &AppConfig,
    args: PluginArgs,
) -> (PluginOutput, MemoryJobLog) {
    let plugin: Box<dyn Plugin> = match find_plugin(id, config.renamer.grammar) {
        Some(plugin) => plugin,
        None => panic!("plugin {} not registered", id),
    };
    let mut log = MemoryJobLog::new();
    let output = plugin.run(args, &config.default_loader(), &mut log);
    (output, log)
}

/// Output arguments of the command carried in the plugin's variables
pub fn output_arguments(output: &PluginOutput) -> Vec<String> {
    output
        .variables
        .ffmpeg_command
        .as_ref()
        .map(|c| c.overall_output_arguments.clone())
        .unwrap_or_default()
}

pub fn checker_inputs(pairs: &[(&str, &str)]) -> PluginInputs {
    pairs
        .iter()
        .fold(PluginInputs::new(), |inputs, (k, v)| inputs.with(*k, *v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::fixtures::{
        attachment_streams, command_for, file_with_streams, sample_args,
    };
    use serde_json::json;

    const CHECKER: &str = "checkDetailedStreamProperty";
    const RENAMER: &str = "ffmpegCommandRenameMetadata";

    fn check(
        inputs: PluginInputs,
        streams: Vec<serde_json::Value>,
    ) -> (PluginOutput, MemoryJobLog) {
        let args = PluginArgs {
            inputs,
            input_file_obj: file_with_streams(streams),
            ..Default::default()
        };
        run_plugin(CHECKER, &AppConfig::default(), args)
    }

    #[test]
    fn test_rename_single_hevc_stream() {
        let mut args = sample_args(PluginInputs::new());
        args.variables.ffmpeg_command = Some(command_for(vec![json!({
            "index": 0, "codec_type": "video", "codec_name": "hevc",
            "width": 1920, "height": 1080, "display_aspect_ratio": "16:9"
        })]));
        let (out, log) = run_plugin(RENAMER, &AppConfig::default(), args);
        assert_eq!(output_arguments(&out), vec!["-metadata:s:0", "title=1920x1080 16:9 (hevc)"]);
        assert!(log.contains("Stream: 0 (video) renamed \"1920x1080 16:9 (hevc)\""));
    }

    #[test]
    fn test_checker_audio_codec_includes() {
        let inputs = checker_inputs(&[
            ("streamType", "audio"),
            ("propertyToCheck", "codec_name"),
            ("valuesToMatch", "aac,mp3"),
            ("condition", "includes"),
        ]);
        let aac = json!({ "index": 1, "codec_type": "audio", "codec_name": "aac" });
        let flac = json!({ "index": 1, "codec_type": "audio", "codec_name": "flac" });

        let (out, log) = check(inputs.clone(), vec![aac]);
        assert_eq!(out.output_number, 1);
        assert!(log.contains("Stream 1: codec_name \"aac\" includes \"aac\""));

        let (out, log) = check(inputs, vec![flac]);
        assert_eq!(out.output_number, 2);
        assert!(log.contains("File routed to output 2 - does not have matching stream property"));
    }

    #[test]
    fn test_checker_not_equals_requires_every_stream() {
        let inputs = checker_inputs(&[
            ("streamType", "video"),
            ("propertyToCheck", "width"),
            ("valuesToMatch", "1920"),
            ("condition", "not_equals"),
        ]);
        let (out, log) = check(
            inputs,
            vec![
                json!({ "index": 0, "codec_type": "video", "width": 1920 }),
                json!({ "index": 1, "codec_type": "video", "width": 1280 }),
            ],
        );
        assert_eq!(out.output_number, 2);
        assert!(log.contains("Stream 0: width \"1920\" equals \"1920\" - condition fails"));
    }

    #[test]
    fn test_removed_stream_never_renamed() {
        let mut args = sample_args(PluginInputs::new().with("videoFormat", "Main Feature"));
        let mut command = command_for(vec![json!({
            "index": 0, "codec_type": "video", "codec_name": "h264"
        })]);
        command.streams[0].0.insert("removed".to_string(), json!(true));
        args.variables.ffmpeg_command = Some(command);

        let (out, log) = run_plugin(RENAMER, &AppConfig::default(), args);
        assert_eq!(out.output_number, 1);
        assert!(output_arguments(&out).is_empty());
        assert!(log.lines().is_empty());
    }

    #[test]
    fn test_rename_sample_file_defaults() {
        let args = sample_args(PluginInputs::new());
        let (out, log) = run_plugin(RENAMER, &AppConfig::default(), args);
        assert_eq!(out.output_number, 1);

        for line in [
            "Stream: 0 (video) renamed \"1918x1080 959:540 (h264)\"",
            "Stream: 1 (audio) renamed \"eng stereo (flac)\"",
            "Stream: 2 (audio) renamed \"eng stereo (ac3)\"",
            "Stream: 3 (audio) renamed \"eng stereo (eac3)\"",
            "Stream: 4 (audio) renamed \"fre stereo (aac)\"",
            "Stream: 5 (audio) renamed \"eng stereo (aac)\"",
            "Stream: 6 (subtitle) renamed \"fre (subrip)\"",
        ] {
            assert!(log.contains(line), "missing log line: {}", line);
        }

        let args = output_arguments(&out);
        assert_eq!(args.len(), 14);
        assert_eq!(args[0], "-metadata:s:0");
        assert_eq!(args[13], "title=fre (subrip)");
    }

    #[test]
    fn test_rename_skips_attachments() {
        let mut args = sample_args(PluginInputs::new());
        args.variables.ffmpeg_command = Some(command_for(attachment_streams()));

        let (out, log) = run_plugin(RENAMER, &AppConfig::default(), args);
        assert_eq!(out.output_number, 1);
        assert!(output_arguments(&out).is_empty());
        assert!(log.contains("Stream: 7 (attachment) skipped"));
        assert!(log.contains("Stream: 8 (attachment) skipped"));
    }

    #[test]
    fn test_rename_audio_only_with_token_grammar() {
        let mut config = AppConfig::default();
        config.renamer.grammar = GrammarSelection::TokenList;
        let inputs = PluginInputs::new()
            .with("streamType", "audio")
            .with("audioFormat", "tags.language,channels,'ch',codec_name");

        let (out, _) = run_plugin(RENAMER, &config, sample_args(inputs));
        let args = output_arguments(&out);
        assert_eq!(args.len(), 10);
        assert_eq!(args[1], "title=ENG 2 ch FLAC");
        assert_eq!(args[7], "title=FRE 2 ch AAC");
    }

    #[test]
    fn test_configured_defaults_apply() {
        let mut config = AppConfig::default();
        config.defaults.insert(
            RENAMER.to_string(),
            PluginInputs::new().with("streamType", "subtitle"),
        );
        let (out, _) = run_plugin(RENAMER, &config, sample_args(PluginInputs::new()));
        assert_eq!(
            output_arguments(&out),
            vec!["-metadata:s:6", "title=fre (subrip)"]
        );
    }

    #[test]
    fn test_checker_sample_language_and_channels() {
        let inputs = checker_inputs(&[
            ("streamType", "audio"),
            ("enableChannel", "true"),
            ("audioChannelCount", "2"),
            ("enableLanguage", "true"),
            ("languageTag", "FRE"),
            ("propertyToCheck", "codec_name"),
            ("valuesToMatch", "aac"),
            ("condition", "equals"),
        ]);
        let args = sample_args(inputs);
        let (out, log) = run_plugin(CHECKER, &AppConfig::default(), args);
        assert_eq!(out.output_number, 1);
        assert!(log.contains("Stream 4: codec_name \"aac\" equals \"aac\""));
    }

    #[test]
    fn test_checker_no_six_channel_audio() {
        let inputs = checker_inputs(&[
            ("streamType", "audio"),
            ("enableChannel", "true"),
            ("audioChannelCount", "6"),
        ]);
        let (out, log) = run_plugin(CHECKER, &AppConfig::default(), sample_args(inputs));
        assert_eq!(out.output_number, 2);
        assert!(log.contains("No 6ch audio streams found in file"));
    }

    #[test]
    fn test_checker_absent_property_satisfies_negative_condition() {
        let inputs = checker_inputs(&[
            ("streamType", "subtitle"),
            ("propertyToCheck", "channels"),
            ("valuesToMatch", "2"),
            ("condition", "not_includes"),
        ]);
        let (out, log) = run_plugin(CHECKER, &AppConfig::default(), sample_args(inputs));
        assert_eq!(out.output_number, 1);
        assert!(log.contains("Stream 6: channels not found"));
    }

    #[test]
    fn test_checker_untagged_streams_fail_language_filter() {
        let inputs = checker_inputs(&[("enableLanguage", "true"), ("languageTag", "eng")]);
        let (out, log) = check(
            inputs,
            vec![json!({ "index": 0, "codec_type": "audio", "codec_name": "aac" })],
        );
        assert_eq!(out.output_number, 2);
        assert!(log.contains("No eng streams found in file"));
    }

    #[test]
    fn test_checker_from_engine_json() {
        let args: PluginArgs = serde_json::from_value(json!({
            "inputs": {
                "streamType": "video",
                "propertyToCheck": "tags.language",
                "valuesToMatch": "ENG",
                "condition": "includes"
            },
            "inputFileObj": {
                "_id": "/media/x.mkv",
                "ffProbeData": { "streams": [
                    { "index": 0, "codec_type": "video", "tags": { "language": "eng" } }
                ] }
            },
            "variables": { "flowFailed": false, "user": {} }
        }))
        .unwrap();
        let (out, _) = run_plugin(CHECKER, &AppConfig::default(), args);
        assert_eq!(out.output_number, 1);
        assert_eq!(out.output_file_obj.id.as_deref(), Some("/media/x.mkv"));
    }
}
