//! Test fixtures for integration tests
//!
//! Engine-shaped file objects and ffmpeg commands built from a sample
//! H.264 matroska file with five audio tracks, one subtitle and two font
//! attachments, so plugins can be driven without real media.

use serde_json::{json, Value};

use crate::host::{FfmpegCommand, FileObject, PluginArgs, PluginInputs, Variables};
use crate::probe::StreamRecord;

fn audio(index: u64, codec_name: &str, language: &str) -> Value {
    let default = if index == 1 { 1 } else { 0 };
    json!({
        "index": index,
        "codec_name": codec_name,
        "codec_type": "audio",
        "sample_fmt": "fltp",
        "sample_rate": "48000",
        "channels": 2,
        "channel_layout": "stereo",
        "disposition": { "default": default, "forced": 0 },
        "tags": { "language": language }
    })
}

fn attachment(index: u64, filename: &str) -> Value {
    json!({
        "index": index,
        "codec_name": "ttf",
        "codec_long_name": "TrueType font",
        "codec_type": "attachment",
        "codec_tag_string": "[0][0][0][0]",
        "time_base": "1/90000",
        "disposition": { "default": 0, "forced": 0, "attached_pic": 0 },
        "tags": { "filename": filename, "mimetype": "application/x-truetype-font" }
    })
}

/// Probed streams of the sample file: video, five audio, one subtitle
pub fn sample_streams() -> Vec<Value> {
    vec![
        json!({
            "index": 0,
            "codec_name": "h264",
            "codec_long_name": "H.264 / AVC / MPEG-4 AVC / MPEG-4 part 10",
            "profile": "High",
            "codec_type": "video",
            "width": 1918,
            "height": 1080,
            "coded_width": 1920,
            "coded_height": 1088,
            "sample_aspect_ratio": "1:1",
            "display_aspect_ratio": "959:540",
            "pix_fmt": "yuv420p",
            "level": 40,
            "r_frame_rate": "24000/1001",
            "disposition": { "default": 1, "forced": 0 },
            "tags": { "language": "eng" }
        }),
        audio(1, "flac", "eng"),
        audio(2, "ac3", "eng"),
        audio(3, "eac3", "eng"),
        audio(4, "aac", "fre"),
        audio(5, "aac", "eng"),
        json!({
            "index": 6,
            "codec_name": "subrip",
            "codec_type": "subtitle",
            "disposition": { "default": 0, "forced": 0 },
            "tags": { "language": "fre" }
        }),
    ]
}

/// The two font attachments that usually trail the sample's streams
pub fn attachment_streams() -> Vec<Value> {
    vec![attachment(7, "Openc.TTF"), attachment(8, "msmincho.ttc")]
}

/// File object for the sample, as the engine hands it over
pub fn sample_file() -> FileObject {
    serde_json::from_value(json!({
        "_id": "/media/sampleH264_2.mkv",
        "file": "/media/sampleH264_2.mkv",
        "container": "mkv",
        "fileMedium": "video",
        "ffProbeData": {
            "streams": sample_streams(),
            "format": { "format_name": "matroska,webm", "nb_streams": 7 }
        }
    }))
    .unwrap()
}

/// File object with arbitrary probed streams
pub fn file_with_streams(streams: Vec<Value>) -> FileObject {
    let mut file = sample_file();
    file.ffprobe_data.streams = Some(streams.into_iter().map(StreamRecord::from_value).collect());
    file
}

/// An initialised ffmpeg command mapping every given stream
pub fn command_for(streams: Vec<Value>) -> FfmpegCommand {
    let streams = streams
        .into_iter()
        .enumerate()
        .map(|(position, mut stream)| {
            let index = stream["index"].clone();
            if let Value::Object(map) = &mut stream {
                map.insert("removed".to_string(), json!(false));
                map.insert("forceEncoding".to_string(), json!(false));
                map.insert("inputArgs".to_string(), json!([]));
                map.insert("outputArgs".to_string(), json!([]));
                map.insert("mapArgs".to_string(), json!(["-map", format!("0:{}", index)]));
                map.insert("typeIndex".to_string(), json!(position));
            }
            StreamRecord::from_value(stream)
        })
        .collect();

    FfmpegCommand {
        init: true,
        streams,
        container: "mkv".to_string(),
        ..Default::default()
    }
}

/// Plugin arguments for the sample file, with a command built from its streams
pub fn sample_args(inputs: PluginInputs) -> PluginArgs {
    PluginArgs {
        inputs,
        input_file_obj: sample_file(),
        variables: Variables {
            ffmpeg_command: Some(command_for(sample_streams())),
            ..Default::default()
        },
    }
}
