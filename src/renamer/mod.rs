//! Stream metadata renamer
//!
//! Builds `-metadata:s:<index> title=<title>` argument pairs for the video,
//! audio and subtitle streams of an ffmpeg command:
//! - Streams already removed from the command are skipped
//! - Other stream categories (attachments, data) are skipped and logged
//! - Empty titles produce no arguments

use crate::host::{JobLog, PluginInputs};
use crate::probe::{CodecType, StreamRecord};
use crate::template::GrammarSelection;

pub const DEFAULT_VIDEO_FORMAT: &str = "{width}x{height} {display_aspect_ratio} ({codec_name})";
pub const DEFAULT_AUDIO_FORMAT: &str = "{tags.language} {channel_layout} ({codec_name})";
pub const DEFAULT_SUBTITLE_FORMAT: &str = "{tags.language} {disposition.forced} ({codec_name})";

/// Which stream categories get renamed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameStreamType {
    All,
    Video,
    Audio,
    Subtitle,
}

impl RenameStreamType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(RenameStreamType::All),
            "video" => Some(RenameStreamType::Video),
            "audio" => Some(RenameStreamType::Audio),
            "subtitle" => Some(RenameStreamType::Subtitle),
            _ => None,
        }
    }

    pub fn selects(&self, codec_type: &CodecType) -> bool {
        match self {
            RenameStreamType::All => true,
            RenameStreamType::Video => *codec_type == CodecType::Video,
            RenameStreamType::Audio => *codec_type == CodecType::Audio,
            RenameStreamType::Subtitle => *codec_type == CodecType::Subtitle,
        }
    }
}

/// One format string per renameable category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFormats {
    pub video: String,
    pub audio: String,
    pub subtitle: String,
}

impl Default for TitleFormats {
    fn default() -> Self {
        Self {
            video: DEFAULT_VIDEO_FORMAT.to_string(),
            audio: DEFAULT_AUDIO_FORMAT.to_string(),
            subtitle: DEFAULT_SUBTITLE_FORMAT.to_string(),
        }
    }
}

impl TitleFormats {
    /// Format for a category; `None` for categories that are never renamed
    pub fn for_type(&self, codec_type: &CodecType) -> Option<&str> {
        match codec_type {
            CodecType::Video => Some(self.video.as_str()),
            CodecType::Audio => Some(self.audio.as_str()),
            CodecType::Subtitle => Some(self.subtitle.as_str()),
            _ => None,
        }
    }
}

/// Renamer settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RenameConfig {
    /// `None` when the configured type is not recognised; nothing is renamed.
    pub stream_type: Option<RenameStreamType>,
    pub formats: TitleFormats,
    pub grammar: GrammarSelection,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            stream_type: Some(RenameStreamType::All),
            formats: TitleFormats::default(),
            grammar: GrammarSelection::default(),
        }
    }
}

impl RenameConfig {
    /// Build from the renamer's inputs (`streamType`, `videoFormat`,
    /// `audioFormat`, `subtitleFormat`).
    pub fn from_inputs(inputs: &PluginInputs, grammar: GrammarSelection) -> Self {
        Self {
            stream_type: RenameStreamType::parse(inputs.string("streamType").trim()),
            formats: TitleFormats {
                video: inputs.string("videoFormat"),
                audio: inputs.string("audioFormat"),
                subtitle: inputs.string("subtitleFormat"),
            },
            grammar,
        }
    }
}

/// Render the title for one stream, if it is selected.
///
/// Returns `None` for unselected categories and `Some("")` when every part
/// of the format came out empty.
pub fn stream_title(
    stream: &StreamRecord,
    config: &RenameConfig,
    log: &mut dyn JobLog,
) -> Option<String> {
    let codec_type = stream.codec_type();
    let format = config.formats.for_type(&codec_type)?;
    if !config.stream_type.is_some_and(|t| t.selects(&codec_type)) {
        return None;
    }
    let grammar = config.grammar.grammar_for(format, stream);
    Some(grammar.render(format, stream, log))
}

/// Metadata arguments for all streams, in stream order
pub fn rename_streams(
    streams: &[StreamRecord],
    config: &RenameConfig,
    log: &mut dyn JobLog,
) -> Vec<String> {
    let mut args = Vec::new();

    for stream in streams {
        let index = stream.index_label();
        if stream.is_removed() {
            tracing::debug!("stream {} removed from command, not renaming", index);
            continue;
        }

        let codec_type = stream.codec_type();
        if config.formats.for_type(&codec_type).is_none() {
            log.log(&format!("Stream: {} ({}) skipped", index, codec_type));
            continue;
        }

        match stream_title(stream, config, log) {
            Some(title) if !title.is_empty() => {
                args.push(format!("-metadata:s:{}", index));
                args.push(format!("title={}", title));
                log.log(&format!(
                    "Stream: {} ({}) renamed \"{}\"",
                    index, codec_type, title
                ));
            }
            Some(_) => tracing::debug!("stream {} rendered an empty title", index),
            None => {}
        }
    }

    args
}
