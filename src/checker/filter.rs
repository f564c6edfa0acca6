//! Checker configuration
//!
//! Turns the loosely typed plugin inputs into a validated [`FilterConfig`].
//! Empty required options are configuration errors; the plugin logs them and
//! routes the file to the no-match output.

use std::fmt;

use thiserror::Error;

use crate::host::PluginInputs;
use crate::probe::{CodecType, PropertyPath};

/// Configuration errors. The messages are what ends up in the job log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Error: Language to check cannot be empty when Language check is enabled")]
    EmptyLanguage,

    #[error("Error: Property to check cannot be empty")]
    EmptyProperty,

    #[error("Error: Values to match cannot be empty")]
    EmptyValues,

    #[error("Error: Unknown stream type \"{0}\"")]
    UnknownStreamType(String),

    #[error("Error: Unknown condition \"{0}\"")]
    UnknownCondition(String),

    #[error("Error: Audio channel count \"{0}\" is not a whole number")]
    InvalidChannelCount(String),
}

/// Which streams the checker looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamTypeFilter {
    All,
    Video,
    Audio,
    Subtitle,
    Data,
}

impl StreamTypeFilter {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(StreamTypeFilter::All),
            "video" => Some(StreamTypeFilter::Video),
            "audio" => Some(StreamTypeFilter::Audio),
            "subtitle" => Some(StreamTypeFilter::Subtitle),
            "data" => Some(StreamTypeFilter::Data),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamTypeFilter::All => "all",
            StreamTypeFilter::Video => "video",
            StreamTypeFilter::Audio => "audio",
            StreamTypeFilter::Subtitle => "subtitle",
            StreamTypeFilter::Data => "data",
        }
    }

    pub fn matches(&self, codec_type: &CodecType) -> bool {
        match self {
            StreamTypeFilter::All => true,
            StreamTypeFilter::Video => *codec_type == CodecType::Video,
            StreamTypeFilter::Audio => *codec_type == CodecType::Audio,
            StreamTypeFilter::Subtitle => *codec_type == CodecType::Subtitle,
            StreamTypeFilter::Data => *codec_type == CodecType::Data,
        }
    }
}

impl fmt::Display for StreamTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a stream's property is compared with the match values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Includes,
    NotIncludes,
    Equals,
    NotEquals,
}

impl Condition {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "includes" => Some(Condition::Includes),
            "not_includes" => Some(Condition::NotIncludes),
            "equals" => Some(Condition::Equals),
            "not_equals" => Some(Condition::NotEquals),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Includes => "includes",
            Condition::NotIncludes => "not_includes",
            Condition::Equals => "equals",
            Condition::NotEquals => "not_equals",
        }
    }

    /// Negative conditions must hold for every stream, positive ones for any.
    pub fn is_negative(&self) -> bool {
        matches!(self, Condition::NotIncludes | Condition::NotEquals)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated checker settings
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub stream_type: StreamTypeFilter,
    /// Only set when the type is `audio` and the channel check is enabled
    pub channel_count: Option<i64>,
    /// Language tags as typed (trimmed); `None` when the check is disabled
    pub languages: Option<Vec<String>>,
    pub property: PropertyPath,
    /// Match values, lower-cased
    pub values: Vec<String>,
    pub condition: Condition,
}

/// Split a comma-separated option, dropping blank items
pub fn split_list(s: &str) -> Vec<String> {
    s.trim()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl FilterConfig {
    /// Build from the checker's inputs (`streamType`, `enableChannel`,
    /// `audioChannelCount`, `enableLanguage`, `languageTag`,
    /// `propertyToCheck`, `valuesToMatch`, `condition`).
    pub fn from_inputs(inputs: &PluginInputs) -> Result<Self, ConfigError> {
        let stream_type_raw = inputs.string("streamType");
        let enable_channel = inputs.boolean("enableChannel");
        let enable_language = inputs.boolean("enableLanguage");
        let languages = split_list(&inputs.string("languageTag"));
        let property = inputs.string("propertyToCheck").trim().to_string();
        let values = split_list(&inputs.string("valuesToMatch"));
        let condition_raw = inputs.string("condition");

        if enable_language && languages.is_empty() {
            return Err(ConfigError::EmptyLanguage);
        }
        if property.is_empty() {
            return Err(ConfigError::EmptyProperty);
        }
        if values.is_empty() {
            return Err(ConfigError::EmptyValues);
        }

        let stream_type = StreamTypeFilter::parse(stream_type_raw.trim())
            .ok_or(ConfigError::UnknownStreamType(stream_type_raw))?;
        let condition = Condition::parse(condition_raw.trim())
            .ok_or(ConfigError::UnknownCondition(condition_raw))?;

        let channel_count = if enable_channel && stream_type == StreamTypeFilter::Audio {
            match inputs.number("audioChannelCount") {
                Some(n) if n.fract() == 0.0 && n.is_finite() => Some(n as i64),
                _ => {
                    return Err(ConfigError::InvalidChannelCount(
                        inputs.string("audioChannelCount"),
                    ))
                }
            }
        } else {
            None
        };

        Ok(Self {
            stream_type,
            channel_count,
            languages: enable_language.then_some(languages),
            property: PropertyPath::parse(&property),
            values: values.iter().map(|v| v.to_lowercase()).collect(),
            condition,
        })
    }
}
