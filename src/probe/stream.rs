//! FFprobe stream records

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::property::{resolve_in, PropertyPath};
use super::value::{comparison_string, display_string};

/// Stream category as reported by ffprobe's `codec_type`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodecType {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
    Other(String),
}

impl CodecType {
    pub fn parse(s: &str) -> Self {
        match s {
            "video" => CodecType::Video,
            "audio" => CodecType::Audio,
            "subtitle" => CodecType::Subtitle,
            "data" => CodecType::Data,
            "attachment" => CodecType::Attachment,
            other => CodecType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CodecType::Video => "video",
            CodecType::Audio => "audio",
            CodecType::Subtitle => "subtitle",
            CodecType::Data => "data",
            CodecType::Attachment => "attachment",
            CodecType::Other(s) => s,
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stream description as produced by ffprobe, plus whatever the engine
/// added to it (`removed`, `mapArgs`, ...).
///
/// The record is kept loosely typed; the accessors below cover the fields
/// the plugins look at directly, everything else goes through [`get`].
///
/// [`get`]: StreamRecord::get
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamRecord(pub Map<String, Value>);

impl StreamRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from a JSON object. Non-objects give an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Resolve a dotted property path
    pub fn get(&self, path: &PropertyPath) -> Option<&Value> {
        resolve_in(&self.0, path)
    }

    /// Ordinal position of the stream in the source file
    pub fn index(&self) -> Option<u64> {
        self.0.get("index").and_then(Value::as_u64)
    }

    pub fn codec_type(&self) -> CodecType {
        match self.0.get("codec_type") {
            Some(Value::String(s)) => CodecType::parse(s),
            Some(Value::Null) | None => CodecType::Other("undefined".to_string()),
            Some(other) => CodecType::Other(other.to_string()),
        }
    }

    /// Channel count; integral floats (`2.0`) count as integers.
    pub fn channels(&self) -> Option<i64> {
        let value = self.0.get("channels")?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        })
    }

    /// `tags.language`, lower-cased
    pub fn language(&self) -> Option<String> {
        match self.get(&PropertyPath::parse("tags.language")) {
            Some(v @ Value::String(_)) => comparison_string(v),
            _ => None,
        }
    }

    /// Set by the engine when the stream was dropped from the output command
    pub fn is_removed(&self) -> bool {
        match self.0.get("removed") {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            _ => false,
        }
    }

    /// Label used in log lines: the `index` field, or `fallback` when the
    /// field is missing or zero.
    pub fn log_index(&self, fallback: usize) -> u64 {
        match self.index() {
            Some(i) if i != 0 => i,
            _ => fallback as u64,
        }
    }

    /// `index` as printed in log lines and metadata specifiers
    pub fn index_label(&self) -> String {
        self.0
            .get("index")
            .and_then(display_string)
            .unwrap_or_else(|| "undefined".to_string())
    }
}
