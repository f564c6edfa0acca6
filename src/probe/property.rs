//! Dotted property paths into stream records

use std::fmt;

use serde_json::{Map, Value};

/// A dot-separated path such as `tags.language` or `disposition.forced`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    raw: String,
    segments: Vec<String>,
}

impl PropertyPath {
    /// Parse a path. Every string is a valid path; segments that can never
    /// match (empty ones, for instance) simply resolve to nothing.
    pub fn parse(path: &str) -> Self {
        Self {
            raw: path.to_string(),
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// The individual keys, in walk order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Resolve `path` against a value.
///
/// Objects are walked by key and arrays by numeric index. The walk stops
/// with `None` at the first segment that is missing or whose parent is a
/// scalar. A `null` leaf is reported as absent as well.
pub fn resolve<'a>(root: &'a Value, path: &PropertyPath) -> Option<&'a Value> {
    walk(root, path.segments())
}

/// Resolve `path` against an object without wrapping it in a `Value` first.
pub fn resolve_in<'a>(map: &'a Map<String, Value>, path: &PropertyPath) -> Option<&'a Value> {
    let (first, rest) = path.segments().split_first()?;
    walk(map.get(first.as_str())?, rest)
}

fn walk<'a>(mut current: &'a Value, segments: &[String]) -> Option<&'a Value> {
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment.as_str())?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    match current {
        Value::Null => None,
        value => Some(value),
    }
}
