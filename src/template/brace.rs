//! Brace placeholder templates
//!
//! `{width}x{height} {display_aspect_ratio} ({codec_name})` renders to
//! `1920x1080 16:9 (hevc)`. Values are inserted as-is; placeholders that do
//! not resolve disappear (with a warning), then whitespace is normalised.

use regex::Captures;

use super::{cached_regex, collapse_whitespace, forced_label, warn_missing, FORCED_PROPERTY};
use crate::host::JobLog;
use crate::probe::{display_string, PropertyPath, StreamRecord};

/// Render a brace template against one stream
pub fn render(format: &str, stream: &StreamRecord, log: &mut dyn JobLog) -> String {
    let substituted = cached_regex!(r"\{([^}]+)\}")
        .replace_all(format, |caps: &Captures| placeholder(&caps[1], stream, &mut *log));
    collapse_whitespace(&substituted)
}

fn placeholder(path: &str, stream: &StreamRecord, log: &mut dyn JobLog) -> String {
    if path == FORCED_PROPERTY {
        return forced_label(stream).unwrap_or_default().to_string();
    }
    match stream.get(&PropertyPath::parse(path)).and_then(display_string) {
        Some(value) => value,
        None => {
            warn_missing(path, log);
            String::new()
        }
    }
}
