//! Title templates
//!
//! Renders a user-written format string against one stream. Two grammars
//! are supported:
//! - `Brace`: free text with `{property.path}` placeholders (current format)
//! - `TokenList`: comma-separated property paths and `'quoted'` literals,
//!   upper-cased (legacy format)
//!
//! Both treat `disposition.forced` specially: it renders `Forced` when the
//! stream is forced and nothing otherwise.

pub mod brace;
pub mod tokens;

use serde::{Deserialize, Serialize};

use crate::host::JobLog;
use crate::probe::{is_forced, PropertyPath, StreamRecord};

// Compile a regex once per call site.
macro_rules! cached_regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}
pub(crate) use cached_regex;

/// Placeholder that renders `Forced` instead of the raw flag
pub const FORCED_PROPERTY: &str = "disposition.forced";

/// Label rendered for forced streams
pub const FORCED_LABEL: &str = "Forced";

/// A template grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Brace,
    TokenList,
}

impl Grammar {
    /// Guess the grammar of a format string for one stream.
    ///
    /// Anything with a `{` is a brace template and a leading quote marks a
    /// token list. A comma-separated format is a token list only when every
    /// unquoted token is a property path and at least one of them resolves
    /// on `stream`. Everything else is brace, where plain text renders
    /// verbatim.
    pub fn sniff(format: &str, stream: &StreamRecord) -> Self {
        if format.contains('{') {
            return Grammar::Brace;
        }
        if format.trim_start().starts_with('\'') {
            return Grammar::TokenList;
        }
        if !format.contains(',') {
            return Grammar::Brace;
        }

        let paths: Vec<String> = tokens::tokenize(format)
            .into_iter()
            .filter_map(|token| match token {
                tokens::Token::Property(path) => Some(path),
                tokens::Token::Literal(_) => None,
            })
            .collect();
        let all_paths = paths
            .iter()
            .all(|p| cached_regex!(r"^[A-Za-z_][A-Za-z0-9_.]*$").is_match(p));
        let any_resolves = paths
            .iter()
            .any(|p| stream.get(&PropertyPath::parse(p)).is_some());

        if all_paths && any_resolves {
            Grammar::TokenList
        } else {
            Grammar::Brace
        }
    }

    pub fn render(&self, format: &str, stream: &StreamRecord, log: &mut dyn JobLog) -> String {
        match self {
            Grammar::Brace => brace::render(format, stream, log),
            Grammar::TokenList => tokens::render(format, stream, log),
        }
    }
}

/// Grammar choice from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarSelection {
    /// Sniff each format string
    #[default]
    Auto,
    Brace,
    TokenList,
}

impl GrammarSelection {
    pub fn grammar_for(&self, format: &str, stream: &StreamRecord) -> Grammar {
        match self {
            GrammarSelection::Auto => Grammar::sniff(format, stream),
            GrammarSelection::Brace => Grammar::Brace,
            GrammarSelection::TokenList => Grammar::TokenList,
        }
    }
}

/// `Forced` when the stream's forced flag is set
pub(crate) fn forced_label(stream: &StreamRecord) -> Option<&'static str> {
    is_forced(stream.get(&PropertyPath::parse(FORCED_PROPERTY))).then_some(FORCED_LABEL)
}

pub(crate) fn warn_missing(path: &str, log: &mut dyn JobLog) {
    tracing::warn!("property {} not found in stream", path);
    log.log(&format!(
        "Warning: Property '{{{}}}' not found in stream object.",
        path
    ));
}

/// Collapse whitespace runs to one space and trim
pub(crate) fn collapse_whitespace(s: &str) -> String {
    cached_regex!(r"\s+").replace_all(s, " ").trim().to_string()
}
