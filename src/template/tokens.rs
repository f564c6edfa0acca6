//! Comma-separated token templates (legacy format)
//!
//! `tags.language,channel_layout,'(',codec_name,')'` renders to
//! `ENG STEREO (AAC)`. Property values are upper-cased, quoted literals are
//! kept verbatim. Tokens are joined with single spaces, except that `x`
//! attaches to both neighbours, `(` to the token after it and `)` to the
//! token before it, so `width,'x',height` gives `1920x1080`.

use super::{collapse_whitespace, forced_label, warn_missing, FORCED_PROPERTY};
use crate::host::JobLog;
use crate::probe::{display_string, PropertyPath, StreamRecord};

/// One element of a token template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Property(String),
}

/// Split a format string into tokens.
///
/// Commas inside single quotes do not split. Blank tokens are dropped. A
/// quote that is never closed runs to the end of the format.
pub fn tokenize(format: &str) -> Vec<Token> {
    let mut raw = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in format.chars() {
        match c {
            '\'' => {
                quoted = !quoted;
                current.push(c);
            }
            ',' if !quoted => raw.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    raw.push(current);

    raw.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| match t.strip_prefix('\'') {
            Some(rest) => Token::Literal(rest.strip_suffix('\'').unwrap_or(rest).to_string()),
            None => Token::Property(t.to_string()),
        })
        .collect()
}

/// Render a token template against one stream
pub fn render(format: &str, stream: &StreamRecord, log: &mut dyn JobLog) -> String {
    let values: Vec<String> = tokenize(format)
        .into_iter()
        .filter_map(|token| token_value(token, stream, &mut *log))
        .filter(|v| !v.is_empty())
        .collect();
    collapse_whitespace(&join(&values))
}

fn token_value(token: Token, stream: &StreamRecord, log: &mut dyn JobLog) -> Option<String> {
    match token {
        Token::Literal(text) => Some(text),
        Token::Property(path) if path == FORCED_PROPERTY => {
            forced_label(stream).map(str::to_string)
        }
        Token::Property(path) => {
            let value = stream
                .get(&PropertyPath::parse(&path))
                .and_then(display_string);
            if value.is_none() {
                warn_missing(&path, log);
            }
            value.map(|v| v.to_uppercase())
        }
    }
}

/// Join rendered values with the adjacency rules for `x`, `(` and `)`
fn join(values: &[String]) -> String {
    let mut out = String::new();
    let mut previous: Option<&str> = None;
    for value in values {
        if let Some(prev) = previous {
            let attach = value == "x" || value == ")" || prev == "x" || prev == "(";
            if !attach {
                out.push(' ');
            }
        }
        out.push_str(value);
        previous = Some(value.as_str());
    }
    out
}
