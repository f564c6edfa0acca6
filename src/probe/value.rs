//! Leaf value conversion
//!
//! Every place that turns a probed value into text goes through this module,
//! so the checker and both template grammars agree on how numbers, booleans
//! and nested values print.

use serde_json::{Number, Value};

/// Render a leaf value for display in a title.
///
/// Returns `None` for `null`, which callers treat the same as a missing
/// property. Case is preserved.
pub fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_string(n)),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| display_string(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Render a leaf value for case-insensitive comparison.
///
/// Same as [`display_string`], lower-cased.
pub fn comparison_string(value: &Value) -> Option<String> {
    display_string(value).map(|s| s.to_lowercase())
}

/// Whether a `disposition.forced` style flag is set.
///
/// Only the number `1` and the string `"1"` count; `true`, `"yes"` and
/// anything else do not.
pub fn is_forced(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        Some(Value::String(s)) => s == "1",
        _ => false,
    }
}

/// Integral floats print without a fraction (`2.0` -> `2`), matching what
/// ffprobe consumers expect to see in titles.
fn number_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        Some(f) => format!("{}", f),
        None => n.to_string(),
    }
}
