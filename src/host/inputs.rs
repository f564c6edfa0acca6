//! User-configured plugin options

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::probe::display_string;

/// Option name -> value, as configured in the flow editor.
///
/// The editor stores most options as strings (`"true"`, `"2"`), so the typed
/// getters accept both the string and the native JSON form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginInputs(pub Map<String, Value>);

impl PluginInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Option as text; missing and `null` options are empty.
    pub fn string(&self, name: &str) -> String {
        self.get(name).and_then(display_string).unwrap_or_default()
    }

    /// Option as a switch value
    pub fn boolean(&self, name: &str) -> bool {
        match self.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => false,
        }
    }

    /// Option as a number; non-numeric text gives `None`.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for PluginInputs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
