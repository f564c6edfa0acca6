//! Plugin schema declarations and default-value loading

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::inputs::PluginInputs;

/// Declared value type of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    String,
    Boolean,
    Number,
}

/// Editor widget used for an input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputUi {
    Text,
    Switch,
    Dropdown { options: Vec<String> },
}

/// One configurable option of a plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDetails {
    pub label: String,
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub default_value: Value,
    #[serde(rename = "inputUI")]
    pub ui: InputUi,
    pub tooltip: String,
}

impl InputDetails {
    pub fn text(name: &str, label: &str, default: &str, tooltip: &str) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            input_type: InputType::String,
            default_value: Value::from(default),
            ui: InputUi::Text,
            tooltip: tooltip.to_string(),
        }
    }

    pub fn switch(name: &str, label: &str, default: bool, tooltip: &str) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            input_type: InputType::Boolean,
            default_value: Value::from(default),
            ui: InputUi::Switch,
            tooltip: tooltip.to_string(),
        }
    }

    pub fn dropdown(
        name: &str,
        label: &str,
        input_type: InputType,
        default: Value,
        options: &[&str],
        tooltip: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            input_type,
            default_value: default,
            ui: InputUi::Dropdown {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
            tooltip: tooltip.to_string(),
        }
    }
}

/// A numbered output of a plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDetails {
    pub number: u32,
    pub tooltip: String,
}

/// Everything the engine shows about a plugin in the flow editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDetails {
    /// Registry id, e.g. `checkDetailedStreamProperty`
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: String,
    pub border_color: String,
    pub requires_version: String,
    pub icon: String,
    pub inputs: Vec<InputDetails>,
    pub outputs: Vec<OutputDetails>,
}

impl PluginDetails {
    pub fn input(&self, name: &str) -> Option<&InputDetails> {
        self.inputs.iter().find(|i| i.name == name)
    }
}

/// Fills in options the user left unset before a plugin runs.
pub trait InputLoader {
    fn load(&self, inputs: PluginInputs, details: &PluginDetails) -> PluginInputs;
}

/// Uses each input's declared default, unless an override is configured for
/// the plugin. Options the plugin does not declare are left alone.
#[derive(Debug, Clone, Default)]
pub struct DefaultValueLoader {
    overrides: BTreeMap<String, PluginInputs>,
}

impl DefaultValueLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-plugin default overrides, keyed by plugin id
    pub fn with_overrides(overrides: BTreeMap<String, PluginInputs>) -> Self {
        Self { overrides }
    }
}

impl InputLoader for DefaultValueLoader {
    fn load(&self, mut inputs: PluginInputs, details: &PluginDetails) -> PluginInputs {
        let overrides = self.overrides.get(&details.id);
        for input in &details.inputs {
            if inputs.contains(&input.name) {
                continue;
            }
            let default = overrides
                .and_then(|o| o.get(&input.name))
                .unwrap_or(&input.default_value)
                .clone();
            tracing::debug!("{}: defaulting {} to {}", details.id, input.name, default);
            inputs.set(input.name.clone(), default);
        }
        inputs
    }
}
