//! Editor field definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input widget used for a field in the event editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Input,
    Date,
    Select,
    Hidden,
}

/// Choice for `select` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub id: Value,
    pub text: String,
    pub value: Value,
}

/// Presentation and validation hints for a field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(default)]
    pub multiline: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err_msg: Option<String>,
}

/// One field of the event editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldProps {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<FieldConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldProps {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            options: Vec::new(),
            config: None,
            default: None,
        }
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Fields every editor has, placed before host-supplied ones.
pub fn default_fields() -> Vec<FieldProps> {
    vec![
        FieldProps::new("event_id", FieldKind::Hidden),
        FieldProps::new("title", FieldKind::Input).with_config(FieldConfig {
            label: Some("Title".to_string()),
            required: true,
            min: Some(3),
            ..FieldConfig::default()
        }),
        FieldProps::new("start", FieldKind::Date).with_config(FieldConfig {
            label: Some("Start".to_string()),
            required: true,
            ..FieldConfig::default()
        }),
        FieldProps::new("end", FieldKind::Date).with_config(FieldConfig {
            label: Some("End".to_string()),
            required: true,
            ..FieldConfig::default()
        }),
    ]
}

/// Default fields followed by `custom`, both in their original order.
///
/// Plain concatenation: a custom field named like a default one is kept
/// as a second entry.
pub fn merge_fields(custom: &[FieldProps]) -> Vec<FieldProps> {
    let mut fields = default_fields();
    fields.extend_from_slice(custom);
    fields
}
