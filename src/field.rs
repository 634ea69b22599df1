//! Field metadata and value model for reference fields
//!
//! A reference field holds either a single foreign-record identifier or an
//! ordered list of them. Values are owned by the hosting form; this module
//! only models what we read out of the form's JSON and hand back through
//! the setter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cardinality of a reference field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Holds at most one identifier
    SingleLink,
    /// Holds an ordered sequence of identifiers
    MultiLink,
}

impl FieldKind {
    /// Map the editor's raw field type string to a reference-field kind.
    ///
    /// Returns `None` for every other field type; those fields get no
    /// clipboard actions at all.
    pub fn from_field_type(field_type: &str) -> Option<Self> {
        match field_type {
            "link" => Some(FieldKind::SingleLink),
            "links" => Some(FieldKind::MultiLink),
            _ => None,
        }
    }
}

/// Metadata the hosting editor exposes for one field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Cardinality of the field
    pub kind: FieldKind,
    /// Human-readable label, used in notification messages
    pub label: String,
    /// Dotted path into the form values (e.g. "content.0.author")
    pub path: String,
}

impl FieldDescriptor {
    pub fn new(kind: FieldKind, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Current value of a reference field
///
/// `Missing` covers both an absent form entry and an explicit null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Missing,
    Single(String),
    Many(Vec<String>),
}

impl FieldValue {
    /// Read a field value out of a form JSON value.
    ///
    /// Strings become `Single`, arrays become `Many` (non-string elements
    /// are skipped), anything else is treated as missing.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Single(s.clone()),
            Value::Array(items) => FieldValue::Many(
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => FieldValue::Missing,
        }
    }

    /// Render the value back into a form JSON value
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Missing => Value::Null,
            FieldValue::Single(id) => Value::String(id.clone()),
            FieldValue::Many(ids) => Value::Array(ids.iter().cloned().map(Value::String).collect()),
        }
    }

    /// True when there is nothing to copy: missing, an empty string, or an
    /// empty list
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Single(id) => id.is_empty(),
            FieldValue::Many(ids) => ids.is_empty(),
        }
    }

    /// Comma-join into a clipboard payload string.
    ///
    /// A lone identifier passes through unchanged. Returns `None` when the
    /// value is empty.
    pub fn to_payload(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        match self {
            FieldValue::Missing => None,
            FieldValue::Single(id) => Some(id.clone()),
            FieldValue::Many(ids) => Some(ids.join(",")),
        }
    }

    /// The identifiers as an owned list; `Missing` yields an empty list
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            FieldValue::Missing => Vec::new(),
            FieldValue::Single(id) => vec![id.clone()],
            FieldValue::Many(ids) => ids.clone(),
        }
    }
}
