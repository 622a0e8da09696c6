//! Field definition model.
//!
//! A field carries only the attributes relevant to its type; everything
//! optional is skipped during serialization so exported schemas stay lean.

use serde::{Deserialize, Serialize};

/// One choice in a select/radio/checkbox/multiselect field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Default value for a field; the editor accepts either text or a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DefaultValue {
    Number(f64),
    Text(String),
}

/// A single configurable form field.
///
/// `field_type` is kept as a free string: the JSON import path accepts types
/// the catalog does not know about, and they must survive a round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_range: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_timezone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_duration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

/// A stored string attribute counts as set only when it is non-empty,
/// matching how the editor treats cleared inputs.
fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl FieldDefinition {
    pub fn new(id: impl Into<String>, field_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type: field_type.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn is_required(&self) -> bool {
        self.required == Some(true)
    }

    pub fn has_pattern(&self) -> bool {
        is_set(&self.pattern)
    }

    pub fn has_length_bounds(&self) -> bool {
        is_set(&self.min_length) || is_set(&self.max_length)
    }

    pub fn has_numeric_bounds(&self) -> bool {
        is_set(&self.min) || is_set(&self.max)
    }

    pub fn has_range_validation(&self) -> bool {
        self.validate_range == Some(true)
    }

    /// Any validation constraint beyond the required toggle.
    pub fn has_validation(&self) -> bool {
        self.has_pattern()
            || self.has_length_bounds()
            || self.has_numeric_bounds()
            || self.has_range_validation()
    }
}
