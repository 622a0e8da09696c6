//! Form schema model and REST request/response bodies.

use serde::{Deserialize, Serialize};

use super::FieldDefinition;

/// The aggregate root: a titled, ordered list of fields.
///
/// `id` and the timestamps are absent on a transient unsaved form and
/// server-assigned once persisted. Field order is the only ordering signal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub fields: Vec<FieldDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl FormSchema {
    /// A fresh unsaved form, as the editor starts with.
    pub fn untitled() -> Self {
        Self::new("My Form")
    }

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            fields: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Request body for POST /api/forms and PUT /api/forms/{id}.
///
/// Both members are optional so the handler can distinguish a missing key
/// from an empty value and reject with a validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFormRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<FieldDefinition>>,
}

/// Confirmation body for DELETE /api/forms/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteFormResponse {
    pub message: String,
}
