//! Editor session: the single owner of an in-memory form schema.
//!
//! The session holds the schema, the notification queue, and a busy flag
//! for in-flight saves. Persistence failures degrade to a notification and
//! leave the schema untouched; a malformed JSON import never corrupts the
//! previously valid schema.

use crate::client::PersistenceClient;
use crate::models::{FieldOption, FormSchema};
use crate::notify::{NotificationQueue, Variant};
use crate::schema::{self, FieldPatch};

/// Import rejection messages, matched by the inline editor error display.
pub mod import_errors {
    pub const INVALID_JSON: &str = "Invalid JSON format";
    pub const TITLE: &str = "JSON must include a title property of type string";
    pub const FIELDS: &str = "JSON must include a fields property of type array";
    pub const FIELD_PROPS: &str = "Each field must have id, type, and label properties";
}

pub struct EditorSession {
    schema: FormSchema,
    pub notifications: NotificationQueue,
    saving: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Start with the editor's default empty form.
    pub fn new() -> Self {
        Self::with_schema(FormSchema::untitled())
    }

    pub fn with_schema(schema: FormSchema) -> Self {
        Self {
            schema,
            notifications: NotificationQueue::new(),
            saving: false,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    // ==================== EDITING ====================

    pub fn add_field(&mut self, field_type: &str) {
        self.schema = schema::add_field(self.schema.clone(), field_type);
    }

    pub fn remove_field(&mut self, field_id: &str) {
        self.schema = schema::remove_field(self.schema.clone(), field_id);
    }

    pub fn duplicate_field(&mut self, field_id: &str) {
        self.schema = schema::duplicate_field(self.schema.clone(), field_id);
    }

    pub fn update_field(&mut self, field_id: &str, patch: FieldPatch) {
        self.schema = schema::update_field(self.schema.clone(), field_id, patch);
    }

    pub fn move_field(&mut self, from_index: usize, to_index: usize) {
        self.schema = schema::move_field(self.schema.clone(), from_index, to_index);
    }

    pub fn update_title(&mut self, title: impl Into<String>) {
        self.schema = schema::update_title(self.schema.clone(), title);
    }

    // ==================== JSON EXPORT / IMPORT ====================

    /// Formatted JSON text of the full schema.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.schema).unwrap_or_default()
    }

    /// Download filename derived from the form title.
    pub fn export_filename(&self) -> String {
        format!("{}-form-schema.json", schema::slug(&self.schema.title))
    }

    /// Replace the schema from JSON text.
    ///
    /// Validation is staged: JSON syntax, then title, then fields shape,
    /// then per-field id/type/label presence. On any rejection the current
    /// schema is left unmodified and the message is returned.
    ///
    /// The presence checks accept any truthy value, but the final typed
    /// parse still requires each attribute to have its declared shape; a
    /// numeric `id` or a string `rows` is rejected as invalid JSON rather
    /// than coerced.
    pub fn import_json(&mut self, text: &str) -> Result<(), &'static str> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|_| import_errors::INVALID_JSON)?;

        let title_ok = value
            .get("title")
            .and_then(|t| t.as_str())
            .is_some_and(|t| !t.is_empty());
        if !title_ok {
            return Err(import_errors::TITLE);
        }

        let Some(fields) = value.get("fields").and_then(|f| f.as_array()) else {
            return Err(import_errors::FIELDS);
        };

        for field in fields {
            let has = |key: &str| field.get(key).is_some_and(is_truthy);
            if !(has("id") && has("type") && has("label")) {
                return Err(import_errors::FIELD_PROPS);
            }
        }

        let parsed: FormSchema =
            serde_json::from_value(value).map_err(|_| import_errors::INVALID_JSON)?;
        self.schema = parsed;
        Ok(())
    }

    // ==================== PERSISTENCE ====================

    /// Save the schema through the persistence client.
    ///
    /// A save already in flight makes this a no-op. On success the schema is
    /// replaced with the server copy (id and timestamps included); on
    /// failure the schema is unchanged and a destructive notification is
    /// queued. Returns whether the save succeeded.
    pub async fn save(&mut self, client: &PersistenceClient) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;

        let result = client.save(&self.schema).await;
        self.saving = false;

        match result {
            Ok(saved) => {
                let title = saved.title.clone();
                self.schema = saved;
                self.notifications.enqueue(
                    "Form saved",
                    format!("\"{}\" has been saved successfully.", title),
                    Variant::Default,
                );
                true
            }
            Err(e) => {
                tracing::warn!("Error saving form: {}", e);
                self.notifications.enqueue(
                    "Error saving form",
                    "There was a problem saving your form. Please try again.",
                    Variant::Destructive,
                );
                false
            }
        }
    }

    /// Fetch the list of saved forms for the load dialog.
    pub async fn load_forms(&mut self, client: &PersistenceClient) -> Option<Vec<FormSchema>> {
        match client.list_forms().await {
            Ok(forms) => Some(forms),
            Err(e) => {
                tracing::warn!("Error loading forms: {}", e);
                self.notifications.enqueue(
                    "Error loading forms",
                    "There was a problem loading your saved forms. Please try again.",
                    Variant::Destructive,
                );
                None
            }
        }
    }

    /// Replace the working schema with a previously saved form.
    pub fn load_form(&mut self, form: FormSchema) {
        let title = form.title.clone();
        self.schema = form;
        self.notifications.enqueue(
            "Form loaded",
            format!("\"{}\" has been loaded successfully.", title),
            Variant::Default,
        );
    }

    /// Convenience accessor for the options of a choice field.
    pub fn field_options(&self, field_id: &str) -> &[FieldOption] {
        self.schema
            .fields
            .iter()
            .find(|f| f.id == field_id)
            .and_then(|f| f.options.as_deref())
            .unwrap_or(&[])
    }
}

/// Loose presence check for the id/type/label properties: empty strings,
/// zero, null, and false all count as missing.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_round_trips_through_import() {
        let mut session = EditorSession::new();
        session.add_field("select");
        session.update_title("Signup Survey");
        let json = session.export_json();

        let mut other = EditorSession::new();
        other.import_json(&json).unwrap();
        assert_eq!(other.schema(), session.schema());
    }

    #[test]
    fn export_filename_is_slugged() {
        let mut session = EditorSession::new();
        session.update_title("Signup Survey");
        assert_eq!(session.export_filename(), "signup-survey-form-schema.json");
    }

    #[test]
    fn import_rejects_malformed_json() {
        let mut session = EditorSession::new();
        let before = session.schema().clone();
        assert_eq!(
            session.import_json("{not json"),
            Err(import_errors::INVALID_JSON)
        );
        assert_eq!(session.schema(), &before);
    }

    #[test]
    fn import_rejects_missing_or_empty_title() {
        let mut session = EditorSession::new();
        assert_eq!(
            session.import_json(r#"{"fields": []}"#),
            Err(import_errors::TITLE)
        );
        assert_eq!(
            session.import_json(r#"{"title": "", "fields": []}"#),
            Err(import_errors::TITLE)
        );
        assert_eq!(
            session.import_json(r#"{"title": 7, "fields": []}"#),
            Err(import_errors::TITLE)
        );
    }

    #[test]
    fn import_rejects_non_array_fields() {
        let mut session = EditorSession::new();
        assert_eq!(
            session.import_json(r#"{"title": "T", "fields": {}}"#),
            Err(import_errors::FIELDS)
        );
    }

    #[test]
    fn import_rejects_field_missing_id_and_keeps_schema() {
        let mut session = EditorSession::new();
        session.add_field("text");
        let before = session.schema().clone();

        let result = session
            .import_json(r#"{"title":"T","fields":[{"type":"text","label":"L"}]}"#);
        assert_eq!(result, Err(import_errors::FIELD_PROPS));
        assert_eq!(session.schema(), &before);
    }

    #[test]
    fn import_rejects_mistyped_attributes_after_presence_checks() {
        let mut session = EditorSession::new();
        let before = session.schema().clone();

        // A numeric id is truthy, so it passes the presence stage, but the
        // typed parse still requires a string.
        let result = session
            .import_json(r#"{"title":"T","fields":[{"id":7,"type":"text","label":"L"}]}"#);
        assert_eq!(result, Err(import_errors::INVALID_JSON));

        // Same for a mis-typed optional attribute.
        let result = session.import_json(
            r#"{"title":"T","fields":[{"id":"f1","type":"textarea","label":"L","rows":"3"}]}"#,
        );
        assert_eq!(result, Err(import_errors::INVALID_JSON));
        assert_eq!(session.schema(), &before);
    }

    #[test]
    fn import_accepts_unknown_field_types() {
        let mut session = EditorSession::new();
        session
            .import_json(r#"{"title":"T","fields":[{"id":"f1","type":"hologram","label":"L"}]}"#)
            .unwrap();
        assert_eq!(session.schema().fields[0].field_type, "hologram");
    }

    #[test]
    fn editing_operations_mutate_the_owned_schema() {
        let mut session = EditorSession::new();
        session.add_field("select");
        session.add_field("text");
        let select_id = session.schema().fields[0].id.clone();

        assert_eq!(session.field_options(&select_id).len(), 3);

        session.move_field(0, 1);
        assert_eq!(session.schema().fields[1].id, select_id);

        session.remove_field(&select_id);
        assert_eq!(session.schema().fields.len(), 1);
    }
}
