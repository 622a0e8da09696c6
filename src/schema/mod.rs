//! Form schema editing operations.
//!
//! All operations are pure transformations: they take the schema by value and
//! return the updated value, leaving callers free to keep the previous state
//! for rollback. Operations against an unknown field id are no-ops.

use uuid::Uuid;

use crate::catalog;
use crate::models::{DefaultValue, FieldDefinition, FieldOption, FormSchema};

/// Generate a fresh field identifier. Never reused within a process.
pub fn new_field_id() -> String {
    format!("field-{}", Uuid::new_v4())
}

/// Partial set of field attributes for a shallow-merge update.
///
/// `None` leaves the attribute unchanged; attributes cannot be cleared
/// through a patch, matching the editor's merge semantics.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    pub field_type: Option<String>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<FieldOption>>,
    pub rows: Option<u32>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
    pub pattern: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub accept: Option<String>,
    pub class_name: Option<String>,
    pub value: Option<String>,
    pub default_value: Option<DefaultValue>,
    pub language: Option<String>,
    pub captcha_type: Option<String>,
    pub validate_range: Option<bool>,
    pub min_duration: Option<String>,
    pub max_duration: Option<String>,
    pub show_timezone: Option<bool>,
    pub show_duration: Option<bool>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub zoom: Option<u32>,
    pub data_source: Option<String>,
}

impl FieldPatch {
    fn apply(self, field: &mut FieldDefinition) {
        if let Some(v) = self.field_type {
            field.field_type = v;
        }
        if let Some(v) = self.label {
            field.label = v;
        }
        if self.placeholder.is_some() {
            field.placeholder = self.placeholder;
        }
        if self.required.is_some() {
            field.required = self.required;
        }
        if self.options.is_some() {
            field.options = self.options;
        }
        if self.rows.is_some() {
            field.rows = self.rows;
        }
        if self.min.is_some() {
            field.min = self.min;
        }
        if self.max.is_some() {
            field.max = self.max;
        }
        if self.step.is_some() {
            field.step = self.step;
        }
        if self.pattern.is_some() {
            field.pattern = self.pattern;
        }
        if self.min_length.is_some() {
            field.min_length = self.min_length;
        }
        if self.max_length.is_some() {
            field.max_length = self.max_length;
        }
        if self.accept.is_some() {
            field.accept = self.accept;
        }
        if self.class_name.is_some() {
            field.class_name = self.class_name;
        }
        if self.value.is_some() {
            field.value = self.value;
        }
        if self.default_value.is_some() {
            field.default_value = self.default_value;
        }
        if self.language.is_some() {
            field.language = self.language;
        }
        if self.captcha_type.is_some() {
            field.captcha_type = self.captcha_type;
        }
        if self.validate_range.is_some() {
            field.validate_range = self.validate_range;
        }
        if self.min_duration.is_some() {
            field.min_duration = self.min_duration;
        }
        if self.max_duration.is_some() {
            field.max_duration = self.max_duration;
        }
        if self.show_timezone.is_some() {
            field.show_timezone = self.show_timezone;
        }
        if self.show_duration.is_some() {
            field.show_duration = self.show_duration;
        }
        if self.timezone.is_some() {
            field.timezone = self.timezone;
        }
        if self.latitude.is_some() {
            field.latitude = self.latitude;
        }
        if self.longitude.is_some() {
            field.longitude = self.longitude;
        }
        if self.zoom.is_some() {
            field.zoom = self.zoom;
        }
        if self.data_source.is_some() {
            field.data_source = self.data_source;
        }
    }
}

/// Append a new field of the given type.
///
/// Choice types get three default options. An unrecognized type is not
/// fatal: the field is created with the generic default label.
pub fn add_field(mut schema: FormSchema, field_type: &str) -> FormSchema {
    let mut field = FieldDefinition::new(
        new_field_id(),
        field_type,
        catalog::default_label(field_type),
    );

    if catalog::is_choice_type(field_type) {
        field.options = Some(vec![
            FieldOption::new("Option 1", "option1"),
            FieldOption::new("Option 2", "option2"),
            FieldOption::new("Option 3", "option3"),
        ]);
    }

    schema.fields.push(field);
    schema
}

/// Remove the field with the given id. No-op when the id is unknown.
pub fn remove_field(mut schema: FormSchema, field_id: &str) -> FormSchema {
    schema.fields.retain(|f| f.id != field_id);
    schema
}

/// Append a clone of the field with a fresh id and a "(Copy)" label suffix.
pub fn duplicate_field(mut schema: FormSchema, field_id: &str) -> FormSchema {
    let Some(original) = schema.fields.iter().find(|f| f.id == field_id) else {
        return schema;
    };

    let mut copy = original.clone();
    copy.id = new_field_id();
    copy.label = format!("{} (Copy)", copy.label);
    schema.fields.push(copy);
    schema
}

/// Shallow-merge a patch into the field with the given id.
pub fn update_field(mut schema: FormSchema, field_id: &str, patch: FieldPatch) -> FormSchema {
    if let Some(field) = schema.fields.iter_mut().find(|f| f.id == field_id) {
        patch.apply(field);
    }
    schema
}

/// Move the field at `from_index` to `to_index`, preserving the relative
/// order of all other fields. Out-of-range indexes make this a no-op.
pub fn move_field(mut schema: FormSchema, from_index: usize, to_index: usize) -> FormSchema {
    if from_index >= schema.fields.len() || to_index >= schema.fields.len() {
        return schema;
    }
    let field = schema.fields.remove(from_index);
    schema.fields.insert(to_index, field);
    schema
}

pub fn update_title(mut schema: FormSchema, title: impl Into<String>) -> FormSchema {
    schema.title = title.into();
    schema
}

/// Derive an option value from its label: lowercased, whitespace runs
/// collapsed to single hyphens.
pub fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_whitespace = false;
    for c in label.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
                in_whitespace = true;
            }
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Append a numbered option, as the options editor's "Add Option" does.
pub fn append_option(options: &[FieldOption]) -> Vec<FieldOption> {
    let mut out = options.to_vec();
    let n = out.len() + 1;
    out.push(FieldOption::new(format!("Option {n}"), format!("option{n}")));
    out
}

/// Relabel an option, re-deriving its value from the new label.
pub fn relabel_option(options: &[FieldOption], index: usize, label: &str) -> Vec<FieldOption> {
    let mut out = options.to_vec();
    if let Some(option) = out.get_mut(index) {
        option.label = label.to_string();
        option.value = slug(label);
    }
    out
}

/// Remove the option at `index`. No-op when out of range.
pub fn remove_option(options: &[FieldOption], index: usize) -> Vec<FieldOption> {
    let mut out = options.to_vec();
    if index < out.len() {
        out.remove(index);
    }
    out
}
