//! Field catalog: the static enumeration of selectable field types.
//!
//! Pure data. Types are grouped into four categories for the field picker,
//! and each type carries the default label assigned when a field is created.

use std::fmt;

/// Picker category for a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCategory {
    Basic,
    Advanced,
    Specialized,
    Analytics,
}

impl FieldCategory {
    pub const ALL: [FieldCategory; 4] = [
        FieldCategory::Basic,
        FieldCategory::Advanced,
        FieldCategory::Specialized,
        FieldCategory::Analytics,
    ];
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldCategory::Basic => "basic",
            FieldCategory::Advanced => "advanced",
            FieldCategory::Specialized => "specialized",
            FieldCategory::Analytics => "analytics",
        };
        f.write_str(name)
    }
}

/// One catalog entry: a type identifier with its default label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub field_type: &'static str,
    pub label: &'static str,
    pub category: FieldCategory,
}

const fn entry(
    field_type: &'static str,
    label: &'static str,
    category: FieldCategory,
) -> CatalogEntry {
    CatalogEntry {
        field_type,
        label,
        category,
    }
}

/// The full catalog, in picker order.
pub const CATALOG: [CatalogEntry; 35] = [
    // Basic
    entry("text", "Text Input", FieldCategory::Basic),
    entry("textarea", "Text Area", FieldCategory::Basic),
    entry("email", "Email Address", FieldCategory::Basic),
    entry("password", "Password", FieldCategory::Basic),
    entry("number", "Number", FieldCategory::Basic),
    entry("select", "Select Option", FieldCategory::Basic),
    entry("checkbox", "Checkbox Group", FieldCategory::Basic),
    entry("radio", "Radio Group", FieldCategory::Basic),
    // Advanced
    entry("date", "Date", FieldCategory::Advanced),
    entry("time", "Time", FieldCategory::Advanced),
    entry("datetime", "Date and Time", FieldCategory::Advanced),
    entry("daterange", "Date Range", FieldCategory::Advanced),
    entry("datetimerange", "Date & Time Range", FieldCategory::Advanced),
    entry("tel", "Phone Number", FieldCategory::Advanced),
    entry("url", "Website URL", FieldCategory::Advanced),
    entry("file", "File Upload", FieldCategory::Advanced),
    entry("range", "Range Slider", FieldCategory::Advanced),
    entry("color", "Color Picker", FieldCategory::Advanced),
    entry("rating", "Rating", FieldCategory::Advanced),
    entry("richtext", "Rich Text Editor", FieldCategory::Advanced),
    entry("markdown", "Markdown Editor", FieldCategory::Advanced),
    entry("code", "Code Editor", FieldCategory::Advanced),
    entry("multiselect", "Multi-Select", FieldCategory::Advanced),
    // Specialized
    entry("image", "Image Upload", FieldCategory::Specialized),
    entry("signature", "Signature", FieldCategory::Specialized),
    entry("address", "Address", FieldCategory::Specialized),
    entry("location", "Location", FieldCategory::Specialized),
    entry("captcha", "CAPTCHA", FieldCategory::Specialized),
    entry("hidden", "Hidden Field", FieldCategory::Specialized),
    // Analytics
    entry("barchart", "Bar Chart", FieldCategory::Analytics),
    entry("linechart", "Line Chart", FieldCategory::Analytics),
    entry("piechart", "Pie Chart", FieldCategory::Analytics),
    entry("datatable", "Data Table", FieldCategory::Analytics),
    entry("gauge", "Gauge Meter", FieldCategory::Analytics),
    entry("metrics", "Metrics Dashboard", FieldCategory::Analytics),
];

/// Types that are created with a pre-populated option list.
pub const CHOICE_TYPES: [&str; 4] = ["select", "radio", "checkbox", "multiselect"];

/// Look up a catalog entry by type identifier.
pub fn find(field_type: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.field_type == field_type)
}

/// Whether the type exists in the catalog.
pub fn is_known(field_type: &str) -> bool {
    find(field_type).is_some()
}

/// Default label for a new field of the given type.
///
/// Unknown types are not an error: the generic label is used instead.
pub fn default_label(field_type: &str) -> &'static str {
    find(field_type).map(|e| e.label).unwrap_or("Field")
}

/// Whether a new field of this type gets default options.
pub fn is_choice_type(field_type: &str) -> bool {
    CHOICE_TYPES.contains(&field_type)
}

/// All entries in one category, in picker order.
pub fn entries_in(category: FieldCategory) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |e| e.category == category)
}

/// Case-insensitive label search across the whole catalog.
pub fn search(query: &str) -> Vec<&'static CatalogEntry> {
    let needle = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|e| e.label.to_lowercase().contains(&needle))
        .collect()
}
