//! Field configuration logic.
//!
//! `applicable_controls` is the single source of truth for which
//! configuration sections apply to a field type. The configuration panel and
//! any schema validation consume the same mapping.

/// Type-specific advanced configuration panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancedPanel {
    /// Default latitude/longitude/zoom.
    Location,
    /// Timezone and duration flags plus duration bounds.
    DatetimeRange,
    /// Data source selection and inline JSON data.
    Chart,
    /// Data source selection and column list.
    DataTable,
    /// Min/max/current value.
    Gauge,
    /// Data source selection and real-time flag.
    Metrics,
    /// CAPTCHA variant.
    Captcha,
    /// Programming language.
    Code,
}

/// Which configuration controls apply to a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlSet {
    pub placeholder: bool,
    pub required_toggle: bool,
    pub rows: bool,
    pub options: bool,
    pub pattern: bool,
    pub numeric_bounds: bool,
    pub length_bounds: bool,
    pub accept: bool,
    pub default_value: bool,
    pub advanced: Option<AdvancedPanel>,
}

/// Fallback values the configuration panel displays before an attribute is
/// set explicitly.
pub mod defaults {
    pub const LATITUDE: f64 = 40.7128;
    pub const LONGITUDE: f64 = -74.006;
    pub const ZOOM: u32 = 13;
    pub const ROWS: u32 = 3;
    pub const GAUGE_MIN: &str = "0";
    pub const GAUGE_MAX: &str = "100";
    pub const GAUGE_VALUE: &str = "65";
    pub const CAPTCHA_TYPE: &str = "simple";
    pub const CODE_LANGUAGE: &str = "javascript";
    pub const TIMEZONE: &str = "local";
    pub const DATA_SOURCE: &str = "sample";
}

/// Selectable CAPTCHA variants.
pub const CAPTCHA_TYPES: [&str; 3] = ["simple", "recaptcha", "hcaptcha"];

/// Selectable code editor languages.
pub const CODE_LANGUAGES: [&str; 5] = ["javascript", "html", "css", "json", "python"];

/// Selectable timezone presets for the date/time range picker.
pub const TIMEZONES: [&str; 6] = ["local", "utc", "est", "cst", "mst", "pst"];

/// Selectable data sources for analytics fields.
pub const DATA_SOURCES: [&str; 3] = ["sample", "api", "form"];

/// Compute the applicable controls for a field type.
pub fn applicable_controls(field_type: &str) -> ControlSet {
    let placeholder = !matches!(field_type, "checkbox" | "hidden" | "rating" | "gauge" | "metrics")
        && !field_type.contains("chart");

    let required_toggle = !matches!(
        field_type,
        "barchart" | "linechart" | "piechart" | "datatable" | "gauge" | "metrics"
    );

    // Display-only analytics types have no user-entered default either,
    // except the gauge whose current value doubles as its default.
    let default_value = !matches!(
        field_type,
        "barchart" | "linechart" | "piechart" | "datatable" | "metrics"
    );

    let advanced = match field_type {
        "location" => Some(AdvancedPanel::Location),
        "datetimerange" => Some(AdvancedPanel::DatetimeRange),
        "barchart" | "linechart" | "piechart" => Some(AdvancedPanel::Chart),
        "datatable" => Some(AdvancedPanel::DataTable),
        "gauge" => Some(AdvancedPanel::Gauge),
        "metrics" => Some(AdvancedPanel::Metrics),
        "captcha" => Some(AdvancedPanel::Captcha),
        "code" => Some(AdvancedPanel::Code),
        _ => None,
    };

    ControlSet {
        placeholder,
        required_toggle,
        rows: matches!(field_type, "text" | "textarea" | "richtext" | "markdown" | "code"),
        options: matches!(field_type, "select" | "radio" | "checkbox" | "multiselect"),
        pattern: matches!(field_type, "text" | "email" | "password" | "tel" | "url"),
        numeric_bounds: matches!(field_type, "number" | "range"),
        length_bounds: matches!(field_type, "text" | "textarea" | "richtext" | "markdown" | "code"),
        accept: field_type == "file",
        default_value,
        advanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn checkbox_has_options_but_no_placeholder_or_required() {
        let controls = applicable_controls("checkbox");
        assert!(controls.options);
        assert!(!controls.placeholder);
        // Required stays available for checkbox; it is a data-entry type.
        assert!(controls.required_toggle);
    }

    #[test]
    fn display_only_types_have_no_required_toggle() {
        for t in ["barchart", "linechart", "piechart", "datatable", "gauge", "metrics"] {
            assert!(!applicable_controls(t).required_toggle, "{t}");
        }
        for t in ["text", "select", "file", "location", "captcha"] {
            assert!(applicable_controls(t).required_toggle, "{t}");
        }
    }

    #[test]
    fn placeholder_excluded_for_non_input_types() {
        for t in ["checkbox", "hidden", "rating", "barchart", "linechart", "piechart", "gauge", "metrics"] {
            assert!(!applicable_controls(t).placeholder, "{t}");
        }
        assert!(applicable_controls("text").placeholder);
        // The data table keeps its placeholder section, matching the panel.
        assert!(applicable_controls("datatable").placeholder);
    }

    #[test]
    fn validation_controls_follow_the_type_sets() {
        for t in ["text", "email", "password", "tel", "url"] {
            assert!(applicable_controls(t).pattern, "{t}");
        }
        assert!(!applicable_controls("number").pattern);

        for t in ["number", "range"] {
            assert!(applicable_controls(t).numeric_bounds, "{t}");
        }
        for t in ["text", "textarea", "richtext", "markdown", "code"] {
            let controls = applicable_controls(t);
            assert!(controls.length_bounds, "{t}");
            assert!(controls.rows, "{t}");
        }
        assert!(applicable_controls("file").accept);
        assert!(!applicable_controls("text").accept);
    }

    #[test]
    fn advanced_panels_map_one_to_one() {
        assert_eq!(applicable_controls("location").advanced, Some(AdvancedPanel::Location));
        assert_eq!(
            applicable_controls("datetimerange").advanced,
            Some(AdvancedPanel::DatetimeRange)
        );
        assert_eq!(applicable_controls("piechart").advanced, Some(AdvancedPanel::Chart));
        assert_eq!(applicable_controls("datatable").advanced, Some(AdvancedPanel::DataTable));
        assert_eq!(applicable_controls("gauge").advanced, Some(AdvancedPanel::Gauge));
        assert_eq!(applicable_controls("metrics").advanced, Some(AdvancedPanel::Metrics));
        assert_eq!(applicable_controls("captcha").advanced, Some(AdvancedPanel::Captcha));
        assert_eq!(applicable_controls("code").advanced, Some(AdvancedPanel::Code));
        assert_eq!(applicable_controls("text").advanced, None);
    }

    #[test]
    fn every_catalog_type_resolves_to_a_control_set() {
        for entry in &CATALOG {
            // Must not panic, and every type keeps at least one control.
            let controls = applicable_controls(entry.field_type);
            let any = controls.placeholder
                || controls.required_toggle
                || controls.default_value
                || controls.advanced.is_some();
            assert!(any, "{}", entry.field_type);
        }
    }
}
