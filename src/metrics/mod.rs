//! Metrics estimator: heuristic scores derived from the field list.
//!
//! The formulas are the contract. They are deterministic folds over the
//! fields with no external data, and the tests reproduce the arithmetic
//! exactly rather than asserting business meaning.

use std::collections::BTreeMap;

use crate::models::FieldDefinition;

/// Field types that raise the complexity score.
pub const ADVANCED_TYPES: [&str; 7] = [
    "richtext",
    "markdown",
    "code",
    "location",
    "datetimerange",
    "signature",
    "address",
];

/// Field types that depress the predicted conversion rate.
pub const COMPLEX_TYPES: [&str; 6] = [
    "richtext",
    "markdown",
    "code",
    "location",
    "signature",
    "address",
];

/// Form complexity score in [0, 100]. An empty form scores 0.
pub fn complexity_score(fields: &[FieldDefinition]) -> u32 {
    if fields.is_empty() {
        return 0;
    }

    let mut score = (fields.len() as u32 * 5).min(40);

    score += fields.iter().filter(|f| f.is_required()).count() as u32 * 2;

    for field in fields {
        if field.has_pattern() {
            score += 3;
        }
        if field.has_length_bounds() {
            score += 2;
        }
        if field.has_numeric_bounds() {
            score += 2;
        }
        if field.has_range_validation() {
            score += 3;
        }
        if ADVANCED_TYPES.contains(&field.field_type.as_str()) {
            score += 4;
        }
    }

    score.min(100)
}

/// Estimated completion time in seconds. An empty form takes 0.
pub fn estimated_completion_time(fields: &[FieldDefinition]) -> u32 {
    let mut time = 0;

    for field in fields {
        time += match field.field_type.as_str() {
            "text" | "email" | "tel" | "url" | "password" => 4,
            "textarea" | "richtext" | "markdown" | "code" => 20,
            "select" | "radio" | "checkbox" => 3,
            "date" | "time" | "datetime" => 5,
            "daterange" | "datetimerange" => 8,
            "location" | "address" => 15,
            "signature" => 10,
            _ => 3,
        };

        // Required fields get filled in more carefully.
        if field.is_required() {
            time += 2;
        }
        if field.has_pattern() || field.has_length_bounds() || field.has_numeric_bounds() {
            time += 2;
        }
    }

    time
}

/// Predicted conversion rate as a percentage, clamped to [20, 95] for
/// non-empty forms. An empty form scores 0.
pub fn predicted_conversion_rate(fields: &[FieldDefinition]) -> f64 {
    if fields.is_empty() {
        return 0.0;
    }

    let mut rate = 90.0;

    rate -= (fields.len() as f64 * 2.0).min(30.0);
    rate -= fields.iter().filter(|f| f.is_required()).count() as f64 * 1.5;

    for field in fields {
        if COMPLEX_TYPES.contains(&field.field_type.as_str()) {
            rate -= 3.0;
        }
        if field.has_pattern() {
            rate -= 2.0;
        }
        if field.has_length_bounds() {
            rate -= 1.0;
        }
        if field.has_numeric_bounds() {
            rate -= 1.0;
        }
    }

    rate.min(95.0).max(20.0)
}

/// Count of fields per type, in stable type order.
pub fn field_type_distribution(fields: &[FieldDefinition]) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for field in fields {
        *distribution.entry(field.field_type.clone()).or_insert(0) += 1;
    }
    distribution
}

/// Share of required and validated fields, as rounded percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationAnalysis {
    pub required_percentage: u32,
    pub validated_percentage: u32,
}

pub fn validation_analysis(fields: &[FieldDefinition]) -> ValidationAnalysis {
    let total = fields.len();
    if total == 0 {
        return ValidationAnalysis {
            required_percentage: 0,
            validated_percentage: 0,
        };
    }

    let required = fields.iter().filter(|f| f.is_required()).count();
    let validated = fields.iter().filter(|f| f.has_validation()).count();

    let percent = |count: usize| ((count as f64 / total as f64) * 100.0).round() as u32;
    ValidationAnalysis {
        required_percentage: percent(required),
        validated_percentage: percent(validated),
    }
}

/// Human-readable completion time, e.g. "45 seconds" or "2 mins 5 secs".
pub fn format_time(seconds: u32) -> String {
    if seconds < 60 {
        return format!("{seconds} seconds");
    }
    let minutes = seconds / 60;
    let remaining = seconds % 60;
    format!(
        "{minutes} min{} {remaining} sec{}",
        if minutes != 1 { "s" } else { "" },
        if remaining != 1 { "s" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldDefinition;

    fn field(field_type: &str) -> FieldDefinition {
        FieldDefinition::new(format!("field-{field_type}"), field_type, field_type)
    }

    fn required(field_type: &str) -> FieldDefinition {
        let mut f = field(field_type);
        f.required = Some(true);
        f
    }

    #[test]
    fn empty_form_scores_zero_everywhere() {
        assert_eq!(complexity_score(&[]), 0);
        assert_eq!(estimated_completion_time(&[]), 0);
        assert_eq!(predicted_conversion_rate(&[]), 0.0);
    }

    #[test]
    fn complexity_base_is_five_per_field_capped_at_forty() {
        let fields: Vec<_> = (0..3).map(|_| field("date")).collect();
        assert_eq!(complexity_score(&fields), 15);

        let fields: Vec<_> = (0..12).map(|_| field("date")).collect();
        assert_eq!(complexity_score(&fields), 40);
    }

    #[test]
    fn complexity_adds_validation_and_advanced_bonuses() {
        let mut f = required("text");
        f.pattern = Some("[A-Z]+".to_string());
        f.min_length = Some("2".to_string());
        // 5 base + 2 required + 3 pattern + 2 length bounds
        assert_eq!(complexity_score(&[f]), 12);

        let mut dtr = field("datetimerange");
        dtr.validate_range = Some(true);
        // 5 base + 3 validate range + 4 advanced type
        assert_eq!(complexity_score(&[dtr]), 12);
    }

    #[test]
    fn complexity_is_clamped_to_one_hundred() {
        let fields: Vec<_> = (0..30)
            .map(|_| {
                let mut f = required("richtext");
                f.min_length = Some("1".to_string());
                f
            })
            .collect();
        assert_eq!(complexity_score(&fields), 100);
    }

    #[test]
    fn complexity_never_decreases_when_adding_a_field() {
        let mut fields = vec![required("text"), field("select")];
        let before = complexity_score(&fields);
        fields.push(field("email"));
        assert!(complexity_score(&fields) >= before);
        assert!(complexity_score(&fields) <= 100);
    }

    #[test]
    fn completion_time_uses_per_type_bases() {
        assert_eq!(estimated_completion_time(&[field("text")]), 4);
        assert_eq!(estimated_completion_time(&[field("textarea")]), 20);
        assert_eq!(estimated_completion_time(&[field("select")]), 3);
        assert_eq!(estimated_completion_time(&[field("datetime")]), 5);
        assert_eq!(estimated_completion_time(&[field("daterange")]), 8);
        assert_eq!(estimated_completion_time(&[field("address")]), 15);
        assert_eq!(estimated_completion_time(&[field("signature")]), 10);
        assert_eq!(estimated_completion_time(&[field("color")]), 3);
    }

    #[test]
    fn completion_time_adds_required_and_constraint_seconds() {
        let mut f = required("email");
        f.pattern = Some(".+@.+".to_string());
        // 4 base + 2 required + 2 constraint
        assert_eq!(estimated_completion_time(&[f]), 8);
    }

    #[test]
    fn conversion_rate_formula_is_exact() {
        // One plain text field: 90 - 2 = 88.
        assert_eq!(predicted_conversion_rate(&[field("text")]), 88.0);

        // Required signature: 90 - 2 - 1.5 - 3 = 83.5.
        assert_eq!(predicted_conversion_rate(&[required("signature")]), 83.5);
    }

    #[test]
    fn conversion_rate_stays_in_bounds_and_required_fields_lower_it() {
        let mut fields = vec![field("text")];
        let mut previous = predicted_conversion_rate(&fields);
        for _ in 0..25 {
            fields.push(required("richtext"));
            let rate = predicted_conversion_rate(&fields);
            assert!(rate <= previous);
            assert!((20.0..=95.0).contains(&rate));
            previous = rate;
        }
        assert_eq!(previous, 20.0);
    }

    #[test]
    fn distribution_counts_per_type() {
        let fields = vec![field("text"), field("text"), field("select")];
        let dist = field_type_distribution(&fields);
        assert_eq!(dist["text"], 2);
        assert_eq!(dist["select"], 1);
        assert_eq!(dist.len(), 2);
    }

    #[test]
    fn validation_analysis_rounds_percentages() {
        let mut pattern = field("text");
        pattern.pattern = Some("\\d+".to_string());
        let fields = vec![required("text"), pattern, field("select")];
        let analysis = validation_analysis(&fields);
        assert_eq!(analysis.required_percentage, 33);
        assert_eq!(analysis.validated_percentage, 33);
    }

    #[test]
    fn format_time_pluralizes() {
        assert_eq!(format_time(45), "45 seconds");
        assert_eq!(format_time(61), "1 min 1 sec");
        assert_eq!(format_time(125), "2 mins 5 secs");
    }
}
