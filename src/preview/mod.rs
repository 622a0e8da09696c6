//! Derived values for the form preview.
//!
//! Most field types render directly from their stored attributes; the
//! computations that live here are the date/time range duration, the range
//! slider midpoint label, and the static mock datasets the analytics types
//! display. No real data source is resolved.

use chrono::{Duration, NaiveDateTime};

/// Validation message shown when the range end precedes the start.
pub const END_BEFORE_START: &str = "End date/time must be after start date/time";

/// Outcome of the date/time range duration computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationDisplay {
    /// Human-readable duration, e.g. "1 day 2 hours 30 minutes".
    Duration(String),
    /// End precedes start; duration display is suppressed.
    EndBeforeStart,
    /// One side is missing or not a parseable datetime-local value.
    Unavailable,
}

/// Parse a `datetime-local` input value (`YYYY-MM-DDThh:mm`, seconds
/// optional).
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Compute the duration between a start and end value.
///
/// Components are zero-suppressed and joined with single spaces; an exactly
/// equal pair yields "0 minutes" with no error.
pub fn range_duration(start: &str, end: &str) -> DurationDisplay {
    let (Some(start), Some(end)) = (parse_datetime_local(start), parse_datetime_local(end)) else {
        return DurationDisplay::Unavailable;
    };

    if end < start {
        return DurationDisplay::EndBeforeStart;
    }

    let total_minutes = (end - start).num_minutes();
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    let mut text = String::new();
    if days > 0 {
        text.push_str(&format!("{days} day{} ", if days != 1 { "s" } else { "" }));
    }
    if hours > 0 {
        text.push_str(&format!("{hours} hour{} ", if hours != 1 { "s" } else { "" }));
    }
    if minutes > 0 {
        text.push_str(&format!(
            "{minutes} minute{}",
            if minutes != 1 { "s" } else { "" }
        ));
    }
    if text.is_empty() {
        text.push_str("0 minutes");
    }

    DurationDisplay::Duration(text.trim_end().to_string())
}

/// Suggested end value when a start is picked with no end: start plus one
/// hour, formatted as a `datetime-local` value.
pub fn suggested_end(start: &str) -> Option<String> {
    let start = parse_datetime_local(start)?;
    Some((start + Duration::hours(1)).format("%Y-%m-%dT%H:%M").to_string())
}

fn parse_bound(value: Option<&str>, fallback: f64) -> f64 {
    value
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

/// Midpoint label rendered between the range slider's min/max labels.
///
/// The sum is floored before the halving, not after, so odd integer sums
/// yield a half-step value. This mirrors the editor's display exactly.
pub fn range_midpoint(min: Option<&str>, max: Option<&str>) -> f64 {
    (parse_bound(min, 0.0) + parse_bound(max, 100.0)).floor() / 2.0
}

/// One point in a mock chart dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: i64,
}

const fn point(name: &'static str, value: i64) -> ChartPoint {
    ChartPoint { name, value }
}

/// Illustrative data rendered by the bar chart preview.
pub const BAR_CHART_SAMPLE: [ChartPoint; 5] = [
    point("Jan", 400),
    point("Feb", 300),
    point("Mar", 600),
    point("Apr", 800),
    point("May", 500),
];

/// Illustrative data rendered by the line chart preview.
pub const LINE_CHART_SAMPLE: [ChartPoint; 5] = [
    point("Week 1", 40),
    point("Week 2", 30),
    point("Week 3", 45),
    point("Week 4", 80),
    point("Week 5", 65),
];

/// Illustrative data rendered by the pie chart preview.
pub const PIE_CHART_SAMPLE: [ChartPoint; 4] = [
    point("Group A", 400),
    point("Group B", 300),
    point("Group C", 300),
    point("Group D", 200),
];

/// Column headers for the data table preview.
pub const DATATABLE_COLUMNS: [&str; 4] = ["Name", "Category", "Value", "Status"];
