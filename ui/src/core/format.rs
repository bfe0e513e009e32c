//! Formatting helpers for presenting metrics.

use time::macros::format_description;

use crate::core::records::parse_date;

/// How a raw metric value is rendered on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Duration in minutes, shown as `H:MM`.
    Minutes,
    /// Already expressed on a 0–100 scale, shown as `N%`.
    Percent,
    /// Whole number.
    Count,
    /// One decimal place (strain score, respiratory rate, skin temp).
    Tenths,
}

/// `H:MM` rendering for minute durations. Absent values display as the
/// zero-equivalent rather than a gap.
pub fn format_minutes(value: Option<f64>) -> String {
    let total = value.unwrap_or(0.0).max(0.0).round() as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    format!("{value:.0}%")
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    format!("{value:.decimals$}")
}

/// Render a possibly-absent raw value according to its kind, with an
/// optional unit suffix (`"52 bpm"`). Absent values display as zero.
pub fn format_value(kind: ValueKind, value: Option<f64>, unit: Option<&str>) -> String {
    let base = match kind {
        ValueKind::Minutes => format_minutes(value),
        ValueKind::Percent => format_percent(value.unwrap_or(0.0)),
        ValueKind::Count => format_number(value.unwrap_or(0.0), 0),
        ValueKind::Tenths => format_number(value.unwrap_or(0.0), 1),
    };
    match unit {
        Some(unit) if kind != ValueKind::Percent => format!("{base} {unit}"),
        _ => base,
    }
}

/// Compact date badge (`Jul 31`) from a `YYYY-MM-DD` key. Malformed input
/// falls through unchanged.
pub fn short_date(raw: &str) -> String {
    parse_date(raw)
        .and_then(|date| {
            date.format(format_description!("[month repr:short] [day padding:none]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

/// Full date badge (`Jul 31, 2025`) for the date stepper.
pub fn long_date(raw: &str) -> String {
    parse_date(raw)
        .and_then(|date| {
            date.format(format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_render_as_hours_and_padded_minutes() {
        assert_eq!(format_minutes(Some(0.0)), "0:00");
        assert_eq!(format_minutes(Some(90.0)), "1:30");
        assert_eq!(format_minutes(Some(462.0)), "7:42");
        assert_eq!(format_minutes(None), "0:00");
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        assert_eq!(format_minutes(Some(-5.0)), "0:00");
    }

    #[test]
    fn absent_values_render_zero_equivalents() {
        assert_eq!(format_value(ValueKind::Percent, None, None), "0%");
        assert_eq!(format_value(ValueKind::Count, None, None), "0");
        assert_eq!(format_value(ValueKind::Minutes, None, None), "0:00");
    }

    #[test]
    fn units_suffix_everything_except_percentages() {
        assert_eq!(
            format_value(ValueKind::Count, Some(52.0), Some("bpm")),
            "52 bpm"
        );
        assert_eq!(
            format_value(ValueKind::Tenths, Some(14.62), Some("rpm")),
            "14.6 rpm"
        );
        assert_eq!(format_value(ValueKind::Percent, Some(93.0), None), "93%");
    }

    #[test]
    fn date_badges_shorten_dataset_keys() {
        assert_eq!(short_date("2025-07-31"), "Jul 31");
        assert_eq!(long_date("2025-07-31"), "Jul 31, 2025");
        assert_eq!(short_date("not-a-date"), "not-a-date");
    }
}
