//! Period selection and trend-series extraction for the line/bar charts.

use crate::core::records::{MetricGroup, MetricHistory};

/// The fixed set of selectable time windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    Day,
    Week,
    TwoWeeks,
    Month,
    ThreeMonths,
    SixMonths,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 6] = [
        TimePeriod::Day,
        TimePeriod::Week,
        TimePeriod::TwoWeeks,
        TimePeriod::Month,
        TimePeriod::ThreeMonths,
        TimePeriod::SixMonths,
    ];

    /// Window length in calendar days.
    pub fn days(self) -> usize {
        match self {
            TimePeriod::Day => 1,
            TimePeriod::Week => 7,
            TimePeriod::TwoWeeks => 14,
            TimePeriod::Month => 30,
            TimePeriod::ThreeMonths => 90,
            TimePeriod::SixMonths => 180,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::Day => "1d",
            TimePeriod::Week => "1w",
            TimePeriod::TwoWeeks => "2w",
            TimePeriod::Month => "1m",
            TimePeriod::ThreeMonths => "3m",
            TimePeriod::SixMonths => "6m",
        }
    }

    pub fn is_single_day(self) -> bool {
        matches!(self, TimePeriod::Day)
    }
}

/// One plotted value. Only recorded dates appear; a missing day is missing
/// data, not a zero sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
}

/// Extract a named metric across the period window ending at `end`,
/// oldest first. Days that recorded nothing for the metric read as zero,
/// matching the card display rule.
pub fn metric_series(
    history: &MetricHistory,
    end: &str,
    period: TimePeriod,
    group: MetricGroup,
    key: &str,
) -> Vec<SeriesPoint> {
    history
        .window_ending(end, period.days())
        .into_iter()
        .map(|(date, record)| SeriesPoint {
            date: date.to_string(),
            value: record.value_or_zero(group, key),
        })
        .collect()
}

/// Min/max scaling of a value slice onto the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

impl ValueScale {
    pub fn from_values(values: &[f64]) -> Option<ValueScale> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(ValueScale { min, max })
    }

    /// Position of `value` in `[0, 1]`. A flat series maps to the
    /// midpoint rather than dividing by zero.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_windows_cover_the_documented_day_counts() {
        let days: Vec<usize> = TimePeriod::ALL.iter().map(|p| p.days()).collect();
        assert_eq!(days, vec![1, 7, 14, 30, 90, 180]);
    }

    #[test]
    fn extremes_map_to_the_unit_interval() {
        let scale = ValueScale::from_values(&[40.0, 55.0, 70.0]).unwrap();
        assert_eq!(scale.normalize(40.0), 0.0);
        assert_eq!(scale.normalize(70.0), 1.0);
        assert_eq!(scale.normalize(55.0), 0.5);
    }

    #[test]
    fn flat_series_sits_on_the_centerline() {
        let scale = ValueScale::from_values(&[12.0, 12.0, 12.0]).unwrap();
        assert_eq!(scale.normalize(12.0), 0.5);
    }

    #[test]
    fn empty_or_non_finite_input_has_no_scale() {
        assert!(ValueScale::from_values(&[]).is_none());
        assert!(ValueScale::from_values(&[f64::NAN]).is_none());
    }

    #[test]
    fn out_of_range_values_clamp() {
        let scale = ValueScale::from_values(&[0.0, 10.0]).unwrap();
        assert_eq!(scale.normalize(-5.0), 0.0);
        assert_eq!(scale.normalize(15.0), 1.0);
    }
}
