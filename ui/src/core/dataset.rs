//! Access to the bundled metrics dataset.
//!
//! The dashboard ships its data as a JSON file embedded at compile time and
//! decoded exactly once. Decoding never fails the app: a malformed bundle
//! logs and degrades to an empty history, and every view already knows how
//! to render the empty state.

use once_cell::sync::Lazy;

use crate::core::records::{DailyRecord, MetricHistory};
use crate::core::series::TimePeriod;

const EMBEDDED_DATASET: &str = include_str!("../../data/metrics.json");

static HISTORY: Lazy<MetricHistory> = Lazy::new(|| {
    serde_json::from_str(EMBEDDED_DATASET).unwrap_or_else(|err| {
        eprintln!("[dataset] Failed to decode bundled metrics ({err}); starting empty");
        MetricHistory::default()
    })
});

/// The decoded read-only history.
pub fn history() -> &'static MetricHistory {
    &HISTORY
}

/// Comparison baseline for a selected date under the given period.
///
/// Single-day periods compare against the previous recorded day; longer
/// periods compare against the field-wise mean of the window ending at the
/// selected date. Either way an empty record comes back when there is
/// nothing to compare against, which displays as zero-equivalents.
pub fn baseline_for(history: &MetricHistory, date: &str, period: TimePeriod) -> DailyRecord {
    if period.is_single_day() {
        return history
            .previous_date(date)
            .and_then(|previous| history.record(previous))
            .cloned()
            .unwrap_or_default();
    }

    let window = history.window_ending(date, period.days());
    DailyRecord::mean_of(window.into_iter().map(|(_, record)| record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::keys;
    use crate::core::records::MetricGroup;

    #[test]
    fn bundled_dataset_decodes_and_is_populated() {
        let history = history();
        assert!(!history.is_empty());
        assert!(history.latest_date().is_some());
    }

    #[test]
    fn day_baseline_is_the_previous_record() {
        let history = history();
        let latest = history.latest_date().expect("dataset has dates");
        let previous = history.previous_date(latest).expect("more than one day");

        let baseline = baseline_for(history, latest, TimePeriod::Day);
        assert_eq!(&baseline, history.record(previous).unwrap());
    }

    #[test]
    fn week_baseline_averages_the_window() {
        let history = history();
        let latest = history.latest_date().expect("dataset has dates");
        let baseline = baseline_for(history, latest, TimePeriod::Week);

        let window = history.window_ending(latest, 7);
        assert!(!window.is_empty());
        let mean_in_bed = window
            .iter()
            .filter_map(|(_, record)| record.value(MetricGroup::Sleep, keys::IN_BED))
            .sum::<f64>()
            / window.len() as f64;
        let got = baseline
            .value(MetricGroup::Sleep, keys::IN_BED)
            .expect("in-bed present all week");
        assert!((got - mean_in_bed).abs() < 1e-9);
    }
}
