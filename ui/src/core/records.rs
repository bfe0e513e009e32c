//! Read-only daily-record model shared by every dashboard view.
//!
//! A [`MetricHistory`] is decoded once from the bundled dataset and never
//! mutated afterwards. Each day carries two groups of named metrics
//! (`sleep_summary`, `physiological_summary`); values are looked up by their
//! human-readable name, and a name the day never recorded reads as zero at
//! the display layer.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};

use serde::{Deserialize, Serialize};
use time::{format_description::FormatItem, macros::format_description, Date, Duration};

/// `YYYY-MM-DD`, the key format of the bundled dataset.
const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Which of the two nested metric groups a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricGroup {
    Sleep,
    Physiological,
}

/// One date's aggregated health metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(default)]
    pub sleep_summary: BTreeMap<String, f64>,
    #[serde(default)]
    pub physiological_summary: BTreeMap<String, f64>,
}

impl DailyRecord {
    pub fn group(&self, group: MetricGroup) -> &BTreeMap<String, f64> {
        match group {
            MetricGroup::Sleep => &self.sleep_summary,
            MetricGroup::Physiological => &self.physiological_summary,
        }
    }

    /// Raw lookup; `None` when the day never recorded the metric.
    pub fn value(&self, group: MetricGroup, key: &str) -> Option<f64> {
        self.group(group).get(key).copied()
    }

    /// Display lookup; absent metrics read as zero.
    pub fn value_or_zero(&self, group: MetricGroup, key: &str) -> f64 {
        self.value(group, key).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.sleep_summary.is_empty() && self.physiological_summary.is_empty()
    }

    /// Field-wise mean across a set of records, used as the comparison
    /// baseline for multi-day periods.
    ///
    /// A metric contributes only on days where it was recorded; an absent
    /// value is missing data, not a zero measurement, and must not drag the
    /// mean down.
    pub fn mean_of<'a>(records: impl IntoIterator<Item = &'a DailyRecord>) -> DailyRecord {
        let mut sleep: BTreeMap<String, (f64, u32)> = BTreeMap::new();
        let mut physio: BTreeMap<String, (f64, u32)> = BTreeMap::new();

        for record in records {
            for (key, value) in &record.sleep_summary {
                let slot = sleep.entry(key.clone()).or_insert((0.0, 0));
                slot.0 += value;
                slot.1 += 1;
            }
            for (key, value) in &record.physiological_summary {
                let slot = physio.entry(key.clone()).or_insert((0.0, 0));
                slot.0 += value;
                slot.1 += 1;
            }
        }

        let collapse = |sums: BTreeMap<String, (f64, u32)>| {
            sums.into_iter()
                .map(|(key, (sum, count))| (key, sum / count.max(1) as f64))
                .collect()
        };

        DailyRecord {
            sleep_summary: collapse(sleep),
            physiological_summary: collapse(physio),
        }
    }
}

/// Date-keyed map of daily records. Keys sort lexicographically, which for
/// `YYYY-MM-DD` is also chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricHistory {
    days: BTreeMap<String, DailyRecord>,
}

impl MetricHistory {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn latest_date(&self) -> Option<&str> {
        self.days.keys().next_back().map(String::as_str)
    }

    pub fn record(&self, date: &str) -> Option<&DailyRecord> {
        self.days.get(date)
    }

    /// The most recent recorded date strictly before `date`.
    pub fn previous_date(&self, date: &str) -> Option<&str> {
        self.days
            .range::<str, _>((Unbounded, Excluded(date)))
            .next_back()
            .map(|(key, _)| key.as_str())
    }

    /// The earliest recorded date strictly after `date`.
    pub fn next_date(&self, date: &str) -> Option<&str> {
        self.days
            .range::<str, _>((Excluded(date), Unbounded))
            .next()
            .map(|(key, _)| key.as_str())
    }

    /// Records inside the calendar window of `days` days ending at `end`
    /// (inclusive), oldest first. Days without a record are simply absent.
    pub fn window_ending<'a>(&'a self, end: &'a str, days: usize) -> Vec<(&'a str, &'a DailyRecord)> {
        if days <= 1 {
            return self
                .record(end)
                .map(|record| vec![(end, record)])
                .unwrap_or_default();
        }

        let Some(end_date) = parse_date(end) else {
            // Malformed selection; degrade to the single record if present.
            return self
                .record(end)
                .map(|record| vec![(end, record)])
                .unwrap_or_default();
        };

        let start = format_date(end_date - Duration::days(days as i64 - 1));
        self.days
            .range::<str, _>((Included(start.as_str()), Included(end)))
            .map(|(key, record)| (key.as_str(), record))
            .collect()
    }
}

pub(crate) fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw, DATE_FORMAT).ok()
}

pub(crate) fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, f64)]) -> DailyRecord {
        DailyRecord {
            sleep_summary: pairs
                .iter()
                .map(|(key, value)| (key.to_string(), *value))
                .collect(),
            physiological_summary: BTreeMap::new(),
        }
    }

    fn history(dates: &[&str]) -> MetricHistory {
        MetricHistory {
            days: dates
                .iter()
                .map(|date| (date.to_string(), record(&[("Disturbances", 2.0)])))
                .collect(),
        }
    }

    #[test]
    fn absent_metric_reads_as_zero() {
        let day = record(&[("Disturbances", 3.0)]);
        assert_eq!(day.value_or_zero(MetricGroup::Sleep, "Disturbances"), 3.0);
        assert_eq!(day.value_or_zero(MetricGroup::Sleep, "Sleep latency (min)"), 0.0);
        assert!(day.value(MetricGroup::Sleep, "Sleep latency (min)").is_none());
    }

    #[test]
    fn date_stepping_walks_recorded_days() {
        let history = history(&["2025-06-01", "2025-06-02", "2025-06-04"]);
        assert_eq!(history.latest_date(), Some("2025-06-04"));
        assert_eq!(history.previous_date("2025-06-04"), Some("2025-06-02"));
        assert_eq!(history.next_date("2025-06-02"), Some("2025-06-04"));
        assert_eq!(history.previous_date("2025-06-01"), None);
        assert_eq!(history.next_date("2025-06-04"), None);
    }

    #[test]
    fn window_is_calendar_bounded_and_sparse() {
        let history = history(&["2025-05-20", "2025-06-01", "2025-06-02", "2025-06-04"]);
        let window = history.window_ending("2025-06-04", 7);
        let dates: Vec<&str> = window.iter().map(|(date, _)| *date).collect();
        assert_eq!(dates, vec!["2025-06-01", "2025-06-02", "2025-06-04"]);
    }

    #[test]
    fn single_day_window_is_just_the_record() {
        let history = history(&["2025-06-01", "2025-06-02"]);
        let window = history.window_ending("2025-06-02", 1);
        assert_eq!(window.len(), 1);
        assert!(history.window_ending("2025-06-03", 1).is_empty());
    }

    #[test]
    fn mean_skips_days_that_never_recorded_a_metric() {
        let with = record(&[("Disturbances", 4.0), ("Sleep latency (min)", 10.0)]);
        let without = record(&[("Disturbances", 2.0)]);
        let mean = DailyRecord::mean_of([&with, &without]);
        assert_eq!(mean.value(MetricGroup::Sleep, "Disturbances"), Some(3.0));
        assert_eq!(mean.value(MetricGroup::Sleep, "Sleep latency (min)"), Some(10.0));
    }
}
