//! The metric catalog: one table driving every card on the dashboard.
//!
//! Each entry pins down where a metric lives in the daily record, how its
//! value is rendered, and its polarity. Views pick the keys they show;
//! nothing outside this table decides whether an increase is favorable.

use crate::core::compare::{self, Polarity, Tone, Trend};
use crate::core::format::{self, ValueKind};
use crate::core::records::{DailyRecord, MetricGroup};

/// Metric names as they appear in the bundled dataset.
pub mod keys {
    pub const IN_BED: &str = "In bed duration (min)";
    pub const ASLEEP: &str = "Asleep duration (min)";
    pub const AWAKE: &str = "Awake duration (min)";
    pub const LIGHT: &str = "Light sleep duration (min)";
    pub const DEEP: &str = "Deep sleep duration (min)";
    pub const REM: &str = "REM sleep duration (min)";
    pub const EFFICIENCY: &str = "Sleep efficiency %";
    pub const DISTURBANCES: &str = "Disturbances";
    pub const LATENCY: &str = "Sleep latency (min)";
    pub const SLEEP_NEED: &str = "Sleep need (min)";
    pub const SLEEP_DEBT: &str = "Sleep debt (min)";

    pub const RECOVERY: &str = "Recovery score %";
    pub const RHR: &str = "Resting heart rate (bpm)";
    pub const HRV: &str = "Heart rate variability (ms)";
    pub const RESPIRATORY: &str = "Respiratory rate (rpm)";
    pub const STRAIN: &str = "Day strain";
    pub const CALORIES: &str = "Calories (kcal)";
    pub const AVG_HR: &str = "Average heart rate (bpm)";
    pub const MAX_HR: &str = "Max heart rate (bpm)";
    pub const SPO2: &str = "Blood oxygen %";
    pub const SKIN_TEMP: &str = "Skin temp (°C)";
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSpec {
    pub key: &'static str,
    pub group: MetricGroup,
    pub title: &'static str,
    pub kind: ValueKind,
    pub unit: Option<&'static str>,
    pub polarity: Polarity,
}

/// Everything the dashboard knows how to display.
pub const CATALOG: &[MetricSpec] = &[
    MetricSpec {
        key: keys::IN_BED,
        group: MetricGroup::Sleep,
        title: "In bed",
        kind: ValueKind::Minutes,
        unit: None,
        polarity: Polarity::HigherIsBetter,
    },
    MetricSpec {
        key: keys::ASLEEP,
        group: MetricGroup::Sleep,
        title: "Asleep",
        kind: ValueKind::Minutes,
        unit: None,
        polarity: Polarity::HigherIsBetter,
    },
    MetricSpec {
        key: keys::AWAKE,
        group: MetricGroup::Sleep,
        title: "Awake",
        kind: ValueKind::Minutes,
        unit: None,
        polarity: Polarity::LowerIsBetter,
    },
    MetricSpec {
        key: keys::LIGHT,
        group: MetricGroup::Sleep,
        title: "Light sleep",
        kind: ValueKind::Minutes,
        unit: None,
        polarity: Polarity::Neutral,
    },
    MetricSpec {
        key: keys::DEEP,
        group: MetricGroup::Sleep,
        title: "Deep sleep",
        kind: ValueKind::Minutes,
        unit: None,
        polarity: Polarity::HigherIsBetter,
    },
    MetricSpec {
        key: keys::REM,
        group: MetricGroup::Sleep,
        title: "REM sleep",
        kind: ValueKind::Minutes,
        unit: None,
        polarity: Polarity::HigherIsBetter,
    },
    MetricSpec {
        key: keys::EFFICIENCY,
        group: MetricGroup::Sleep,
        title: "Sleep efficiency",
        kind: ValueKind::Percent,
        unit: None,
        polarity: Polarity::HigherIsBetter,
    },
    MetricSpec {
        key: keys::DISTURBANCES,
        group: MetricGroup::Sleep,
        title: "Disturbances",
        kind: ValueKind::Count,
        unit: None,
        polarity: Polarity::LowerIsBetter,
    },
    MetricSpec {
        key: keys::LATENCY,
        group: MetricGroup::Sleep,
        title: "Latency",
        kind: ValueKind::Minutes,
        unit: None,
        polarity: Polarity::LowerIsBetter,
    },
    MetricSpec {
        key: keys::SLEEP_NEED,
        group: MetricGroup::Sleep,
        title: "Sleep need",
        kind: ValueKind::Minutes,
        unit: None,
        polarity: Polarity::Neutral,
    },
    MetricSpec {
        key: keys::SLEEP_DEBT,
        group: MetricGroup::Sleep,
        title: "Sleep debt",
        kind: ValueKind::Minutes,
        unit: None,
        polarity: Polarity::LowerIsBetter,
    },
    MetricSpec {
        key: keys::RECOVERY,
        group: MetricGroup::Physiological,
        title: "Recovery",
        kind: ValueKind::Percent,
        unit: None,
        polarity: Polarity::HigherIsBetter,
    },
    MetricSpec {
        key: keys::RHR,
        group: MetricGroup::Physiological,
        title: "Resting heart rate",
        kind: ValueKind::Count,
        unit: Some("bpm"),
        polarity: Polarity::LowerIsBetter,
    },
    MetricSpec {
        key: keys::HRV,
        group: MetricGroup::Physiological,
        title: "Heart rate variability",
        kind: ValueKind::Count,
        unit: Some("ms"),
        polarity: Polarity::HigherIsBetter,
    },
    MetricSpec {
        key: keys::RESPIRATORY,
        group: MetricGroup::Physiological,
        title: "Respiratory rate",
        kind: ValueKind::Tenths,
        unit: Some("rpm"),
        polarity: Polarity::Neutral,
    },
    MetricSpec {
        key: keys::STRAIN,
        group: MetricGroup::Physiological,
        title: "Day strain",
        kind: ValueKind::Tenths,
        unit: None,
        polarity: Polarity::Neutral,
    },
    MetricSpec {
        key: keys::CALORIES,
        group: MetricGroup::Physiological,
        title: "Calories",
        kind: ValueKind::Count,
        unit: Some("kcal"),
        polarity: Polarity::Neutral,
    },
    MetricSpec {
        key: keys::AVG_HR,
        group: MetricGroup::Physiological,
        title: "Average heart rate",
        kind: ValueKind::Count,
        unit: Some("bpm"),
        polarity: Polarity::Neutral,
    },
    MetricSpec {
        key: keys::MAX_HR,
        group: MetricGroup::Physiological,
        title: "Max heart rate",
        kind: ValueKind::Count,
        unit: Some("bpm"),
        polarity: Polarity::Neutral,
    },
    MetricSpec {
        key: keys::SPO2,
        group: MetricGroup::Physiological,
        title: "Blood oxygen",
        kind: ValueKind::Percent,
        unit: None,
        polarity: Polarity::HigherIsBetter,
    },
    MetricSpec {
        key: keys::SKIN_TEMP,
        group: MetricGroup::Physiological,
        title: "Skin temp",
        kind: ValueKind::Tenths,
        unit: Some("°C"),
        polarity: Polarity::Neutral,
    },
];

/// Card layouts per view, in display order.
pub const SLEEP_CARDS: &[&str] = &[
    keys::IN_BED,
    keys::ASLEEP,
    keys::EFFICIENCY,
    keys::LATENCY,
    keys::DISTURBANCES,
    keys::SLEEP_NEED,
    keys::SLEEP_DEBT,
    keys::RESPIRATORY,
];

pub const RECOVERY_CARDS: &[&str] = &[
    keys::RECOVERY,
    keys::HRV,
    keys::RHR,
    keys::RESPIRATORY,
    keys::SPO2,
    keys::SKIN_TEMP,
];

pub const STRAIN_CARDS: &[&str] = &[
    keys::STRAIN,
    keys::CALORIES,
    keys::AVG_HR,
    keys::MAX_HR,
];

pub fn spec(key: &str) -> Option<&'static MetricSpec> {
    CATALOG.iter().find(|spec| spec.key == key)
}

/// A fully derived per-metric display descriptor. Recomputed on every
/// render; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReading {
    pub title: &'static str,
    pub value: String,
    pub baseline: String,
    pub trend: Trend,
    pub tone: Tone,
}

impl MetricSpec {
    pub fn reading(&self, current: &DailyRecord, baseline: &DailyRecord) -> MetricReading {
        let raw_current = current.value(self.group, self.key);
        let raw_baseline = baseline.value(self.group, self.key);
        let trend = compare::trend_between(raw_current, raw_baseline);
        MetricReading {
            title: self.title,
            value: format::format_value(self.kind, raw_current, self.unit),
            baseline: format::format_value(self.kind, raw_baseline, self.unit),
            trend,
            tone: compare::tone_for(trend, self.polarity),
        }
    }
}

/// Readings for a card layout, skipping keys the catalog doesn't know.
pub fn readings_for(
    layout: &[&str],
    current: &DailyRecord,
    baseline: &DailyRecord,
) -> Vec<MetricReading> {
    layout
        .iter()
        .filter_map(|key| spec(key))
        .map(|spec| spec.reading(current, baseline))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(pairs: &[(&str, f64)]) -> DailyRecord {
        let mut record = DailyRecord::default();
        for (key, value) in pairs {
            record.sleep_summary.insert(key.to_string(), *value);
        }
        record
    }

    #[test]
    fn every_card_key_resolves_in_the_catalog() {
        for layout in [SLEEP_CARDS, RECOVERY_CARDS, STRAIN_CARDS] {
            for key in layout {
                assert!(spec(key).is_some(), "unknown catalog key: {key}");
            }
        }
    }

    #[test]
    fn more_disturbances_reads_as_unfavorable() {
        let current = day(&[(keys::DISTURBANCES, 5.0)]);
        let baseline = day(&[(keys::DISTURBANCES, 2.0)]);
        let reading = spec(keys::DISTURBANCES)
            .unwrap()
            .reading(&current, &baseline);
        assert_eq!(reading.trend, Trend::Up);
        assert_eq!(reading.tone, Tone::Unfavorable);
        assert_eq!(reading.value, "5");
        assert_eq!(reading.baseline, "2");
    }

    #[test]
    fn missing_day_renders_duration_zero_equivalents() {
        let empty = DailyRecord::default();
        let reading = spec(keys::ASLEEP).unwrap().reading(&empty, &empty);
        assert_eq!(reading.value, "0:00");
        assert_eq!(reading.baseline, "0:00");
        assert_eq!(reading.trend, Trend::Neutral);
        assert_eq!(reading.tone, Tone::Neutral);
    }
}
