//! Integrity checks for the bundled metrics dataset.
//!
//! The dashboard trusts the bundle blindly at runtime (absent values read
//! as zero, decode failure degrades to an empty history), so this test is
//! where data mistakes are supposed to surface: a stage breakdown that no
//! longer sums to the in-bed total would silently skew every donut.

use ui::core::catalog::keys;
use ui::core::geometry::SleepStage;
use ui::core::records::{MetricGroup, MetricHistory};

const DATASET: &str = include_str!("../data/metrics.json");

fn load() -> MetricHistory {
    serde_json::from_str(DATASET).expect("bundled dataset decodes")
}

#[test]
fn dataset_is_present_and_plausibly_sized() {
    let history = load();
    assert!(
        history.len() >= 90,
        "expected at least a quarter of data, got {} days",
        history.len()
    );
}

#[test]
fn every_key_is_a_well_formed_date() {
    let history = load();
    for date in history.dates() {
        let bytes = date.as_bytes();
        assert_eq!(bytes.len(), 10, "bad date key: {date}");
        assert_eq!(bytes[4], b'-', "bad date key: {date}");
        assert_eq!(bytes[7], b'-', "bad date key: {date}");
        assert!(
            date.chars().all(|c| c.is_ascii_digit() || c == '-'),
            "bad date key: {date}"
        );
    }
}

#[test]
fn stage_durations_sum_to_the_in_bed_total() {
    let history = load();
    for date in history.dates() {
        let record = history.record(date).unwrap();
        let in_bed = record.value_or_zero(MetricGroup::Sleep, keys::IN_BED);
        let stage_sum: f64 = SleepStage::ORDER
            .iter()
            .map(|stage| record.value_or_zero(MetricGroup::Sleep, stage.record_key()))
            .sum();
        assert!(
            (stage_sum - in_bed).abs() < 1e-6,
            "{date}: stages sum to {stage_sum}, in bed {in_bed}"
        );
    }
}

#[test]
fn asleep_is_in_bed_minus_awake() {
    let history = load();
    for date in history.dates() {
        let record = history.record(date).unwrap();
        let in_bed = record.value_or_zero(MetricGroup::Sleep, keys::IN_BED);
        let awake = record.value_or_zero(MetricGroup::Sleep, keys::AWAKE);
        let asleep = record.value_or_zero(MetricGroup::Sleep, keys::ASLEEP);
        assert!(
            (asleep - (in_bed - awake)).abs() < 1e-6,
            "{date}: asleep {asleep} != in bed {in_bed} - awake {awake}"
        );
    }
}

#[test]
fn every_recorded_value_is_finite_and_non_negative() {
    let history = load();
    for date in history.dates() {
        let record = history.record(date).unwrap();
        for group in [MetricGroup::Sleep, MetricGroup::Physiological] {
            for (name, value) in record.group(group) {
                assert!(
                    value.is_finite() && *value >= 0.0,
                    "{date}: {name} = {value}"
                );
            }
        }
    }
}

#[test]
fn percent_metrics_stay_on_the_percent_scale() {
    let history = load();
    for date in history.dates() {
        let record = history.record(date).unwrap();
        for (group, key) in [
            (MetricGroup::Sleep, keys::EFFICIENCY),
            (MetricGroup::Physiological, keys::RECOVERY),
            (MetricGroup::Physiological, keys::SPO2),
        ] {
            if let Some(value) = record.value(group, key) {
                assert!(
                    (0.0..=100.0).contains(&value),
                    "{date}: {key} = {value} out of range"
                );
            }
        }
    }
}
