//! Donut-chart geometry for the sleep-stage breakdown.
//!
//! Angles are measured in degrees clockwise from 12 o'clock, so a point on
//! the circle is `(radius * sin θ, -radius * cos θ)` in SVG coordinates
//! (y grows downward). All paths are emitted around the origin; the chart
//! component translates the whole group to its centre.
//!
//! Layout is deterministic: buckets are walked in their fixed order and the
//! same input always produces byte-identical path strings, so repeated
//! renders never jitter.

use std::f64::consts::TAU;

use crate::core::catalog::keys;
use crate::core::records::{DailyRecord, MetricGroup};

/// How far an active wedge is lifted out along its bisector, in viewbox
/// units.
const ACTIVE_LIFT: f64 = 7.0;

/// The fixed, ordered set of sleep stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepStage {
    Awake,
    Light,
    Deep,
    Rem,
}

impl SleepStage {
    /// Stable display order; the donut, the legend, and the dataset tests
    /// all walk stages in this order.
    pub const ORDER: [SleepStage; 4] = [
        SleepStage::Awake,
        SleepStage::Light,
        SleepStage::Deep,
        SleepStage::Rem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SleepStage::Awake => "Awake",
            SleepStage::Light => "Light",
            SleepStage::Deep => "Deep",
            SleepStage::Rem => "REM",
        }
    }

    /// Metric name of this stage's duration in a daily record.
    pub fn record_key(self) -> &'static str {
        match self {
            SleepStage::Awake => keys::AWAKE,
            SleepStage::Light => keys::LIGHT,
            SleepStage::Deep => keys::DEEP,
            SleepStage::Rem => keys::REM,
        }
    }

    /// CSS modifier slug (`stage-donut__wedge--deep` and friends).
    pub fn slug(self) -> &'static str {
        match self {
            SleepStage::Awake => "awake",
            SleepStage::Light => "light",
            SleepStage::Deep => "deep",
            SleepStage::Rem => "rem",
        }
    }
}

/// One stage's duration for the selected day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageBucket {
    pub stage: SleepStage,
    pub minutes: f64,
}

/// Stage durations of a record in display order, zero-defaulted.
pub fn stage_buckets(record: &DailyRecord) -> [StageBucket; 4] {
    SleepStage::ORDER.map(|stage| StageBucket {
        stage,
        minutes: record.value_or_zero(MetricGroup::Sleep, stage.record_key()),
    })
}

/// One wedge of the donut, fully derived from its bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub stage: SleepStage,
    pub minutes: f64,
    /// Fraction of the denominator, in `[0, 1]`.
    pub share: f64,
    /// Degrees clockwise from 12 o'clock.
    pub start_angle: f64,
    pub sweep_angle: f64,
    /// Whether the wedge spans more than half the circle (SVG large-arc
    /// flag).
    pub large_arc: bool,
    /// Closed wedge path (`M 0 0 L … A … Z`), empty for a zero sweep.
    pub path: String,
    /// Stroke-dash alternative for partial-circle rendering.
    pub dash_array: f64,
    pub dash_offset: f64,
    /// Translation applied when this wedge is the active selection.
    pub offset: (f64, f64),
}

/// Lay the buckets out around the ring.
///
/// The denominator is the externally supplied time-in-bed total when it is
/// positive, otherwise the bucket sum. A zero denominator yields no
/// segments at all rather than a division fault. Selection is owned by the
/// caller; pass the currently active stage to get its lift offset.
pub fn ring_segments(
    buckets: &[StageBucket],
    radius: f64,
    in_bed_total: Option<f64>,
    active: Option<SleepStage>,
) -> Vec<ArcSegment> {
    let sum: f64 = buckets.iter().map(|bucket| bucket.minutes.max(0.0)).sum();
    let total = match in_bed_total {
        Some(total) if total > 0.0 => total,
        _ => sum,
    };
    if total <= 0.0 {
        return Vec::new();
    }

    let circumference = TAU * radius;
    let mut start = 0.0_f64;

    buckets
        .iter()
        .map(|bucket| {
            let minutes = bucket.minutes.max(0.0);
            let share = minutes / total;
            let sweep = share * 360.0;
            let path = wedge_path(radius, start, sweep);
            let offset = if active == Some(bucket.stage) && sweep > 0.0 {
                let bisector = (start + sweep / 2.0).to_radians();
                (ACTIVE_LIFT * bisector.sin(), -ACTIVE_LIFT * bisector.cos())
            } else {
                (0.0, 0.0)
            };

            let segment = ArcSegment {
                stage: bucket.stage,
                minutes,
                share,
                start_angle: start,
                sweep_angle: sweep,
                large_arc: sweep > 180.0,
                path,
                dash_array: circumference,
                dash_offset: circumference * (1.0 - share),
                offset,
            };
            start += sweep;
            segment
        })
        .collect()
}

/// Stroke-dash parameters for a single-value partial circle (recovery
/// ring). Returns `(dash_array, dash_offset)`.
pub fn dash_ring(share: f64, radius: f64) -> (f64, f64) {
    let circumference = TAU * radius;
    let share = if share.is_finite() {
        share.clamp(0.0, 1.0)
    } else {
        0.0
    };
    (circumference, circumference * (1.0 - share))
}

fn point_at(radius: f64, angle_deg: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (radius * angle.sin(), -radius * angle.cos())
}

fn wedge_path(radius: f64, start: f64, sweep: f64) -> String {
    if sweep <= 0.0 {
        return String::new();
    }
    // An arc whose endpoints coincide renders nothing, so a wedge covering
    // the whole circle is split into two half-circle arcs.
    if sweep >= 360.0 {
        let (x1, y1) = point_at(radius, start);
        let (x2, y2) = point_at(radius, start + 180.0);
        return format!(
            "M 0 0 L {x1:.3} {y1:.3} A {radius:.3} {radius:.3} 0 0 1 {x2:.3} {y2:.3} \
             A {radius:.3} {radius:.3} 0 0 1 {x1:.3} {y1:.3} Z"
        );
    }

    let (x1, y1) = point_at(radius, start);
    let (x2, y2) = point_at(radius, start + sweep);
    let large = if sweep > 180.0 { 1 } else { 0 };
    format!(
        "M 0 0 L {x1:.3} {y1:.3} A {radius:.3} {radius:.3} 0 {large} 1 {x2:.3} {y2:.3} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets(awake: f64, light: f64, deep: f64, rem: f64) -> [StageBucket; 4] {
        [
            StageBucket {
                stage: SleepStage::Awake,
                minutes: awake,
            },
            StageBucket {
                stage: SleepStage::Light,
                minutes: light,
            },
            StageBucket {
                stage: SleepStage::Deep,
                minutes: deep,
            },
            StageBucket {
                stage: SleepStage::Rem,
                minutes: rem,
            },
        ]
    }

    #[test]
    fn sweeps_sum_to_a_full_circle() {
        let segments = ring_segments(&buckets(30.0, 200.0, 50.0, 80.0), 90.0, None, None);
        let sum: f64 = segments.iter().map(|segment| segment.sweep_angle).sum();
        assert!((sum - 360.0).abs() < 1e-9, "sweep sum was {sum}");
    }

    #[test]
    fn scenario_shares_match_expected_rounding() {
        let segments = ring_segments(&buckets(30.0, 200.0, 50.0, 80.0), 90.0, Some(360.0), None);
        let share_pct: Vec<f64> = segments
            .iter()
            .map(|segment| (segment.share * 1000.0).round() / 10.0)
            .collect();
        assert_eq!(share_pct, vec![8.3, 55.6, 13.9, 22.2]);
    }

    #[test]
    fn zero_total_draws_nothing() {
        assert!(ring_segments(&buckets(0.0, 0.0, 0.0, 0.0), 90.0, None, None).is_empty());
        assert!(ring_segments(&buckets(0.0, 0.0, 0.0, 0.0), 90.0, Some(0.0), None).is_empty());
    }

    #[test]
    fn layout_is_order_stable_and_byte_identical() {
        let input = buckets(31.0, 187.0, 92.0, 104.0);
        let first = ring_segments(&input, 90.0, Some(414.0), None);
        let second = ring_segments(&input, 90.0, Some(414.0), None);
        assert_eq!(first, second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.path, b.path);
        }
    }

    #[test]
    fn start_angles_are_cumulative() {
        let segments = ring_segments(&buckets(30.0, 200.0, 50.0, 80.0), 90.0, None, None);
        let mut expected_start = 0.0;
        for segment in &segments {
            assert!((segment.start_angle - expected_start).abs() < 1e-9);
            expected_start += segment.sweep_angle;
        }
    }

    #[test]
    fn majority_wedge_sets_the_large_arc_flag() {
        let segments = ring_segments(&buckets(10.0, 300.0, 20.0, 30.0), 90.0, None, None);
        assert!(!segments[0].large_arc);
        assert!(segments[1].large_arc);
    }

    #[test]
    fn single_bucket_covers_the_circle_without_degenerating() {
        let segments = ring_segments(&buckets(0.0, 360.0, 0.0, 0.0), 90.0, None, None);
        let light = &segments[1];
        assert!((light.sweep_angle - 360.0).abs() < 1e-9);
        assert!(!light.path.is_empty());
        // Two arc commands, so the endpoints never coincide.
        assert_eq!(light.path.matches('A').count(), 2);
    }

    #[test]
    fn only_the_active_stage_is_lifted() {
        let segments = ring_segments(
            &buckets(30.0, 200.0, 50.0, 80.0),
            90.0,
            None,
            Some(SleepStage::Deep),
        );
        for segment in &segments {
            if segment.stage == SleepStage::Deep {
                assert!(segment.offset != (0.0, 0.0));
            } else {
                assert_eq!(segment.offset, (0.0, 0.0));
            }
        }
    }

    #[test]
    fn dash_parameters_cover_the_remainder_of_the_ring() {
        let circumference = TAU * 90.0;
        let (array, offset) = dash_ring(0.25, 90.0);
        assert!((array - circumference).abs() < 1e-9);
        assert!((offset - circumference * 0.75).abs() < 1e-9);

        // Out-of-range and non-finite shares clamp instead of faulting.
        assert_eq!(dash_ring(2.0, 90.0).1, 0.0);
        let (_, nan_offset) = dash_ring(f64::NAN, 90.0);
        assert!((nan_offset - circumference).abs() < 1e-9);
    }

    #[test]
    fn external_total_scales_shares_down() {
        // Buckets sum to 300 but the night spans 400 minutes in bed; the
        // ring must leave the gap unfilled rather than stretch the stages.
        let segments = ring_segments(&buckets(20.0, 180.0, 40.0, 60.0), 90.0, Some(400.0), None);
        let sum: f64 = segments.iter().map(|segment| segment.sweep_angle).sum();
        assert!((sum - 270.0).abs() < 1e-9);
    }
}
