use dioxus::prelude::*;

use crate::charts::TrendLine;
use crate::components::controls::{DateStepper, PeriodPicker};
use crate::components::metric_card::MetricGrid;
use crate::core::catalog::{self, keys};
use crate::core::dataset;
use crate::core::format::{self, ValueKind};
use crate::core::geometry;
use crate::core::records::MetricGroup;
use crate::core::series::{self, TimePeriod};

/// Stroke radius of the headline ring, in viewbox units.
const RING_RADIUS: f64 = 80.0;

#[component]
pub fn Recovery() -> Element {
    let history = dataset::history();

    let selected_date = use_signal(|| history.latest_date().map(str::to_string));
    let period = use_signal(|| TimePeriod::Day);

    let date = selected_date();
    let record = date
        .as_deref()
        .and_then(|day| history.record(day))
        .cloned()
        .unwrap_or_default();
    let baseline = date
        .as_deref()
        .map(|day| dataset::baseline_for(history, day, period()))
        .unwrap_or_default();
    let readings = catalog::readings_for(catalog::RECOVERY_CARDS, &record, &baseline);

    let score = record.value(MetricGroup::Physiological, keys::RECOVERY);
    let hrv = format::format_value(
        ValueKind::Count,
        record.value(MetricGroup::Physiological, keys::HRV),
        Some("ms"),
    );
    let rhr = format::format_value(
        ValueKind::Count,
        record.value(MetricGroup::Physiological, keys::RHR),
        Some("bpm"),
    );

    let show_trend = !period().is_single_day();
    let trend_points = if show_trend {
        date.as_deref()
            .map(|day| {
                series::metric_series(
                    history,
                    day,
                    period(),
                    MetricGroup::Physiological,
                    keys::HRV,
                )
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    rsx! {
        section { class: "page page-recovery",
            header { class: "page__header",
                h1 { "Recovery" }
                div { class: "view-controls",
                    DateStepper { selected: selected_date }
                    PeriodPicker { period }
                }
            }

            section { class: "card recovery-headline",
                div { class: "card__header",
                    h2 { "Readiness" }
                }
                div { class: "recovery-headline__layout",
                    {recovery_ring(score)}
                    ul { class: "recovery-headline__facts",
                        li {
                            span { class: "recovery-headline__fact-label", "HRV" }
                            strong { class: "recovery-headline__fact-value", "{hrv}" }
                        }
                        li {
                            span { class: "recovery-headline__fact-label", "Resting HR" }
                            strong { class: "recovery-headline__fact-value", "{rhr}" }
                        }
                    }
                }
            }

            section { class: "card",
                div { class: "card__header",
                    h2 { "Physiology" }
                }
                MetricGrid { readings }
            }

            if show_trend {
                TrendLine {
                    title: "Heart rate variability".to_string(),
                    points: trend_points,
                    formatter: hrv_label,
                }
            }
        }
    }
}

/// Partial-circle ring rendered with the stroke-dash parameters from the
/// geometry core. A missing score draws an empty track with the zero label.
fn recovery_ring(score: Option<f64>) -> Element {
    let pct = score.unwrap_or(0.0).clamp(0.0, 100.0);
    let (dash_array, dash_offset) = geometry::dash_ring(pct / 100.0, RING_RADIUS);

    let band = if pct >= 67.0 {
        "high"
    } else if pct >= 34.0 {
        "medium"
    } else {
        "low"
    };
    let fill_class = format!("recovery-ring__fill recovery-ring__fill--{band}");
    let dash_array = format!("{dash_array:.2}");
    let dash_offset = format!("{dash_offset:.2}");
    let label = format::format_percent(pct);

    rsx! {
        svg { class: "recovery-ring", view_box: "-100 -100 200 200", role: "img",
            circle { class: "recovery-ring__track", cx: "0", cy: "0", r: "80" }
            circle {
                class: "{fill_class}",
                cx: "0",
                cy: "0",
                r: "80",
                stroke_dasharray: "{dash_array}",
                stroke_dashoffset: "{dash_offset}",
                transform: "rotate(-90)",
            }
            text {
                class: "recovery-ring__value",
                x: "0",
                y: "6",
                text_anchor: "middle",
                "{label}"
            }
            text {
                class: "recovery-ring__caption",
                x: "0",
                y: "30",
                text_anchor: "middle",
                "recovery"
            }
        }
    }
}

fn hrv_label(value: f64) -> String {
    format!("{} ms", format::format_number(value, 0))
}
