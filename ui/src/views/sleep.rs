use dioxus::prelude::*;

use crate::charts::{StageDonut, StageLegend, TrendLine};
use crate::components::controls::{DateStepper, PeriodPicker};
use crate::components::metric_card::MetricGrid;
use crate::core::catalog::{self, keys};
use crate::core::dataset;
use crate::core::format;
use crate::core::geometry::SleepStage;
use crate::core::records::MetricGroup;
use crate::core::series::{self, TimePeriod};

#[component]
pub fn Sleep() -> Element {
    let history = dataset::history();

    // Selection state lives here and is replaced wholesale on interaction;
    // the donut and legend only read it through the signal.
    let selected_date = use_signal(|| history.latest_date().map(str::to_string));
    let period = use_signal(|| TimePeriod::Day);
    let active_stage = use_signal(|| None::<SleepStage>);

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
    let readings = catalog::readings_for(catalog::SLEEP_CARDS, &record, &baseline);

    let show_trend = !period().is_single_day();
    let trend_points = if show_trend {
        date.as_deref()
            .map(|day| {
                series::metric_series(history, day, period(), MetricGroup::Sleep, keys::ASLEEP)
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    let baseline_caption = if period().is_single_day() {
        "vs previous day"
    } else {
        "vs period average"
    };

    rsx! {
        section { class: "page page-sleep",
            header { class: "page__header",
                h1 { "Sleep" }
                div { class: "view-controls",
                    DateStepper { selected: selected_date }
                    PeriodPicker { period }
                }
            }

            section { class: "card sleep-stages",
                div { class: "card__header",
                    h2 { "Stages" }
                    span { class: "card__meta", "{baseline_caption}" }
                }
                div { class: "sleep-stages__layout",
                    StageDonut { record: record.clone(), active: active_stage }
                    StageLegend { record: record.clone(), active: active_stage }
                }
            }

            section { class: "card",
                div { class: "card__header",
                    h2 { "Night metrics" }
                }
                MetricGrid { readings }
            }

            if show_trend {
                TrendLine {
                    title: "Asleep duration".to_string(),
                    points: trend_points,
                    formatter: minutes_label,
                }
            }
        }
    }
}

fn minutes_label(value: f64) -> String {
    format::format_minutes(Some(value))
}
