use dioxus::prelude::*;

use crate::charts::PeriodBars;
use crate::components::controls::{DateStepper, PeriodPicker};
use crate::components::metric_card::MetricGrid;
use crate::core::catalog::{self, keys};
use crate::core::dataset;
use crate::core::format;
use crate::core::records::MetricGroup;
use crate::core::series::{self, TimePeriod};

#[component]
pub fn Strain() -> Element {
    let history = dataset::history();

    let selected_date = use_signal(|| history.latest_date().map(str::to_string));
    let period = use_signal(|| TimePeriod::TwoWeeks);

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
    let readings = catalog::readings_for(catalog::STRAIN_CARDS, &record, &baseline);

    let bar_points = date
        .as_deref()
        .map(|day| {
            series::metric_series(
                history,
                day,
                period(),
                MetricGroup::Physiological,
                keys::STRAIN,
            )
        })
        .unwrap_or_default();

    rsx! {
        section { class: "page page-strain",
            header { class: "page__header",
                h1 { "Strain" }
                div { class: "view-controls",
                    DateStepper { selected: selected_date }
                    PeriodPicker { period }
                }
            }

            PeriodBars {
                title: "Day strain".to_string(),
                points: bar_points,
                formatter: strain_label,
            }

            section { class: "card",
                div { class: "card__header",
                    h2 { "Output" }
                }
                MetricGrid { readings }
            }
        }
    }
}

fn strain_label(value: f64) -> String {
    format::format_number(value, 1)
}
