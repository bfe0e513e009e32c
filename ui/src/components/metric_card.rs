use dioxus::prelude::*;

use crate::core::catalog::MetricReading;

/// Grid of metric cards for one view.
#[component]
pub fn MetricGrid(readings: Vec<MetricReading>) -> Element {
    rsx! {
        ul { class: "metric-grid",
            for reading in readings.into_iter() {
                MetricCard { reading }
            }
        }
    }
}

/// One derived metric: current value, comparison value, and the trend
/// badge whose color comes from the reading's tone.
#[component]
pub fn MetricCard(reading: MetricReading) -> Element {
    let tone_class = reading.tone.css_class();
    let arrow = reading.trend.arrow();

    rsx! {
        li { key: "{reading.title}", class: "metric-card",
            span { class: "metric-card__label", "{reading.title}" }
            strong { class: "metric-card__value", "{reading.value}" }
            span { class: "metric-trend {tone_class}",
                span { class: "metric-trend__arrow", aria_hidden: "true", "{arrow}" }
                span { class: "metric-trend__baseline", "vs {reading.baseline}" }
            }
        }
    }
}
