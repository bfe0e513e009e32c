use dioxus::prelude::*;

use crate::components::controls::{DateStepper, PeriodPicker};
use crate::components::export::ExportCard;
use crate::core::catalog::{self, keys, MetricReading};
use crate::core::dataset;
use crate::core::format;
use crate::core::records::{DailyRecord, MetricGroup};
use crate::core::series::TimePeriod;
use crate::t;

#[cfg(debug_assertions)]
fn log_overview_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Overview render (lang_marker={lang})");
}

#[component]
pub fn Overview() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    #[cfg(debug_assertions)]
    {
        log_overview_render(&_lang_current);
    }

    let history = dataset::history();

    let selected_date = use_signal(|| history.latest_date().map(str::to_string));
    let period = use_signal(|| TimePeriod::Week);

    let date = selected_date();
    let record = date
        .as_deref()
        .and_then(|day| history.record(day))
        .cloned()
        .unwrap_or_default();
    // Headline tiles always compare against yesterday, whatever the
    // period picker says; the highlights card covers the period.
    let day_baseline = date
        .as_deref()
        .map(|day| dataset::baseline_for(history, day, TimePeriod::Day))
        .unwrap_or_default();

    let tiles: Vec<MetricReading> = [keys::ASLEEP, keys::RECOVERY, keys::STRAIN]
        .iter()
        .filter_map(|key| catalog::spec(key))
        .map(|spec| spec.reading(&record, &day_baseline))
        .collect();

    let window: Vec<(String, DailyRecord)> = date
        .as_deref()
        .map(|day| {
            history
                .window_ending(day, period().days())
                .into_iter()
                .map(|(date, record)| (date.to_string(), record.clone()))
                .collect()
        })
        .unwrap_or_default();
    let day_count = window.len();

    let window_mean = DailyRecord::mean_of(window.iter().map(|(_, record)| record));
    let avg_asleep = format::format_minutes(window_mean.value(MetricGroup::Sleep, keys::ASLEEP));
    let avg_recovery =
        format::format_percent(window_mean.value_or_zero(MetricGroup::Physiological, keys::RECOVERY));
    let avg_strain =
        format::format_number(window_mean.value_or_zero(MetricGroup::Physiological, keys::STRAIN), 1);
    let avg_efficiency =
        format::format_percent(window_mean.value_or_zero(MetricGroup::Sleep, keys::EFFICIENCY));

    rsx! {
        section { class: "page page-overview",
            h1 { {t!("overview-title")} }
            p { class: "page-overview__intro", {t!("overview-intro")} }

            div { class: "view-controls",
                DateStepper { selected: selected_date }
                PeriodPicker { period }
            }

            div { class: "stat-tiles",
                for tile in tiles.into_iter() {
                    {render_tile(tile)}
                }
            }

            section { class: "card",
                div { class: "card__header",
                    h2 { "Period highlights" }
                    if day_count > 0 {
                        span { class: "card__meta", "{day_count} recorded days" }
                    }
                }

                if day_count == 0 {
                    p { class: "card__placeholder",
                        "Once the selected window covers recorded days, averages will surface here."
                    }
                } else {
                    div { class: "overview-highlights",
                        div { class: "overview-highlight",
                            span { class: "overview-highlight__label", "Avg asleep" }
                            strong { class: "overview-highlight__value", "{avg_asleep}" }
                        }
                        div { class: "overview-highlight",
                            span { class: "overview-highlight__label", "Avg recovery" }
                            strong { class: "overview-highlight__value", "{avg_recovery}" }
                        }
                        div { class: "overview-highlight",
                            span { class: "overview-highlight__label", "Avg strain" }
                            strong { class: "overview-highlight__value", "{avg_strain}" }
                        }
                        div { class: "overview-highlight",
                            span { class: "overview-highlight__label", "Avg efficiency" }
                            strong { class: "overview-highlight__value", "{avg_efficiency}" }
                        }
                    }
                }
            }

            ExportCard { window }
        }
    }
}

fn render_tile(tile: MetricReading) -> Element {
    let tone_class = tile.tone.css_class();
    let arrow = tile.trend.arrow();

    rsx! {
        div { key: "{tile.title}", class: "stat-tile",
            span { class: "stat-tile__label", "{tile.title}" }
            strong { class: "stat-tile__value", "{tile.value}" }
            span { class: "metric-trend {tone_class}",
                span { class: "metric-trend__arrow", aria_hidden: "true", "{arrow}" }
                span { class: "metric-trend__baseline", "vs {tile.baseline}" }
            }
        }
    }
}
