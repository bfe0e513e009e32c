use dioxus::prelude::*;

use crate::core::format;
use crate::core::series::SeriesPoint;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 220.0;
const LEFT: f64 = 52.0;
const RIGHT: f64 = 18.0;
const TOP: f64 = 18.0;
const BOTTOM: f64 = 30.0;

/// Zero-based bar chart over the selected period (day strain, calories).
#[component]
pub fn PeriodBars(title: String, points: Vec<SeriesPoint>, formatter: fn(f64) -> String) -> Element {
    let max = points
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);

    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return rsx! {
            section { class: "card period-bars",
                div { class: "card__header", h2 { "{title}" } }
                p { class: "card__placeholder", "Not enough data for this period yet." }
            }
        };
    };

    if max <= 0.0 {
        return rsx! {
            section { class: "card period-bars",
                div { class: "card__header", h2 { "{title}" } }
                p { class: "card__placeholder", "Nothing recorded in this window." }
            }
        };
    }

    let count = points.len();
    let inner_w = WIDTH - LEFT - RIGHT;
    let inner_h = HEIGHT - TOP - BOTTOM;
    let step = inner_w / count as f64;
    let bar_w = (step * 0.72).min(36.0);

    let bars: Vec<BarView> = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let height = (point.value.max(0.0) / max) * inner_h;
            let x = LEFT + index as f64 * step + (step - bar_w) / 2.0;
            let y = TOP + inner_h - height;
            BarView {
                date: point.date.clone(),
                x: format!("{x:.1}"),
                y: format!("{y:.1}"),
                width: format!("{bar_w:.1}"),
                height: format!("{height:.1}"),
                class: if index == count - 1 {
                    "period-bars__bar period-bars__bar--latest"
                } else {
                    "period-bars__bar"
                },
            }
        })
        .collect();

    let axis_y = format!("{:.1}", TOP + inner_h);
    let axis_x1 = format!("{LEFT:.1}");
    let axis_x2 = format!("{:.1}", WIDTH - RIGHT);
    let scale_x = format!("{:.1}", LEFT - 8.0);
    let max_y = format!("{:.1}", TOP + 5.0);
    let date_y = format!("{:.1}", HEIGHT - 8.0);
    let last_date_x = format!("{:.1}", WIDTH - RIGHT);

    let max_label = formatter(max);
    let latest_label = formatter(last.value);
    let first_date = format::short_date(&first.date);
    let last_date = format::short_date(&last.date);
    let meta = format!("{count} days · latest {latest_label}");

    rsx! {
        section { class: "card period-bars",
            div { class: "card__header",
                h2 { "{title}" }
                span { class: "card__meta", "{meta}" }
            }
            svg {
                class: "period-bars__svg",
                view_box: "0 0 640 220",
                preserve_aspect_ratio: "xMidYMid meet",
                line {
                    class: "period-bars__axis",
                    x1: "{axis_x1}",
                    y1: "{axis_y}",
                    x2: "{axis_x2}",
                    y2: "{axis_y}",
                }
                for bar in bars.iter() {
                    rect {
                        key: "{bar.date}",
                        class: "{bar.class}",
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                    }
                }
                text {
                    class: "period-bars__scale",
                    x: "{scale_x}",
                    y: "{max_y}",
                    text_anchor: "end",
                    "{max_label}"
                }
                text { class: "period-bars__date", x: "{axis_x1}", y: "{date_y}", "{first_date}" }
                text {
                    class: "period-bars__date",
                    x: "{last_date_x}",
                    y: "{date_y}",
                    text_anchor: "end",
                    "{last_date}"
                }
            }
        }
    }
}

struct BarView {
    date: String,
    x: String,
    y: String,
    width: String,
    height: String,
    class: &'static str,
}
