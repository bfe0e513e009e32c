use dioxus::prelude::*;

use crate::core::format;
use crate::core::series::{SeriesPoint, ValueScale};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 220.0;
const LEFT: f64 = 52.0;
const RIGHT: f64 = 18.0;
const TOP: f64 = 18.0;
const BOTTOM: f64 = 30.0;

/// Min/max-scaled polyline over the selected period. Only recorded days
/// are plotted, evenly spaced.
#[component]
pub fn TrendLine(title: String, points: Vec<SeriesPoint>, formatter: fn(f64) -> String) -> Element {
    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    let scale = ValueScale::from_values(&values);

    let (Some(scale), Some(first), Some(last)) = (scale, points.first(), points.last()) else {
        return rsx! {
            section { class: "card trend-line",
                div { class: "card__header", h2 { "{title}" } }
                p { class: "card__placeholder", "Not enough data for this period yet." }
            }
        };
    };

    let count = points.len();
    let inner_w = WIDTH - LEFT - RIGHT;
    let inner_h = HEIGHT - TOP - BOTTOM;
    let x_at = |index: usize| {
        if count == 1 {
            LEFT + inner_w / 2.0
        } else {
            LEFT + index as f64 * inner_w / (count as f64 - 1.0)
        }
    };
    let y_at = |value: f64| TOP + (1.0 - scale.normalize(value)) * inner_h;

    let polyline: String = points
        .iter()
        .enumerate()
        .map(|(index, point)| format!("{:.1},{:.1}", x_at(index), y_at(point.value)))
        .collect::<Vec<_>>()
        .join(" ");

    let marker_x = format!("{:.1}", x_at(count - 1));
    let marker_y = format!("{:.1}", y_at(last.value));

    let axis_y = format!("{:.1}", TOP + inner_h);
    let axis_x1 = format!("{LEFT:.1}");
    let axis_x2 = format!("{:.1}", WIDTH - RIGHT);
    let scale_x = format!("{:.1}", LEFT - 8.0);
    let max_y = format!("{:.1}", TOP + 5.0);
    let min_y = format!("{:.1}", TOP + inner_h);
    let date_y = format!("{:.1}", HEIGHT - 8.0);
    let last_date_x = format!("{:.1}", WIDTH - RIGHT);

    let max_label = formatter(scale.max);
    let min_label = formatter(scale.min);
    let latest_label = formatter(last.value);
    let first_date = format::short_date(&first.date);
    let last_date = format::short_date(&last.date);
    let meta = format!("{count} days · latest {latest_label}");

    rsx! {
        section { class: "card trend-line",
            div { class: "card__header",
                h2 { "{title}" }
                span { class: "card__meta", "{meta}" }
            }
            svg {
                class: "trend-line__svg",
                view_box: "0 0 640 220",
                preserve_aspect_ratio: "xMidYMid meet",
                line {
                    class: "trend-line__axis",
                    x1: "{axis_x1}",
                    y1: "{axis_y}",
                    x2: "{axis_x2}",
                    y2: "{axis_y}",
                }
                polyline { class: "trend-line__path", points: "{polyline}" }
                circle { class: "trend-line__marker", cx: "{marker_x}", cy: "{marker_y}", r: "4" }
                text {
                    class: "trend-line__scale",
                    x: "{scale_x}",
                    y: "{max_y}",
                    text_anchor: "end",
                    "{max_label}"
                }
                text {
                    class: "trend-line__scale",
                    x: "{scale_x}",
                    y: "{min_y}",
                    text_anchor: "end",
                    "{min_label}"
                }
                text { class: "trend-line__date", x: "{axis_x1}", y: "{date_y}", "{first_date}" }
                text {
                    class: "trend-line__date",
                    x: "{last_date_x}",
                    y: "{date_y}",
                    text_anchor: "end",
                    "{last_date}"
                }
            }
        }
    }
}
