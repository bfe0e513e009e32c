use dioxus::prelude::*;

use crate::core::catalog::keys;
use crate::core::format;
use crate::core::geometry::{self, SleepStage};
use crate::core::records::{DailyRecord, MetricGroup};

/// Wedge radius in viewbox units; the viewbox leaves headroom for the
/// active-segment lift.
const RING_RADIUS: f64 = 90.0;

/// Filled-wedge donut of the night's stage breakdown.
///
/// Selection is owned by the caller: the active stage arrives as a signal
/// and clicking a wedge toggles it. The geometry is recomputed on every
/// render with the current selection so the lifted wedge follows it.
#[component]
pub fn StageDonut(record: DailyRecord, active: Signal<Option<SleepStage>>) -> Element {
    let buckets = geometry::stage_buckets(&record);
    let in_bed = record.value(MetricGroup::Sleep, keys::IN_BED);
    let segments = geometry::ring_segments(&buckets, RING_RADIUS, in_bed, active());

    let asleep = format::format_minutes(record.value(MetricGroup::Sleep, keys::ASLEEP));

    let wedges: Vec<WedgeView> = segments
        .iter()
        .filter(|segment| !segment.path.is_empty())
        .map(|segment| WedgeView {
            stage: segment.stage,
            slug: segment.stage.slug(),
            class: format!(
                "stage-donut__wedge stage-donut__wedge--{}",
                segment.stage.slug()
            ),
            path: segment.path.clone(),
            transform: format!(
                "translate({:.2} {:.2})",
                segment.offset.0, segment.offset.1
            ),
        })
        .collect();

    rsx! {
        div { class: "stage-donut",
            if wedges.is_empty() {
                p { class: "card__placeholder", "No sleep recorded for this day." }
            } else {
                svg {
                    class: "stage-donut__svg",
                    view_box: "-112 -112 224 224",
                    role: "img",
                    for wedge in wedges.into_iter() {
                        {render_wedge(wedge, active)}
                    }
                    circle { class: "stage-donut__hole", cx: "0", cy: "0", r: "54" }
                    text {
                        class: "stage-donut__value",
                        x: "0",
                        y: "4",
                        text_anchor: "middle",
                        "{asleep}"
                    }
                    text {
                        class: "stage-donut__caption",
                        x: "0",
                        y: "26",
                        text_anchor: "middle",
                        "asleep"
                    }
                }
            }
        }
    }
}

struct WedgeView {
    stage: SleepStage,
    slug: &'static str,
    class: String,
    path: String,
    transform: String,
}

fn render_wedge(wedge: WedgeView, mut active: Signal<Option<SleepStage>>) -> Element {
    let WedgeView {
        stage,
        slug,
        class,
        path,
        transform,
    } = wedge;

    rsx! {
        path {
            key: "{slug}",
            class: "{class}",
            d: "{path}",
            transform: "{transform}",
            onclick: move |_| {
                let next = if active() == Some(stage) { None } else { Some(stage) };
                active.set(next);
            },
        }
    }
}

/// Stage chips next to the donut: duration, share, and the same
/// click-to-toggle selection as the wedges.
#[component]
pub fn StageLegend(record: DailyRecord, active: Signal<Option<SleepStage>>) -> Element {
    let buckets = geometry::stage_buckets(&record);
    let in_bed = record.value(MetricGroup::Sleep, keys::IN_BED);
    let segments = geometry::ring_segments(&buckets, RING_RADIUS, in_bed, active());

    let chips: Vec<ChipView> = buckets
        .iter()
        .map(|bucket| {
            let share = segments
                .iter()
                .find(|segment| segment.stage == bucket.stage)
                .map(|segment| segment.share)
                .unwrap_or(0.0);
            ChipView {
                stage: bucket.stage,
                slug: bucket.stage.slug(),
                label: bucket.stage.label(),
                is_active: active() == Some(bucket.stage),
                duration: format::format_minutes(Some(bucket.minutes)),
                share: format::format_percent(share * 100.0),
            }
        })
        .collect();

    rsx! {
        ul { class: "stage-legend",
            for chip in chips.into_iter() {
                {render_chip(chip, active)}
            }
        }
    }
}

struct ChipView {
    stage: SleepStage,
    slug: &'static str,
    label: &'static str,
    is_active: bool,
    duration: String,
    share: String,
}

fn render_chip(chip: ChipView, mut active: Signal<Option<SleepStage>>) -> Element {
    let ChipView {
        stage,
        slug,
        label,
        is_active,
        duration,
        share,
    } = chip;

    let class = format!(
        "stage-legend__chip stage-legend__chip--{slug} {}",
        if is_active { "stage-legend__chip--active" } else { "" }
    );

    rsx! {
        li { key: "{slug}",
            button {
                r#type: "button",
                class: "{class}",
                onclick: move |_| {
                    let next = if active() == Some(stage) { None } else { Some(stage) };
                    active.set(next);
                },
                span { class: "stage-legend__dot", aria_hidden: "true" }
                span { class: "stage-legend__label", "{label}" }
                span { class: "stage-legend__duration", "{duration}" }
                span { class: "stage-legend__share", "{share}" }
            }
        }
    }
}
