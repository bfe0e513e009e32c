use dioxus::prelude::*;

use crate::core::dataset;
use crate::core::format;
use crate::core::series::TimePeriod;

/// Steps the selected date through the recorded days. The selection signal
/// is owned by the parent view; this component only reads and replaces it.
#[component]
pub fn DateStepper(selected: Signal<Option<String>>) -> Element {
    let mut selected = selected;
    let history = dataset::history();

    let current = selected();
    let label = current
        .as_deref()
        .map(format::long_date)
        .unwrap_or_else(|| "No data".to_string());

    let previous = current
        .as_deref()
        .and_then(|date| history.previous_date(date))
        .map(str::to_string);
    let next = current
        .as_deref()
        .and_then(|date| history.next_date(date))
        .map(str::to_string);

    let has_previous = previous.is_some();
    let has_next = next.is_some();

    rsx! {
        div { class: "date-stepper",
            button {
                r#type: "button",
                class: "date-stepper__step",
                disabled: !has_previous,
                aria_label: "Previous day",
                onclick: move |_| {
                    if let Some(date) = previous.clone() {
                        selected.set(Some(date));
                    }
                },
                "‹"
            }
            span { class: "date-stepper__label", "{label}" }
            button {
                r#type: "button",
                class: "date-stepper__step",
                disabled: !has_next,
                aria_label: "Next day",
                onclick: move |_| {
                    if let Some(date) = next.clone() {
                        selected.set(Some(date));
                    }
                },
                "›"
            }
        }
    }
}

/// Fixed row of period options. The period signal is owned by the parent
/// view.
#[component]
pub fn PeriodPicker(period: Signal<TimePeriod>) -> Element {
    let current = period();

    rsx! {
        div { class: "period-picker", role: "group", aria_label: "Time period",
            for option in TimePeriod::ALL {
                {render_option(option, current, period)}
            }
        }
    }
}

fn render_option(
    option: TimePeriod,
    current: TimePeriod,
    mut period: Signal<TimePeriod>,
) -> Element {
    let label = option.label();
    let class = if option == current {
        "period-picker__option period-picker__option--active"
    } else {
        "period-picker__option"
    };

    rsx! {
        button {
            key: "{label}",
            r#type: "button",
            class: "{class}",
            onclick: move |_| period.set(option),
            "{label}"
        }
    }
}
