#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (cards,
  charts, the stage donut, trend badges) remain present in the unified
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop
  builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the
  shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__header",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // View controls
    ".view-controls",
    ".date-stepper",
    ".date-stepper__step",
    ".date-stepper__label",
    ".period-picker",
    ".period-picker__option",
    ".period-picker__option--active",
    // Cards
    ".card {",
    ".card__header",
    ".card__meta",
    ".card__meta--success",
    ".card__meta--error",
    ".card__placeholder",
    // Stat tiles & metric cards
    ".stat-tiles",
    ".stat-tile__value",
    ".metric-grid",
    ".metric-card__label",
    ".metric-card__value",
    ".metric-trend--favorable",
    ".metric-trend--unfavorable",
    ".metric-trend--neutral",
    // Stage donut & legend
    ".stage-donut__wedge--awake",
    ".stage-donut__wedge--light",
    ".stage-donut__wedge--deep",
    ".stage-donut__wedge--rem",
    ".stage-donut__hole",
    ".stage-legend__chip--active",
    ".stage-legend__dot",
    // Trend charts
    ".trend-line__path",
    ".trend-line__marker",
    ".period-bars__bar",
    ".period-bars__bar--latest",
    // Recovery ring
    ".recovery-ring__track",
    ".recovery-ring__fill--high",
    ".recovery-ring__fill--medium",
    ".recovery-ring__fill--low",
    // Highlights & export
    ".overview-highlight__value",
    ".export-card__summary",
    ".export-card__actions",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 640px)",
];

#[test]
fn all_required_selectors_present() {
    let mut missing = Vec::new();
    for selector in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(selector) {
            missing.push(*selector);
        }
    }
    assert!(
        missing.is_empty(),
        "Missing {} selector(s) in shared theme:\n  {}",
        missing.len(),
        missing.join("\n  ")
    );
}
