//! Shared UI crate for Pulseboard. Most cross-platform logic and views live here.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Date stepper & period picker shared by every view
    pub mod controls;
    pub use controls::DateStepper;
    pub use controls::PeriodPicker;

    pub mod export;
    pub use export::ExportCard;

    pub mod metric_card;
    pub use metric_card::MetricCard;
    pub use metric_card::MetricGrid;
}
