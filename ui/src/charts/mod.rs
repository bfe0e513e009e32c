//! Presentational SVG chart components. All geometry comes from
//! `core::geometry` / `core::series`; nothing in here owns state.

mod bars;
pub use bars::PeriodBars;

mod donut;
pub use donut::{StageDonut, StageLegend};

mod line;
pub use line::TrendLine;
