mod overview;
pub use overview::Overview;

mod recovery;
pub use recovery::Recovery;

mod sleep;
pub use sleep::Sleep;

mod strain;
pub use strain::Strain;
