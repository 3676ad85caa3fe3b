//! Drawing and on-screen presentation of a `ChartPlan`.

pub mod plot;
pub mod window;

pub use window::{WindowSize, show_chart};
