//! Loading for the load generator's metrics table (metrics.csv).

pub mod parse;
pub mod row;

pub use parse::load_metrics_file;
pub use row::{MetricsRow, MetricsTable};
