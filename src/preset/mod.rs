//! Chart presets: the two historical layouts of the metrics chart.
//!
//! A preset is a flat list of `SeriesSpec` plus the two axis labels. Both
//! presets read the same six input columns; they only differ in what is drawn.

pub mod series;

pub use series::{AxisSide, Column, SeriesSpec};

use series::palette::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Preset {
    /// Totals, reads and writes on the left; rates and memtable size on the right.
    #[default]
    Full,
    /// Reads only on the left; read and write rates on the right.
    Reads,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSpec {
    pub label: &'static str,
    /// Draw the axis label in the color of the axis's first series.
    pub tint_label: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetSpec {
    pub primary: AxisSpec,
    pub secondary: AxisSpec,
    pub series: Vec<SeriesSpec>,
}

impl PresetSpec {
    pub fn axis(&self, side: AxisSide) -> &AxisSpec {
        match side {
            AxisSide::Primary => &self.primary,
            AxisSide::Secondary => &self.secondary,
        }
    }

    /// Series drawn on `side`, in drawing (and legend) order.
    pub fn series_on(&self, side: AxisSide) -> impl Iterator<Item = &SeriesSpec> {
        self.series.iter().filter(move |s| s.axis == side)
    }
}

impl Preset {
    pub fn spec(self) -> PresetSpec {
        use AxisSide::{Primary, Secondary};

        match self {
            Preset::Full => PresetSpec {
                primary: AxisSpec {
                    label: "operations",
                    tint_label: false,
                },
                secondary: AxisSpec {
                    label: "avg ops/s",
                    tint_label: false,
                },
                series: vec![
                    SeriesSpec::new(Column::TotalOps, Primary, TAB_RED, "Total Ops"),
                    SeriesSpec::new(Column::ReadOps, Primary, TAB_GREEN, "Read Ops"),
                    SeriesSpec::new(Column::WriteOps, Primary, TAB_BLUE, "Write Ops"),
                    SeriesSpec::new(Column::TotalOpsPerSec, Secondary, TAB_ORANGE, "Avg Ops/s"),
                    SeriesSpec::new(Column::ReadOpsPerSec, Secondary, TAB_OLIVE, "Avg Read/s"),
                    SeriesSpec::new(Column::WriteOpsPerSec, Secondary, TAB_CYAN, "Avg Write/s"),
                    SeriesSpec::new(Column::MemtableSize, Secondary, TAB_PURPLE, "Memtable Size"),
                ],
            },
            Preset::Reads => PresetSpec {
                primary: AxisSpec {
                    label: "operations",
                    tint_label: true,
                },
                secondary: AxisSpec {
                    label: "ops/s",
                    tint_label: true,
                },
                series: vec![
                    SeriesSpec::new(Column::ReadOps, Primary, TAB_BLUE, "Read Ops"),
                    SeriesSpec::new(Column::ReadOpsPerSec, Secondary, TAB_RED, "Read/s"),
                    SeriesSpec::new(Column::WriteOpsPerSec, Secondary, TAB_ORANGE, "Write/s"),
                ],
            },
        }
    }
}
