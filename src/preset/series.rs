//! Series placement: which column goes on which axis, in which color.

use crate::metrics::MetricsRow;
use plotters::style::RGBColor;

/// The "tab10" palette the charts have always been drawn with.
pub mod palette {
    use plotters::style::RGBColor;

    pub const TAB_BLUE: RGBColor = RGBColor(31, 119, 180);
    pub const TAB_ORANGE: RGBColor = RGBColor(255, 127, 14);
    pub const TAB_GREEN: RGBColor = RGBColor(44, 160, 44);
    pub const TAB_RED: RGBColor = RGBColor(214, 39, 40);
    pub const TAB_PURPLE: RGBColor = RGBColor(148, 103, 189);
    pub const TAB_OLIVE: RGBColor = RGBColor(188, 189, 34);
    pub const TAB_CYAN: RGBColor = RGBColor(23, 190, 207);
}

/// A plottable column: either read straight from a row or summed from two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    ReadOps,
    WriteOps,
    TotalOps,
    ReadOpsPerSec,
    WriteOpsPerSec,
    TotalOpsPerSec,
    MemtableSize,
}

impl Column {
    pub fn value(self, row: &MetricsRow) -> f64 {
        match self {
            Column::ReadOps => row.read_ops,
            Column::WriteOps => row.write_ops,
            Column::TotalOps => row.total_ops(),
            Column::ReadOpsPerSec => row.read_ops_per_sec,
            Column::WriteOpsPerSec => row.write_ops_per_sec,
            Column::TotalOpsPerSec => row.total_ops_per_sec(),
            Column::MemtableSize => row.memtable_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    /// Left axis: operation counts.
    Primary,
    /// Right axis: rates (and memtable size).
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    pub column: Column,
    pub axis: AxisSide,
    pub color: RGBColor,
    pub label: &'static str,
}

impl SeriesSpec {
    pub const fn new(column: Column, axis: AxisSide, color: RGBColor, label: &'static str) -> Self {
        Self {
            column,
            axis,
            color,
            label,
        }
    }
}
