//! Chart plan: combine the metrics table with a preset into the exact lines and
//! axis bounds to draw. Pure and deterministic, so the same table always yields
//! the same chart.

use crate::Result;
use crate::metrics::MetricsTable;
use crate::preset::{AxisSide, PresetSpec};

use anyhow::bail;
use plotters::style::RGBColor;
use std::ops::Range;

pub const X_LABEL: &str = "time (s)";

/// Headroom above the largest value on a y-axis.
const Y_HEADROOM: f64 = 1.05;

#[derive(Debug, Clone, PartialEq)]
pub struct PlotLine {
    pub label: String,
    pub color: RGBColor,
    /// One (time, value) point per table row.
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisPlan {
    pub label: String,
    /// None draws the label in the default text color.
    pub label_color: Option<RGBColor>,
    /// Always starts at 0.
    pub y_range: Range<f64>,
    pub lines: Vec<PlotLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub x_label: String,
    pub x_range: Range<f64>,
    pub primary: AxisPlan,
    pub secondary: AxisPlan,
}

impl ChartPlan {
    /// Legend entries from both axes, primary first.
    pub fn legend(&self) -> impl Iterator<Item = &PlotLine> {
        self.primary.lines.iter().chain(self.secondary.lines.iter())
    }
}

/// Build the chart plan. Fails on an empty table.
pub fn build_chart_plan(table: &MetricsTable, spec: &PresetSpec) -> Result<ChartPlan> {
    let Some((t_min, t_max)) = table.time_bounds() else {
        bail!("cannot chart an empty metrics table");
    };

    let x_range = if t_max > t_min {
        t_min..t_max
    } else {
        t_min..t_min + 1.0
    };

    Ok(ChartPlan {
        x_label: X_LABEL.to_string(),
        x_range,
        primary: build_axis(table, spec, AxisSide::Primary),
        secondary: build_axis(table, spec, AxisSide::Secondary),
    })
}

fn build_axis(table: &MetricsTable, spec: &PresetSpec, side: AxisSide) -> AxisPlan {
    let lines: Vec<PlotLine> = spec
        .series_on(side)
        .map(|s| PlotLine {
            label: s.label.to_string(),
            color: s.color,
            points: table
                .rows()
                .iter()
                .map(|row| (row.time, s.column.value(row)))
                .collect(),
        })
        .collect();

    let axis = spec.axis(side);
    let label_color = if axis.tint_label {
        lines.first().map(|l| l.color)
    } else {
        None
    };

    AxisPlan {
        label: axis.label.to_string(),
        label_color,
        y_range: zero_floor_range(&lines),
        lines,
    }
}

/// `0..max * headroom`, or `0..1` when nothing on the axis is above zero.
fn zero_floor_range(lines: &[PlotLine]) -> Range<f64> {
    let max = lines
        .iter()
        .flat_map(|l| l.points.iter().map(|&(_, y)| y))
        .fold(f64::NEG_INFINITY, f64::max);

    if max > 0.0 { 0.0..max * Y_HEADROOM } else { 0.0..1.0 }
}
