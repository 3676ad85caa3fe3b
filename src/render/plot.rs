use crate::chart::{AxisPlan, ChartPlan};

use plotters::coord::Shift;
use plotters::prelude::*;

const FONT: &str = "sans-serif";
const DESC_FONT_SIZE: u32 = 18;
const LABEL_FONT_SIZE: u32 = 14;
const LINE_WIDTH: u32 = 2;
const LEGEND_SWATCH: i32 = 20;

/// Room for the right-hand tick labels and description so neither is clipped.
pub(crate) const RIGHT_LABEL_AREA: u32 = 90;

pub(crate) const MARGIN: u32 = 16;

/// Draw a dual-axis line chart onto `root`.
///
/// Primary lines use the left axis, secondary lines the right one; both share
/// the time axis. The legend lists every line, primary first, in the upper
/// right corner of the plotting area.
pub fn draw_chart<DB>(root: &DrawingArea<DB, Shift>, plan: &ChartPlan) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(MARGIN)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .right_y_label_area_size(RIGHT_LABEL_AREA)
        .build_cartesian_2d(plan.x_range.clone(), plan.primary.y_range.clone())?
        .set_secondary_coord(plan.x_range.clone(), plan.secondary.y_range.clone());

    chart
        .configure_mesh()
        .light_line_style(WHITE)
        .x_desc(plan.x_label.as_str())
        .y_desc(plan.primary.label.as_str())
        .axis_desc_style(desc_style(&plan.primary))
        .label_style((FONT, LABEL_FONT_SIZE).into_font())
        .y_label_formatter(&|y| format_tick(*y))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc(plan.secondary.label.as_str())
        .axis_desc_style(desc_style(&plan.secondary))
        .label_style((FONT, LABEL_FONT_SIZE).into_font())
        .y_label_formatter(&|y| format_tick(*y))
        .draw()?;

    for line in &plan.primary.lines {
        let style = line.color.stroke_width(LINE_WIDTH);
        chart
            .draw_series(LineSeries::new(line.points.iter().copied(), style))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_SWATCH, y)], style));
    }

    for line in &plan.secondary.lines {
        let style = line.color.stroke_width(LINE_WIDTH);
        chart
            .draw_secondary_series(LineSeries::new(line.points.iter().copied(), style))?
            .label(line.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_SWATCH, y)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, LABEL_FONT_SIZE).into_font())
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn desc_style(axis: &AxisPlan) -> TextStyle<'static> {
    let color = axis.label_color.unwrap_or(BLACK);
    (FONT, DESC_FONT_SIZE).into_font().color(&color)
}

/// Whole numbers for large magnitudes, two decimals below 10.
fn format_tick(v: f64) -> String {
    if v.abs() >= 10.0 || v == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.2}", v)
    }
}
