//! Grouped bar series shared by the latency and class balance figures

use std::path::Path;

use plotters::{coord::types::RangedCoordf64, prelude::*};

use crate::{
    data::GroupedBars,
    plot::{FONT, LABEL_SIZE, PlotError, bar_top, drawing_error, grouped_bar_span},
};

/// Width of one bar in category units.
pub(super) const BAR_WIDTH: f64 = 0.4;

/// Draws every series of `bars` as side-by-side bars rising from
/// `baseline`, one style per series, followed by the legend.
pub(super) fn draw_grouped_bars<'a, Y>(
    chart: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<RangedCoordf64, Y>>,
    bars: &GroupedBars,
    styles: &[ShapeStyle],
    baseline: f64,
    path: &Path,
) -> Result<(), PlotError>
where
    Y: Ranged<ValueType = f64>,
{
    let series_count = bars.series.len();
    for (index, (series, &style)) in bars.series.iter().zip(styles).enumerate() {
        chart
            .draw_series(series.values.iter().enumerate().map(|(group, &value)| {
                let (left, right) = grouped_bar_span(group, index, series_count, BAR_WIDTH);
                Rectangle::new([(left, baseline), (right, bar_top(value, baseline))], style)
            }))
            .map_err(drawing_error(path))?
            .label(series.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, LABEL_SIZE))
        .draw()
        .map_err(drawing_error(path))?;
    Ok(())
}
