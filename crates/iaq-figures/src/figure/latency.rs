//! Figure 1: cloud versus edge response latency per stage

use std::path::Path;

use plotters::prelude::*;

use super::bars::draw_grouped_bars;
use crate::{
    data::LATENCY,
    plot::{
        CAPTION_SIZE, DARK_GREEN, FONT, LABEL_SIZE, PlotError, canvas, category_label,
        category_range, drawing_error,
    },
};

const SIZE: (u32, u32) = (1200, 720);

/// Lower end of the logarithmic latency axis, in seconds.
///
/// Stages with zero latency are drawn as bars ending on this floor.
const LOG_FLOOR: f64 = 1e-3;

pub(super) fn render(path: &Path) -> Result<(), PlotError> {
    let data = &LATENCY;
    let root = canvas(path, SIZE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(data.title, (FONT, CAPTION_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(
            category_range(data.groups.len()),
            (LOG_FLOOR..data.max_value() * 2.0).log_scale(),
        )
        .map_err(drawing_error(path))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.groups.len())
        .x_label_formatter(&|x| category_label(data.groups, *x))
        .y_desc(data.y_label)
        .label_style((FONT, LABEL_SIZE))
        .draw()
        .map_err(drawing_error(path))?;

    let styles = [RED.mix(0.7).filled(), DARK_GREEN.mix(0.7).filled()];
    draw_grouped_bars(&mut chart, data, &styles, LOG_FLOOR, path)?;

    root.present().map_err(drawing_error(path))?;
    Ok(())
}
