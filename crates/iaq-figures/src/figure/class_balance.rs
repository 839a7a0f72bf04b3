//! Figure 4: class balance before and after minority oversampling

use std::path::Path;

use plotters::prelude::*;

use super::bars::draw_grouped_bars;
use crate::{
    data::CLASS_BALANCE,
    plot::{
        CAPTION_SIZE, FONT, GRAY, LABEL_SIZE, PlotError, canvas, category_label, category_range,
        drawing_error,
    },
};

const SIZE: (u32, u32) = (1200, 720);

pub(super) fn render(path: &Path) -> Result<(), PlotError> {
    let data = &CLASS_BALANCE;
    let root = canvas(path, SIZE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(data.title, (FONT, CAPTION_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(
            category_range(data.groups.len()),
            0.0..data.max_value() * 1.1,
        )
        .map_err(drawing_error(path))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.groups.len())
        .x_label_formatter(&|x| category_label(data.groups, *x))
        .y_desc(data.y_label)
        .y_label_formatter(&|y| format!("{y:.0}"))
        .label_style((FONT, LABEL_SIZE))
        .draw()
        .map_err(drawing_error(path))?;

    let styles = [GRAY.filled(), BLUE.filled()];
    draw_grouped_bars(&mut chart, data, &styles, 0.0, path)?;

    root.present().map_err(drawing_error(path))?;
    Ok(())
}
