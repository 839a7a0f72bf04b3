//! Figure 5: predictor weights as horizontal bars

use std::path::Path;

use plotters::prelude::*;

use crate::{
    data::FEATURE_IMPORTANCE,
    plot::{
        CAPTION_SIZE, FONT, LABEL_SIZE, PlotError, TEAL, canvas, category_center, category_label,
        category_range, drawing_error,
    },
};

const SIZE: (u32, u32) = (1200, 720);
const BAR_HEIGHT: f64 = 0.8;

pub(super) fn render(path: &Path) -> Result<(), PlotError> {
    let data = &FEATURE_IMPORTANCE;
    // Smallest weight first, so the largest bar ends up on top
    let items = data.sorted_ascending();
    let names = items.iter().map(|(name, _)| *name).collect::<Vec<_>>();
    let max_weight = items.iter().map(|(_, w)| *w).fold(0.0, f64::max);

    let root = canvas(path, SIZE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(data.title, (FONT, CAPTION_SIZE - 6))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(130)
        .build_cartesian_2d(0.0..max_weight * 1.1, category_range(items.len()))
        .map_err(drawing_error(path))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(items.len())
        .y_label_formatter(&|y| category_label(&names, *y))
        .x_desc(data.x_label)
        .x_label_formatter(&|x| format!("{x:.2}"))
        .label_style((FONT, LABEL_SIZE))
        .draw()
        .map_err(drawing_error(path))?;

    let half = BAR_HEIGHT / 2.0;
    chart
        .draw_series(items.iter().enumerate().map(|(index, &(_, weight))| {
            let center = category_center(index);
            Rectangle::new([(0.0, center - half), (weight, center + half)], TEAL.filled())
        }))
        .map_err(drawing_error(path))?;

    root.present().map_err(drawing_error(path))?;
    Ok(())
}
