//! Figure 2: annotated symptom prevalence heatmap

use std::path::Path;

use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    data::{Heatmap, SYMPTOM_PREVALENCE},
    plot::{
        CAPTION_SIZE, FONT, LABEL_SIZE, PlotError, canvas, category_center, category_label,
        category_range, drawing_error, normalize, yl_or_rd,
    },
};

const SIZE: (u32, u32) = (1000, 800);
/// Width of the cell grid; the color bar takes the rest.
const GRID_WIDTH: i32 = 860;
const COLOR_BAR_STEPS: u32 = 64;

/// Normalized value above which annotations switch to white text.
const DARK_CELL: f64 = 0.6;

/// Center of a cell, with the first row at the top of the chart.
fn cell_center(row: usize, column: usize, row_count: usize) -> (f64, f64) {
    (category_center(column), category_center(row_count - 1 - row))
}

/// Formats a cell the way the figure annotates it.
fn annotation(value: f64) -> String {
    format!("{value}")
}

pub(super) fn render(path: &Path) -> Result<(), PlotError> {
    let data = &SYMPTOM_PREVALENCE;
    let (lo, hi) = data.value_range();
    let root = canvas(path, SIZE)?;
    let root = root
        .titled(data.title, (FONT, CAPTION_SIZE))
        .map_err(drawing_error(path))?;
    let (grid_area, bar_area) = root.split_horizontally(GRID_WIDTH);

    draw_grid(&grid_area, data, (lo, hi), path)?;
    draw_color_bar(&bar_area, (lo, hi), path)?;

    root.present().map_err(drawing_error(path))?;
    Ok(())
}

fn draw_grid(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    data: &Heatmap,
    (lo, hi): (f64, f64),
    path: &Path,
) -> Result<(), PlotError> {
    let row_labels = data.rows.iter().rev().copied().collect::<Vec<_>>();

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(
            category_range(data.columns.len()),
            category_range(data.rows.len()),
        )
        .map_err(drawing_error(path))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(data.columns.len())
        .y_labels(data.rows.len())
        .x_label_formatter(&|x| category_label(data.columns, *x))
        .y_label_formatter(&|y| category_label(&row_labels, *y))
        .label_style((FONT, LABEL_SIZE))
        .draw()
        .map_err(drawing_error(path))?;

    let cells = data.values.iter().enumerate().flat_map(|(row, values)| {
        values
            .iter()
            .enumerate()
            .map(move |(column, &value)| (cell_center(row, column, data.rows.len()), value))
    });

    chart
        .draw_series(cells.clone().map(|((x, y), value)| {
            Rectangle::new(
                [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                yl_or_rd(normalize(value, lo, hi)).filled(),
            )
        }))
        .map_err(drawing_error(path))?;

    let centered = Pos::new(HPos::Center, VPos::Center);
    chart
        .draw_series(cells.map(|((x, y), value)| {
            let color = if normalize(value, lo, hi) > DARK_CELL {
                WHITE
            } else {
                BLACK
            };
            let style = (FONT, LABEL_SIZE + 4)
                .into_font()
                .color(&color)
                .pos(centered);
            Text::new(annotation(value), (x, y), style)
        }))
        .map_err(drawing_error(path))?;
    Ok(())
}

fn draw_color_bar(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    (lo, hi): (f64, f64),
    path: &Path,
) -> Result<(), PlotError> {
    let mut chart = ChartBuilder::on(area)
        .margin_top(20)
        .margin_bottom(70)
        .margin_right(10)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, lo..hi)
        .map_err(drawing_error(path))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_formatter(&|y| format!("{y:.0}"))
        .label_style((FONT, LABEL_SIZE))
        .draw()
        .map_err(drawing_error(path))?;

    let step = (hi - lo) / f64::from(COLOR_BAR_STEPS);
    chart
        .draw_series((0..COLOR_BAR_STEPS).map(|i| {
            let bottom = lo + step * f64::from(i);
            let t = f64::from(i) / f64::from(COLOR_BAR_STEPS - 1);
            Rectangle::new([(0.0, bottom), (1.0, bottom + step)], yl_or_rd(t).filled())
        }))
        .map_err(drawing_error(path))?;
    Ok(())
}
