//! Figure 3: subjective versus objective stressor scores on a radar chart

use std::{f64::consts::TAU, iter, path::Path};

use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    data::PERCEPTION,
    plot::{CAPTION_SIZE, FONT, LABEL_SIZE, PlotError, canvas, drawing_error},
};

/// Slightly taller than wide so the plotting area under the caption stays
/// square.
const SIZE: (u32, u32) = (1000, 1060);
/// Half-width of the chart in score units, leaving room for axis labels.
const EXTENT: f64 = 1.35;
const LABEL_RADIUS: f64 = 1.15;
const RINGS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];
const GRID: RGBColor = RGBColor(200, 200, 200);

/// Point at `radius` on spoke `axis` of `axis_count`.
///
/// The first spoke points right; the rest follow counterclockwise.
#[expect(clippy::cast_precision_loss)]
fn vertex(axis: usize, axis_count: usize, radius: f64) -> (f64, f64) {
    let angle = TAU * axis as f64 / axis_count as f64;
    (radius * angle.cos(), radius * angle.sin())
}

/// Closed outline through one score per spoke.
fn outline(values: &[f64]) -> Vec<(f64, f64)> {
    let mut points = values
        .iter()
        .enumerate()
        .map(|(axis, &value)| vertex(axis, values.len(), value))
        .collect::<Vec<_>>();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

/// Ring of `radius` approximated by a closed polyline.
fn ring(radius: f64) -> Vec<(f64, f64)> {
    const SEGMENTS: usize = 90;
    (0..=SEGMENTS).map(|i| vertex(i, SEGMENTS, radius)).collect()
}

pub(super) fn render(path: &Path) -> Result<(), PlotError> {
    let data = &PERCEPTION;
    let root = canvas(path, SIZE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(data.title, (FONT, CAPTION_SIZE))
        .margin(30)
        .build_cartesian_2d(-EXTENT..EXTENT, -EXTENT..EXTENT)
        .map_err(drawing_error(path))?;

    chart
        .draw_series(RINGS.iter().map(|&r| PathElement::new(ring(r), &GRID)))
        .map_err(drawing_error(path))?;
    let axis_count = data.axes.len();
    chart
        .draw_series((0..axis_count).map(|axis| {
            PathElement::new([(0.0, 0.0), vertex(axis, axis_count, 1.0)], &GRID)
        }))
        .map_err(drawing_error(path))?;

    let label_style = (FONT, LABEL_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(data.axes.iter().enumerate().map(|(axis, label)| {
            Text::new(
                *label,
                vertex(axis, axis_count, LABEL_RADIUS),
                label_style.clone(),
            )
        }))
        .map_err(drawing_error(path))?;

    for (series, color) in data.series.iter().zip([RED, BLUE]) {
        let points = outline(series.values);
        let fill = color.mix(0.25).filled();
        chart
            .draw_series(iter::once(Polygon::new(points.clone(), fill)))
            .map_err(drawing_error(path))?
            .label(series.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], fill));
        chart
            .draw_series(iter::once(PathElement::new(points, color.stroke_width(2))))
            .map_err(drawing_error(path))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, LABEL_SIZE))
        .draw()
        .map_err(drawing_error(path))?;

    root.present().map_err(drawing_error(path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-12 && (actual.1 - expected.1).abs() < 1e-12,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_first_spoke_points_right() {
        assert_point(vertex(0, 5, 0.8), (0.8, 0.0));
        assert_point(vertex(1, 4, 1.0), (0.0, 1.0));
        assert_point(vertex(2, 4, 0.5), (-0.5, 0.0));
    }

    #[test]
    fn test_outline_is_closed_with_one_vertex_per_axis() {
        let values = PERCEPTION.series[0].values;
        let points = outline(values);
        assert_eq!(points.len(), values.len() + 1);
        assert_eq!(points.first(), points.last());
        for (axis, (&value, &(x, y))) in values.iter().zip(&points).enumerate() {
            assert!((x.hypot(y) - value).abs() < 1e-12, "axis {axis}");
        }
    }

    #[test]
    fn test_outline_of_nothing_is_empty() {
        assert!(outline(&[]).is_empty());
    }

    #[test]
    fn test_everything_fits_in_the_chart() {
        for &(x, y) in ring(1.0).iter().chain(&ring(LABEL_RADIUS)) {
            assert!(x.abs() <= EXTENT && y.abs() <= EXTENT);
        }
    }
}
