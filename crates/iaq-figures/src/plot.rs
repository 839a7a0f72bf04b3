//! Drawing infrastructure shared by the figure modules
//!
//! Figures are rendered with the [`plotters`] bitmap backend and saved as
//! PNG files. This module holds the canvas setup, the error type, the
//! palette and the chart geometry that does not depend on a backend.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use plotters::{coord::Shift, prelude::*};

/// Errors that can occur while rendering a figure
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PlotError {
    #[display("output directory {} does not exist", path.display())]
    MissingOutputDir { path: PathBuf },
    #[display("failed to draw {}: {message}", path.display())]
    Drawing { path: PathBuf, message: String },
}

/// Maps a backend error to [`PlotError::Drawing`] for the figure at `path`.
pub(crate) fn drawing_error<E>(path: &Path) -> impl FnOnce(E) -> PlotError
where
    E: fmt::Display,
{
    move |e| PlotError::Drawing {
        path: path.to_owned(),
        message: e.to_string(),
    }
}

/// Creates a white PNG canvas of `size` pixels backed by `path`.
///
/// The file is written when the returned area is presented.
pub(crate) fn canvas(
    path: &Path,
    size: (u32, u32),
) -> Result<DrawingArea<BitMapBackend<'_>, Shift>, PlotError> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing_error(path))?;
    Ok(root)
}

pub(crate) const FONT: &str = "sans-serif";
pub(crate) const CAPTION_SIZE: u32 = 32;
pub(crate) const LABEL_SIZE: u32 = 20;

pub(crate) const TEAL: RGBColor = RGBColor(0, 128, 128);
pub(crate) const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);
pub(crate) const GRAY: RGBColor = RGBColor(128, 128, 128);

/// Color stops of the `YlOrRd` sequential palette, light to dark.
const YL_OR_RD: [(u8, u8, u8); 9] = [
    (255, 255, 204),
    (255, 237, 160),
    (254, 217, 118),
    (254, 178, 76),
    (253, 141, 60),
    (252, 78, 42),
    (227, 26, 28),
    (189, 0, 38),
    (128, 0, 38),
];

/// Samples the `YlOrRd` palette at `t`, clamped to `0.0..=1.0`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn yl_or_rd(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (YL_OR_RD.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(YL_OR_RD.len() - 2);
    let frac = scaled - lower as f64;
    let (r0, g0, b0) = YL_OR_RD[lower];
    let (r1, g1, b1) = YL_OR_RD[lower + 1];
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Position of `value` within `lo..=hi`, `0.0` for an empty range.
#[must_use]
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        (value - lo) / (hi - lo)
    } else {
        0.0
    }
}

/// Horizontal extent of bar `series` (of `series_count`) in category
/// `group`, with bars of `bar_width` placed side by side around the
/// category's center.
///
/// # Examples
///
/// ```
/// # use iaq_figures::plot::grouped_bar_span;
/// assert_eq!(grouped_bar_span(0, 0, 2, 0.4), (-0.4, 0.0));
/// assert_eq!(grouped_bar_span(0, 1, 2, 0.4), (0.0, 0.4));
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn grouped_bar_span(
    group: usize,
    series: usize,
    series_count: usize,
    bar_width: f64,
) -> (f64, f64) {
    let total = bar_width * series_count as f64;
    let left = category_center(group) - total / 2.0 + bar_width * series as f64;
    (left, left + bar_width)
}

/// Top of a bar drawn up from `baseline`.
///
/// On a logarithmic axis the baseline is the axis floor, and values below
/// it (zero in particular) collapse onto it.
#[must_use]
pub fn bar_top(value: f64, baseline: f64) -> f64 {
    value.max(baseline)
}

/// Label for an axis position that indexes into `labels`.
///
/// Positions that are not (close to) a whole index have no label.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn category_label(labels: &[&str], position: f64) -> String {
    let index = position.round();
    if (position - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels
        .get(index as usize)
        .map_or_else(String::new, |label| (*label).to_owned())
}

/// Axis position of the category at `index`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn category_center(index: usize) -> f64 {
    index as f64
}

/// Axis range covering `count` categories centered on `0..count`.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn category_range(count: usize) -> std::ops::Range<f64> {
    -0.5..(count as f64 - 0.5)
}
