//! Figure 6: governance framework flow chart
//!
//! Drawn directly in pixel coordinates: one rounded box per step, left to
//! right, joined by arrows.

use std::path::Path;

use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    data::GOVERNANCE,
    plot::{CAPTION_SIZE, FONT, LABEL_SIZE, PlotError, TEAL, canvas, drawing_error},
};

const SIZE: (u32, u32) = (1800, 600);
/// Horizontal centers of the outermost boxes, as fractions of the width.
const FIRST_CENTER: f64 = 0.12;
const LAST_CENTER: f64 = 0.90;
/// Box width as a share of the distance between neighboring centers.
const BOX_FILL: f64 = 0.7;
const BOX_HEIGHT: i32 = 150;
const CORNER_RADIUS: i32 = 16;
const ARROW_GAP: i32 = 6;
const ARROW_HEAD: i32 = 14;
const LINE_HEIGHT: i32 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Bounds {
    fn center(self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }
}

/// Places `step_count` boxes on one row across an area of `size` pixels.
#[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn layout(step_count: usize, size: (u32, u32)) -> Vec<Bounds> {
    let width = f64::from(size.0);
    let middle = f64::from(size.1) / 2.0;
    let spacing = if step_count > 1 {
        (LAST_CENTER - FIRST_CENTER) / (step_count - 1) as f64
    } else {
        LAST_CENTER - FIRST_CENTER
    };
    let half_width = spacing * BOX_FILL * width / 2.0;
    let half_height = f64::from(BOX_HEIGHT) / 2.0;

    (0..step_count)
        .map(|i| {
            let center = if step_count > 1 {
                FIRST_CENTER + spacing * i as f64
            } else {
                0.5
            } * width;
            Bounds {
                left: (center - half_width).round() as i32,
                top: (middle - half_height).round() as i32,
                right: (center + half_width).round() as i32,
                bottom: (middle + half_height).round() as i32,
            }
        })
        .collect()
}

/// Outline of `bounds` with corners rounded to `radius`, clockwise from
/// the top edge.
#[expect(clippy::cast_possible_truncation)]
fn rounded_rect(bounds: Bounds, radius: i32) -> Vec<(i32, i32)> {
    const ARC_STEPS: u32 = 6;
    let r = radius
        .min((bounds.right - bounds.left) / 2)
        .min((bounds.bottom - bounds.top) / 2)
        .max(0);
    let corners = [
        ((bounds.right - r, bounds.top + r), -90.0),
        ((bounds.right - r, bounds.bottom - r), 0.0),
        ((bounds.left + r, bounds.bottom - r), 90.0),
        ((bounds.left + r, bounds.top + r), 180.0),
    ];
    corners
        .into_iter()
        .flat_map(|((cx, cy), start): ((i32, i32), f64)| {
            (0..=ARC_STEPS).map(move |step| {
                let angle = (start + 90.0 * f64::from(step) / f64::from(ARC_STEPS)).to_radians();
                (
                    cx + (f64::from(r) * angle.cos()).round() as i32,
                    cy + (f64::from(r) * angle.sin()).round() as i32,
                )
            })
        })
        .collect()
}

/// Start and tip of the arrow between each pair of neighboring boxes.
fn arrows(boxes: &[Bounds]) -> Vec<((i32, i32), (i32, i32))> {
    boxes
        .windows(2)
        .map(|pair| {
            let (_, y) = pair[0].center();
            ((pair[0].right + ARROW_GAP, y), (pair[1].left - ARROW_GAP, y))
        })
        .collect()
}

/// Vertical offsets of `line_count` lines centered on the box middle.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn line_offsets(line_count: usize) -> Vec<i32> {
    let n = line_count as i32;
    (0..n).map(|i| (2 * i - (n - 1)) * LINE_HEIGHT / 2).collect()
}

pub(super) fn render(path: &Path) -> Result<(), PlotError> {
    let data = &GOVERNANCE;
    let root = canvas(path, SIZE)?;
    let area = root
        .titled(data.title, (FONT, CAPTION_SIZE))
        .map_err(drawing_error(path))?;

    let boxes = layout(data.steps.len(), area.dim_in_pixel());
    let text_style = (FONT, LABEL_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (step, &bounds) in data.steps.iter().zip(&boxes) {
        let mut outline = rounded_rect(bounds, CORNER_RADIUS);
        area.draw(&Polygon::new(outline.clone(), WHITE.filled()))
            .map_err(drawing_error(path))?;
        if let Some(&first) = outline.first() {
            outline.push(first);
        }
        area.draw(&PathElement::new(outline, TEAL.stroke_width(2)))
            .map_err(drawing_error(path))?;

        let (cx, cy) = bounds.center();
        let lines = step.lines().collect::<Vec<_>>();
        for (line, offset) in lines.iter().zip(line_offsets(lines.len())) {
            area.draw(&Text::new(*line, (cx, cy + offset), text_style.clone()))
                .map_err(drawing_error(path))?;
        }
    }

    for (start, tip) in arrows(&boxes) {
        let base = (tip.0 - ARROW_HEAD, tip.1);
        area.draw(&PathElement::new(vec![start, base], TEAL.stroke_width(2)))
            .map_err(drawing_error(path))?;
        let head = vec![
            tip,
            (base.0, base.1 - ARROW_HEAD / 2),
            (base.0, base.1 + ARROW_HEAD / 2),
        ];
        area.draw(&Polygon::new(head, TEAL.filled()))
            .map_err(drawing_error(path))?;
    }

    root.present().map_err(drawing_error(path))?;
    Ok(())
}
