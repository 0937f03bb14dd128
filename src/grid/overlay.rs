use crate::foundation::core::{Point, Rgba};
use crate::grid::mapping::Grid;

/// One debug dot of the grid overlay, in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayDot {
    pub center: Point,
    pub radius: f64,
    pub color: Rgba,
}

impl Grid {
    /// Dots at every cell corner `(i * cell_width, j * cell_height)` for the visible columns and rows.
    pub fn overlay_dots(&self, color: Rgba) -> Vec<OverlayDot> {
        let (cols, rows) = (self.columns(), self.rows());
        let mut out = Vec::with_capacity(cols * rows);
        for i in 0..cols {
            for j in 0..rows {
                out.push(OverlayDot {
                    center: Point::new(i as f64 * self.cell_width(), j as f64 * self.cell_height()),
                    radius: self.radius(),
                    color,
                });
            }
        }
        out
    }

    /// Anchor markers in pixel space, drawn slightly larger than the grid dots.
    pub fn anchor_dots(&self, color: Rgba) -> Vec<OverlayDot> {
        self.anchors()
            .into_iter()
            .map(|a| OverlayDot {
                center: self.unit_to_pixel(a),
                radius: self.radius() * 2.0,
                color,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/overlay.rs"]
mod tests;
