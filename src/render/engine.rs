use crate::foundation::core::{Point, Rgba};
use crate::foundation::error::StrokeResult;
use crate::grid::overlay::OverlayDot;
use crate::stroke::controller::StrokeDraw;
use crate::stroke::petal::PetalDraw;

/// One unit of work for a [`RenderEngine`].
#[derive(Clone, Copy, Debug)]
pub enum DrawCall<'a> {
    Stroke(StrokeDraw<'a>),
    Petal(PetalDraw<'a>),
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
}

impl From<OverlayDot> for DrawCall<'_> {
    fn from(dot: OverlayDot) -> Self {
        Self::Circle {
            center: dot.center,
            radius: dot.radius,
            color: dot.color,
        }
    }
}

/// Rasteriser seam. Colours are premultiplied.
pub trait RenderEngine {
    /// Strokes `draw.path` at `draw.stroke_width`, shading covered pixels from `draw.uniforms`.
    fn draw_stroke(&mut self, draw: &StrokeDraw<'_>) -> StrokeResult<()>;

    /// Fills the petal shape under its transform with the petal gradient.
    fn fill_petal(&mut self, draw: &PetalDraw<'_>) -> StrokeResult<()>;

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> StrokeResult<()>;

    fn submit(&mut self, call: &DrawCall<'_>) -> StrokeResult<()> {
        match call {
            DrawCall::Stroke(d) => self.draw_stroke(d),
            DrawCall::Petal(d) => self.fill_petal(d),
            DrawCall::Circle {
                center,
                radius,
                color,
            } => self.fill_circle(*center, *radius, *color),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/engine.rs"]
mod tests;
