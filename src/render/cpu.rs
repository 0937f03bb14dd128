use kurbo::{PathEl, Shape};
use rayon::prelude::*;

use crate::foundation::core::{
    BezPath, Canvas, Point, Rect, Rgba, Rgba8Premul, TRANSPARENT, src_over,
};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::foundation::math::distance_to_segment;
use crate::render::engine::RenderEngine;
use crate::shader::petal::evaluate_petal;
use crate::shader::reference::evaluate;
use crate::stroke::controller::StrokeDraw;
use crate::stroke::petal::PetalDraw;

const FLATTEN_TOLERANCE: f64 = 0.25;

#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 4 * (y as usize * self.width as usize + x as usize);
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Premultiplied background; transparent when unset.
    pub clear_rgba: Option<[u8; 4]>,
}

/// Reference rasteriser: per-pixel shader evaluation at pixel centres, no anti-aliasing.
pub struct CpuRaster {
    canvas: Canvas,
    settings: RenderSettings,
    buf: Vec<Rgba>,
}

impl CpuRaster {
    pub fn new(canvas: Canvas, settings: RenderSettings) -> Self {
        let mut out = Self {
            canvas,
            settings,
            buf: vec![TRANSPARENT; canvas.pixel_count()],
        };
        out.clear();
        out
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn clear(&mut self) {
        let bg = self.settings.clear_rgba.map_or(TRANSPARENT, |c| {
            [
                f32::from(c[0]) / 255.0,
                f32::from(c[1]) / 255.0,
                f32::from(c[2]) / 255.0,
                f32::from(c[3]) / 255.0,
            ]
        });
        self.buf.fill(bg);
    }

    #[tracing::instrument(skip(self), fields(w = self.canvas.width, h = self.canvas.height))]
    pub fn frame(&self) -> FrameRGBA {
        let mut data = Vec::with_capacity(4 * self.buf.len());
        for &c in &self.buf {
            let p = Rgba8Premul::from_premul_f32(c);
            data.extend([p.r, p.g, p.b, p.a]);
        }
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
            premultiplied: true,
        }
    }

    /// Runs `shade` in parallel over the rows of `bounds`, compositing whatever it returns.
    fn shade_rect<F>(&mut self, bounds: Rect, shade: F)
    where
        F: Fn(Point) -> Option<Rgba> + Sync,
    {
        let (w, h) = (self.canvas.width as usize, self.canvas.height as usize);
        let x0 = bounds.x0.floor().max(0.0) as usize;
        let y0 = bounds.y0.floor().max(0.0) as usize;
        let x1 = (bounds.x1.ceil().max(0.0) as usize).min(w);
        let y1 = (bounds.y1.ceil().max(0.0) as usize).min(h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        self.buf
            .par_chunks_mut(w)
            .enumerate()
            .skip(y0)
            .take(y1 - y0)
            .for_each(|(y, row)| {
                for (x, px) in row.iter_mut().enumerate().take(x1).skip(x0) {
                    let pos = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                    if let Some(c) = shade(pos)
                        && c[3] > 0.0
                    {
                        *px = src_over(*px, c);
                    }
                }
            });
    }
}

/// Line segments of `path` after flattening.
fn flatten_segments(path: &BezPath) -> Vec<(Point, Point)> {
    let mut segs = Vec::new();
    let mut start: Option<Point> = None;
    let mut last: Option<Point> = None;
    kurbo::flatten(path.elements().iter().copied(), FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            start = Some(p);
            last = Some(p);
        }
        PathEl::LineTo(p) => {
            if let Some(a) = last {
                segs.push((a, p));
            }
            last = Some(p);
        }
        PathEl::ClosePath => {
            if let (Some(a), Some(s)) = (last, start) {
                segs.push((a, s));
            }
            last = start;
        }
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    segs
}

impl RenderEngine for CpuRaster {
    #[tracing::instrument(skip(self, draw), fields(width = draw.stroke_width))]
    fn draw_stroke(&mut self, draw: &StrokeDraw<'_>) -> StrokeResult<()> {
        if draw.stroke_width.is_nan() || draw.stroke_width <= 0.0 {
            return Err(StrokeError::validation("stroke width must be > 0"));
        }
        let half = f64::from(draw.stroke_width) / 2.0;
        let segs = flatten_segments(draw.path);
        if segs.is_empty() {
            return Ok(());
        }
        let bounds = draw.path.bounding_box().inflate(half + 1.0, half + 1.0);
        let uniforms = draw.uniforms;
        self.shade_rect(bounds, |pos| {
            let covered = segs
                .iter()
                .any(|&(a, b)| distance_to_segment(pos, a, b).0 <= half);
            covered.then(|| evaluate(uniforms, pos))
        });
        Ok(())
    }

    fn fill_petal(&mut self, draw: &PetalDraw<'_>) -> StrokeResult<()> {
        if draw.transform.determinant().abs() <= f64::EPSILON {
            return Err(StrokeError::geometry("petal transform is not invertible"));
        }
        let inverse = draw.transform.inverse();
        let bounds = draw
            .transform
            .transform_rect_bbox(draw.path.bounding_box())
            .inflate(1.0, 1.0);
        let (path, uniforms) = (draw.path, draw.uniforms);
        self.shade_rect(bounds, |pos| {
            let local = inverse * pos;
            path.contains(local).then(|| evaluate_petal(uniforms, local))
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> StrokeResult<()> {
        if radius.is_nan() || radius < 0.0 {
            return Err(StrokeError::validation("circle radius must be >= 0"));
        }
        let bounds = Rect::from_center_size(center, (2.0 * radius + 2.0, 2.0 * radius + 2.0));
        let r_sq = radius * radius;
        self.shade_rect(bounds, |pos| ((pos - center).hypot2() <= r_sq).then_some(color));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
