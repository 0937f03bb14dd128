use crate::foundation::error::{StrokeError, StrokeResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Shader-side colour: RGBA components in `[0, 1]`.
///
/// Colours flowing through schemas and the reference shader are premultiplied.
pub type Rgba = [f32; 4];

/// Fully transparent premultiplied colour.
pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> StrokeResult<Self> {
        if width == 0 || height == 0 {
            return Err(StrokeError::validation("canvas width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Quantize an already-premultiplied float colour.
    pub fn from_premul_f32(c: Rgba) -> Self {
        fn to_u8(x: f32) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let a = c[3].clamp(0.0, 1.0);
        Self {
            r: to_u8(c[0].min(a)),
            g: to_u8(c[1].min(a)),
            b: to_u8(c[2].min(a)),
            a: to_u8(a),
        }
    }
}

/// Scale every channel of a premultiplied colour.
pub fn scale_premul(c: Rgba, k: f32) -> Rgba {
    [c[0] * k, c[1] * k, c[2] * k, c[3] * k]
}

/// Premultiplied source-over.
pub fn src_over(dst: Rgba, src: Rgba) -> Rgba {
    let inv = 1.0 - src[3];
    [
        src[0] + dst[0] * inv,
        src[1] + dst[1] * inv,
        src[2] + dst[2] * inv,
        src[3] + dst[3] * inv,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
