use crate::foundation::core::{Point, Rgba, TRANSPARENT, scale_premul};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::foundation::math::{mix, smoothstep};
use crate::paint::schema::ColorSchema;

/// Gradient stop capacity of the petal shader.
pub const MAX_PETAL_STOPS: usize = 10;

const PAD_COLOR: Rgba = [0.0, 0.0, 0.0, 1.0];
const FADE_SPAN: f32 = 0.9;
const FADE_ALPHAS: [f32; 4] = [0.0, 0.15, 0.3, 0.5];

/// Uniforms of the petal gradient, in the petal's unrotated local space.
#[derive(Clone, Debug, PartialEq)]
pub struct PetalUniforms {
    pub(crate) start: Point,
    pub(crate) end: Point,
    pub(crate) colors: [Rgba; MAX_PETAL_STOPS],
    pub(crate) positions: [f32; MAX_PETAL_STOPS],
    pub(crate) num_stops: usize,
    pub(crate) progress: f32,
}

impl PetalUniforms {
    /// Unused stops are padded with opaque black at position 1.
    pub fn new(start: Point, end: Point, schema: &ColorSchema, progress: f32) -> StrokeResult<Self> {
        if schema.len() > MAX_PETAL_STOPS {
            return Err(StrokeError::capacity(format!(
                "{} petal gradient stops exceed {MAX_PETAL_STOPS}",
                schema.len()
            )));
        }
        let mut colors = [PAD_COLOR; MAX_PETAL_STOPS];
        let mut positions = [1.0; MAX_PETAL_STOPS];
        for (i, stop) in schema.stops().iter().enumerate() {
            colors[i] = stop.color;
            positions[i] = stop.breakpoint;
        }
        let mut out = Self {
            start,
            end,
            colors,
            positions,
            num_stops: schema.len(),
            progress: 0.0,
        };
        out.set_progress(progress);
        Ok(out)
    }

    pub fn set_progress(&mut self, progress: f32) {
        self.progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

/// Stepped fade just behind the progress head.
fn head_alpha(t: f32, progress: f32) -> f32 {
    let range = FADE_SPAN * (1.0 - progress);
    if t <= progress - range {
        return 1.0;
    }
    let step = range / 4.0;
    (1..=4)
        .find(|&k| t > progress - k as f32 * step)
        .map_or(FADE_ALPHAS[3], |k| FADE_ALPHAS[k - 1])
}

/// Premultiplied petal colour at local-space `pos`.
pub fn evaluate_petal(u: &PetalUniforms, pos: Point) -> Rgba {
    if u.progress <= 0.0 {
        return TRANSPARENT;
    }
    let total = (u.end - u.start).hypot() as f32;
    if total <= 0.0 {
        return TRANSPARENT;
    }
    let t = (pos - u.start).hypot() as f32 / total;
    if t > u.progress {
        return TRANSPARENT;
    }
    let alpha = head_alpha(t, u.progress);

    let t = smoothstep(0.0, 1.0, t);
    let mut color = u.colors[0];
    for i in 0..u.num_stops.saturating_sub(1).min(MAX_PETAL_STOPS - 1) {
        let (lo, hi) = (u.positions[i], u.positions[i + 1]);
        if t >= lo && t <= hi {
            color = if hi > lo {
                let local = smoothstep(0.0, 1.0, (t - lo) / (hi - lo));
                let (a, b) = (u.colors[i], u.colors[i + 1]);
                [
                    mix(a[0], b[0], local),
                    mix(a[1], b[1], local),
                    mix(a[2], b[2], local),
                    mix(a[3], b[3], local),
                ]
            } else {
                u.colors[i + 1]
            };
            break;
        }
    }
    scale_premul(color, alpha)
}

#[cfg(test)]
#[path = "../../tests/unit/shader/petal.rs"]
mod tests;
