use crate::foundation::error::{StrokeError, StrokeResult};
use crate::paint::schema::{ColorSchema, MAX_BREAKPOINTS};
use crate::path::intersection::{INTERSECTION_STRIDE, IntersectionRecord, MAX_INTERSECTIONS};
use crate::path::sampling::{MAX_SAMPLES, SampleSet};
use crate::uniforms::config::AnimationConfig;

/// Draw-head and erase-tail fractions of the path length.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressPair {
    pub front: f32,
    pub back: f32,
}

impl ProgressPair {
    /// Clamps both cursors to `[0, 1]`; NaN becomes 0.
    pub fn new(front: f32, back: f32) -> Self {
        fn unit(v: f32) -> f32 {
            if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
        }
        Self {
            front: unit(front),
            back: unit(back),
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// Scalar type of a uniform as declared in the shader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniformKind {
    Float,
    Int,
}

/// One entry of the uniform layout. `len == 1` marks a scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformSlot {
    pub name: &'static str,
    pub kind: UniformKind,
    pub len: usize,
}

const fn float(name: &'static str, len: usize) -> UniformSlot {
    UniformSlot {
        name,
        kind: UniformKind::Float,
        len,
    }
}

const fn int(name: &'static str) -> UniformSlot {
    UniformSlot {
        name,
        kind: UniformKind::Int,
        len: 1,
    }
}

/// Declaration order of every uniform the stroke shader reads.
pub const UNIFORM_LAYOUT: [UniformSlot; 17] = [
    float("u_totalLength", 1),
    int("u_numPoints"),
    float("u_points", 2 * MAX_SAMPLES),
    float("u_distances", MAX_SAMPLES),
    float("u_searchThreshold", 1),
    int("u_numBreakpoints"),
    float("u_breakpoints", MAX_BREAKPOINTS),
    float("u_colors", 4 * MAX_BREAKPOINTS),
    int("u_numIntersections"),
    float("u_intersections", INTERSECTION_STRIDE * MAX_INTERSECTIONS),
    float("u_strokeWidth", 1),
    float("u_tangentStartAdjustment", 1),
    float("u_falloffFront", 1),
    float("u_falloffBack", 1),
    float("u_progressFront", 1),
    float("u_progressBack", 1),
    float("u_progressAlpha", 1),
];

/// Total number of floats in a flattened bundle.
pub const UNIFORM_FLOAT_COUNT: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < UNIFORM_LAYOUT.len() {
        total += UNIFORM_LAYOUT[i].len;
        i += 1;
    }
    total
};

/// Fixed-capacity uniform values for one stroke.
///
/// Arrays are always at full capacity. Unused sample slots repeat the last valid sample; unused
/// breakpoint, colour and intersection slots are zero. Every array travels with its valid count.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformBundle {
    pub(crate) total_length: f32,
    pub(crate) num_points: usize,
    pub(crate) points: Vec<f32>,
    pub(crate) distances: Vec<f32>,
    pub(crate) search_threshold: f32,
    pub(crate) num_breakpoints: usize,
    pub(crate) breakpoints: Vec<f32>,
    pub(crate) colors: Vec<f32>,
    pub(crate) num_intersections: usize,
    pub(crate) intersections: Vec<f32>,
    pub(crate) stroke_width: f32,
    pub(crate) tangent_start_adjustment: f32,
    pub(crate) falloff_front: f32,
    pub(crate) falloff_back: f32,
    pub(crate) progress: ProgressPair,
    pub(crate) progress_alpha: f32,
}

impl UniformBundle {
    /// Packs static geometry and the current progress. Over-capacity inputs are rejected.
    pub fn build(
        samples: &SampleSet,
        schema: &ColorSchema,
        intersections: &[IntersectionRecord],
        config: &AnimationConfig,
        progress: ProgressPair,
    ) -> StrokeResult<Self> {
        let n = samples.len();
        if n == 0 || n > MAX_SAMPLES {
            return Err(StrokeError::capacity(format!(
                "{n} samples do not fit {MAX_SAMPLES} uniform slots"
            )));
        }
        if schema.len() > MAX_BREAKPOINTS {
            return Err(StrokeError::capacity(format!(
                "{} breakpoints exceed {MAX_BREAKPOINTS}",
                schema.len()
            )));
        }
        if intersections.len() > MAX_INTERSECTIONS {
            return Err(StrokeError::capacity(format!(
                "{} intersections exceed {MAX_INTERSECTIONS}",
                intersections.len()
            )));
        }

        let mut points = samples.points().to_vec();
        let mut distances = samples.distances().to_vec();
        let (lx, ly) = (points[2 * n - 2], points[2 * n - 1]);
        let ld = distances[n - 1];
        for _ in n..MAX_SAMPLES {
            points.extend([lx, ly]);
            distances.push(ld);
        }

        let mut breakpoints = vec![0.0; MAX_BREAKPOINTS];
        let mut colors = vec![0.0; 4 * MAX_BREAKPOINTS];
        for (i, stop) in schema.stops().iter().enumerate() {
            breakpoints[i] = stop.breakpoint;
            colors[4 * i..4 * i + 4].copy_from_slice(&stop.color);
        }

        let mut packed = vec![0.0; INTERSECTION_STRIDE * MAX_INTERSECTIONS];
        for (i, rec) in intersections.iter().enumerate() {
            packed[INTERSECTION_STRIDE * i..INTERSECTION_STRIDE * (i + 1)]
                .copy_from_slice(&rec.packed());
        }

        Ok(Self {
            total_length: samples.total_length(),
            num_points: n,
            points,
            distances,
            search_threshold: config.search_threshold,
            num_breakpoints: schema.len(),
            breakpoints,
            colors,
            num_intersections: intersections.len(),
            intersections: packed,
            stroke_width: config.stroke_width,
            tangent_start_adjustment: config.tangent_start_adjustment,
            falloff_front: config.falloff_front,
            falloff_back: config.falloff_back,
            progress,
            progress_alpha: 1.0,
        })
    }

    /// Updates only the animated scalars.
    pub fn set_progress(&mut self, progress: ProgressPair, alpha: f32) {
        self.progress = progress;
        self.progress_alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    }

    pub fn progress(&self) -> ProgressPair {
        self.progress
    }

    pub fn progress_alpha(&self) -> f32 {
        self.progress_alpha
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn num_breakpoints(&self) -> usize {
        self.num_breakpoints
    }

    pub fn num_intersections(&self) -> usize {
        self.num_intersections
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Valid sample points (without padding).
    pub fn points(&self) -> &[f32] {
        &self.points[..2 * self.num_points]
    }

    /// Record `k` as `(distance, p1, p2)`.
    pub(crate) fn intersection(&self, k: usize) -> (f32, [f32; 2], [f32; 2]) {
        let r = &self.intersections[INTERSECTION_STRIDE * k..INTERSECTION_STRIDE * (k + 1)];
        (r[0], [r[1], r[2]], [r[3], r[4]])
    }

    /// Flattens every uniform in [`UNIFORM_LAYOUT`] order; counts are written as floats.
    pub fn to_floats(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(UNIFORM_FLOAT_COUNT);
        out.push(self.total_length);
        out.push(self.num_points as f32);
        out.extend_from_slice(&self.points);
        out.extend_from_slice(&self.distances);
        out.push(self.search_threshold);
        out.push(self.num_breakpoints as f32);
        out.extend_from_slice(&self.breakpoints);
        out.extend_from_slice(&self.colors);
        out.push(self.num_intersections as f32);
        out.extend_from_slice(&self.intersections);
        out.extend([
            self.stroke_width,
            self.tangent_start_adjustment,
            self.falloff_front,
            self.falloff_back,
            self.progress.front,
            self.progress.back,
            self.progress_alpha,
        ]);
        debug_assert_eq!(out.len(), UNIFORM_FLOAT_COUNT);
        out
    }

    /// Native-endian uniform payload in [`UNIFORM_LAYOUT`] order.
    ///
    /// Float slots carry their `f32` bits; int slots carry `i32` bits, as a runtime effect
    /// reads them.
    pub fn to_bytes(&self) -> Vec<u8> {
        let floats = self.to_floats();
        let mut words: Vec<u32> = Vec::with_capacity(floats.len());
        let mut values = floats.iter();
        for slot in UNIFORM_LAYOUT {
            for &v in values.by_ref().take(slot.len) {
                words.push(match slot.kind {
                    UniformKind::Float => v.to_bits(),
                    UniformKind::Int => bytemuck::cast::<i32, u32>(v as i32),
                });
            }
        }
        bytemuck::cast_slice::<u32, u8>(&words).to_vec()
    }

    /// Byte offset of the uniform named `name` inside [`UniformBundle::to_bytes`].
    pub fn byte_offset(name: &str) -> Option<usize> {
        let mut offset = 0;
        for slot in UNIFORM_LAYOUT {
            if slot.name == name {
                return Some(offset);
            }
            offset += 4 * slot.len;
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/uniforms/bundle.rs"]
mod tests;
