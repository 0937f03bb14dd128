use crate::foundation::core::Point;
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::path::geometry::PathGeometry;

/// Uniform array capacity for samples.
pub const MAX_SAMPLES: usize = 500;
/// Sample count used when a stroke does not ask for one.
pub const DEFAULT_SAMPLE_COUNT: usize = 300;

/// Flat `[x0, y0, x1, y1, ..]` points with their arc-length offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    points: Vec<f32>,
    distances: Vec<f32>,
}

impl SampleSet {
    /// Checks shape and monotonicity of externally built samples.
    pub fn new(points: Vec<f32>, distances: Vec<f32>) -> StrokeResult<Self> {
        let n = distances.len();
        if points.len() != 2 * n {
            return Err(StrokeError::validation(format!(
                "sample points must hold 2*{n} floats, got {}",
                points.len()
            )));
        }
        check_count(n)?;
        if points.iter().chain(&distances).any(|v| !v.is_finite()) {
            return Err(StrokeError::validation("samples must be finite"));
        }
        if distances[0] < 0.0 || distances.windows(2).any(|w| w[1] < w[0]) {
            return Err(StrokeError::validation(
                "sample distances must be non-negative and non-decreasing",
            ));
        }
        Ok(Self { points, distances })
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn points(&self) -> &[f32] {
        &self.points
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    pub fn point(&self, i: usize) -> Point {
        Point::new(
            f64::from(self.points[2 * i]),
            f64::from(self.points[2 * i + 1]),
        )
    }

    /// Arc length covered by the samples (the last distance).
    pub fn total_length(&self) -> f32 {
        self.distances.last().copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, f32)> + '_ {
        (0..self.len()).map(|i| (self.point(i), self.distances[i]))
    }
}

fn check_count(n: usize) -> StrokeResult<()> {
    if n < 2 {
        return Err(StrokeError::validation(format!(
            "sample count must be >= 2, got {n}"
        )));
    }
    if n > MAX_SAMPLES {
        return Err(StrokeError::capacity(format!(
            "sample count {n} exceeds {MAX_SAMPLES}"
        )));
    }
    Ok(())
}

impl PathGeometry {
    /// Samples `n` points evenly spaced by arc length.
    #[tracing::instrument(skip(self), fields(length = self.total_length()))]
    pub fn sample(&self, n: usize) -> StrokeResult<SampleSet> {
        check_count(n)?;
        let total = self.total_length();
        let last = (n - 1) as f64;

        let mut points = Vec::with_capacity(2 * n);
        let mut distances = Vec::with_capacity(n);
        for i in 0..n {
            let d = (i as f64 / last) * total;
            let p = self.point_at_length(d);
            points.push(p.x as f32);
            points.push(p.y as f32);
            distances.push(d as f32);
        }
        Ok(SampleSet { points, distances })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/sampling.rs"]
mod tests;
