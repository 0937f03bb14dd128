use crate::foundation::core::{Point, Vec2};
use crate::foundation::math::dist_sq;
use crate::path::geometry::PathGeometry;
use crate::path::sampling::SampleSet;

/// Uniform slots reserved for intersection records.
pub const MAX_INTERSECTIONS: usize = 2;
/// Floats per packed record: `d, p1.x, p1.y, p2.x, p2.y`.
pub const INTERSECTION_STRIDE: usize = 5;

/// Samples farther than this from the crossing are never used for its tangent.
const TANGENT_MATCH_CUTOFF: f32 = 0.1;
const MIN_DIRECTION_SQ: f64 = 1.0e-18;

/// A detected self-crossing and the short tangent segment the shader hit-tests against.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntersectionRecord {
    /// Arc length of the later strand at the crossing.
    pub distance_along_path: f32,
    pub tangent_p1: Point,
    pub tangent_p2: Point,
    /// Distance between the closest sample pair that produced this record.
    pub separation: f64,
}

impl IntersectionRecord {
    pub fn tangent_length(&self) -> f64 {
        (self.tangent_p2 - self.tangent_p1).hypot()
    }

    pub fn packed(&self) -> [f32; INTERSECTION_STRIDE] {
        [
            self.distance_along_path,
            self.tangent_p1.x as f32,
            self.tangent_p1.y as f32,
            self.tangent_p2.x as f32,
            self.tangent_p2.y as f32,
        ]
    }
}

#[derive(Clone, Copy)]
struct Working {
    x: f32,
    y: f32,
    d: f32,
}

impl Working {
    fn pos(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Greedy closest-pair crossing search over a working copy of `samples`.
///
/// Each round picks the globally closest sample pair, so a path without real crossings still
/// yields records; callers decide how much to trust `separation`.
#[tracing::instrument(skip(samples), fields(samples = samples.len()))]
pub fn find_intersections(
    samples: &SampleSet,
    expected: usize,
    tangent_extension: f64,
) -> Vec<IntersectionRecord> {
    if tangent_extension.is_nan() || tangent_extension <= 0.0 {
        tracing::warn!(tangent_extension, "non-positive tangent extension, skipping search");
        return Vec::new();
    }

    let mut work: Vec<Working> = samples
        .points()
        .chunks_exact(2)
        .zip(samples.distances())
        .map(|(p, &d)| Working { x: p[0], y: p[1], d })
        .collect();

    let mut out = Vec::with_capacity(expected);
    for _ in 0..expected {
        if work.len() < 2 {
            break;
        }
        let Some((hit, sep_sq)) = closest_pair(&work) else {
            break;
        };

        if let Some(dir) = tangent_direction(&work, hit) {
            let center = hit.pos();
            out.push(IntersectionRecord {
                distance_along_path: hit.d,
                tangent_p1: center - dir * tangent_extension,
                tangent_p2: center + dir * tangent_extension,
                separation: f64::from(sep_sq).sqrt(),
            });
        } else {
            tracing::debug!(d = hit.d, "no usable tangent direction at crossing");
        }

        work.retain(|s| s.x != hit.x || s.y != hit.y);
    }
    out
}

/// Later sample of the first closest pair, plus its squared separation.
fn closest_pair(work: &[Working]) -> Option<(Working, f32)> {
    let mut best: Option<(Working, f32)> = None;
    for (i, a) in work.iter().enumerate() {
        for b in &work[i + 1..] {
            let dsq = dist_sq(a.x, a.y, b.x, b.y);
            if best.is_none_or(|(_, m)| dsq < m) {
                best = Some((*b, dsq));
            }
        }
    }
    best
}

/// Unit direction of the path at the working sample nearest to `hit`.
fn tangent_direction(work: &[Working], hit: Working) -> Option<Vec2> {
    let cutoff_sq = TANGENT_MATCH_CUTOFF * TANGENT_MATCH_CUTOFF;
    let mut nearest: Option<(usize, f32)> = None;
    for (i, s) in work.iter().enumerate() {
        let dsq = dist_sq(hit.x, hit.y, s.x, s.y);
        if dsq < cutoff_sq && nearest.is_none_or(|(_, m)| dsq <= m) {
            nearest = Some((i, dsq));
        }
    }
    let (idx, _) = nearest?;
    let here = work[idx].pos();

    let forward = || {
        work[idx + 1..]
            .iter()
            .map(|s| s.pos() - here)
            .find(|v| v.hypot2() > MIN_DIRECTION_SQ)
    };
    let backward = || {
        work[..idx]
            .iter()
            .rev()
            .map(|s| here - s.pos())
            .find(|v| v.hypot2() > MIN_DIRECTION_SQ)
    };
    let dir = if idx + 1 == work.len() {
        backward().or_else(forward)
    } else {
        forward().or_else(backward)
    }?;
    Some(dir / dir.hypot())
}

impl PathGeometry {
    /// See [`find_intersections`].
    pub fn find_intersections(
        &self,
        samples: &SampleSet,
        expected: usize,
        tangent_extension: f64,
    ) -> Vec<IntersectionRecord> {
        find_intersections(samples, expected, tangent_extension)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/intersection.rs"]
mod tests;
