//! CPU reference of the stroke fragment shader.
//!
//! Evaluation runs in `f32` like the GPU program and returns premultiplied RGBA.

use crate::foundation::core::{Point, Rgba, TRANSPARENT, scale_premul};
use crate::foundation::math::{dist_sq, distance_to_segment, mix, smoothstep};
use crate::paint::schema::ColorSchema;
use crate::uniforms::bundle::UniformBundle;

/// Arc-length offset of the nearest sample to `pos`.
///
/// Scans samples in path order and stops as soon as a new best lies within the search threshold,
/// so on dense paths this is the first close sample rather than the exact nearest.
pub fn closest_distance(bundle: &UniformBundle, pos: Point) -> f32 {
    let (px, py) = (pos.x as f32, pos.y as f32);
    let pts = &bundle.points;
    let thr_sq = bundle.search_threshold * bundle.search_threshold;

    let mut best_sq = dist_sq(px, py, pts[0], pts[1]);
    let mut best = bundle.distances[0];
    for i in 1..bundle.num_points {
        let dsq = dist_sq(px, py, pts[2 * i], pts[2 * i + 1]);
        if dsq < best_sq {
            best_sq = dsq;
            best = bundle.distances[i];
            if dsq < thr_sq {
                break;
            }
        }
    }
    best
}

/// Distance to substitute when `pos` sits on a crossing's tangent segment that is still live.
pub fn intersection_bypass(bundle: &UniformBundle, pos: Point) -> Option<f32> {
    let l = bundle.total_length;
    let front_len = bundle.progress.front * l;
    let back_len = bundle.progress.back * l;
    let half_width = bundle.stroke_width / 2.0;

    (0..bundle.num_intersections).find_map(|k| {
        let (dk, p1, p2) = bundle.intersection(k);
        let a = Point::new(f64::from(p1[0]), f64::from(p1[1]));
        let b = Point::new(f64::from(p2[0]), f64::from(p2[1]));
        let (dist, along) = distance_to_segment(pos, a, b);
        let seg_len = (b - a).hypot() as f32;

        let on_segment = dist as f32 <= half_width;
        let ahead = front_len + seg_len > dk + along as f32;
        let reached = front_len >= dk - bundle.tangent_start_adjustment;
        let live = back_len < dk;
        (on_segment && ahead && reached && live).then_some(dk)
    })
}

/// Breakpoint interpolation with a smoothstepped local factor.
///
/// `colors` holds four floats per breakpoint. Fractions outside the first/last breakpoint clamp to
/// the end colours.
pub fn color_at_fraction(breakpoints: &[f32], colors: &[f32], fraction: f32) -> Rgba {
    let n = breakpoints.len().min(colors.len() / 4);
    let color = |i: usize| -> Rgba {
        [
            colors[4 * i],
            colors[4 * i + 1],
            colors[4 * i + 2],
            colors[4 * i + 3],
        ]
    };
    if n == 0 {
        return TRANSPARENT;
    }
    if n == 1 || fraction <= breakpoints[0] {
        return color(0);
    }
    if fraction >= breakpoints[n - 1] {
        return color(n - 1);
    }

    for i in 0..n - 1 {
        let (lo, hi) = (breakpoints[i], breakpoints[i + 1]);
        if fraction > hi {
            continue;
        }
        let span = hi - lo;
        if span <= 0.0 {
            return color(i + 1);
        }
        let t = smoothstep(0.0, 1.0, (fraction - lo) / span);
        let (a, b) = (color(i), color(i + 1));
        return [
            mix(a[0], b[0], t),
            mix(a[1], b[1], t),
            mix(a[2], b[2], t),
            mix(a[3], b[3], t),
        ];
    }
    color(n - 1)
}

impl ColorSchema {
    /// Colour at `fraction` of the path length, as the stroke shader would pick it.
    pub fn color_at(&self, fraction: f32) -> Rgba {
        let bps: Vec<f32> = self.stops().iter().map(|s| s.breakpoint).collect();
        let colors: Vec<f32> = self.stops().iter().flat_map(|s| s.color).collect();
        color_at_fraction(&bps, &colors, fraction)
    }
}

/// Alpha ramps at both ends of the live window `[back_len, front_len]`.
fn falloff(bundle: &UniformBundle, d: f32, front_len: f32, back_len: f32) -> f32 {
    let u = (d - back_len) / (front_len - back_len);
    let mut k = 1.0;
    if bundle.progress.front < 1.0 && bundle.falloff_front < 1.0 {
        k *= 1.0 - smoothstep(bundle.falloff_front, 1.0, u);
    }
    if bundle.progress.back > 0.0 && bundle.falloff_back < 1.0 {
        k *= smoothstep(0.0, 1.0 - bundle.falloff_back, u);
    }
    k
}

/// Premultiplied colour of the stroke at pixel-space `pos`.
pub fn evaluate(bundle: &UniformBundle, pos: Point) -> Rgba {
    let l = bundle.total_length;
    let front = bundle.progress.front;
    let back = bundle.progress.back;
    if l <= 0.0 || front <= 0.0 || back >= 1.0 || back >= front {
        return TRANSPARENT;
    }
    let front_len = front * l;
    let back_len = back * l;

    let mut d = closest_distance(bundle, pos);
    if d > front_len {
        return TRANSPARENT;
    }
    if d < back_len {
        match intersection_bypass(bundle, pos) {
            Some(dk) => d = dk,
            None => return TRANSPARENT,
        }
    }

    let n = bundle.num_breakpoints;
    let color = color_at_fraction(&bundle.breakpoints[..n], &bundle.colors[..4 * n], d / l);
    let k = falloff(bundle, d, front_len, back_len) * bundle.progress_alpha;
    scale_premul(color, k)
}

#[cfg(test)]
#[path = "../../tests/unit/shader/reference.rs"]
mod tests;
