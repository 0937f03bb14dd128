use std::f64::consts::TAU;

use crate::foundation::core::{Point, Vec2};

/// Straight-run spacing of loop shapes, in grid units.
const LOOP_STRAIGHT_STEP: f64 = 0.5;
const LOOP_POINTS_PER_TURN: usize = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopFacing {
    #[default]
    Up,
    Down,
}

fn direction(angle_deg: f64) -> Vec2 {
    let a = angle_deg.to_radians();
    Vec2::new(a.cos(), a.sin())
}

/// A ray of `radius` units starting `radius_gap` units from `origin`, at `angle_deg`
/// counter-clockwise from +x. Points are one unit apart, the last one exactly at the tip.
pub fn create_line(origin: Point, radius: f64, radius_gap: f64, angle_deg: f64) -> Vec<Point> {
    let dir = direction(angle_deg);
    let start = origin + dir * radius_gap;
    let end = start + dir * radius;
    let steps = if radius.is_finite() { radius.ceil().max(1.0) as usize } else { 1 };
    (0..=steps)
        .map(|i| start.lerp(end, i as f64 / steps as f64))
        .collect()
}

/// `line_number` rays, the `i`-th at `start_angle + i * line_gap_angle` degrees.
pub fn create_line_collection(
    origin: Point,
    radius: f64,
    radius_gap: f64,
    line_number: usize,
    line_gap_angle: f64,
    start_angle: f64,
) -> Vec<Vec<Point>> {
    (0..line_number)
        .map(|i| create_line(origin, radius, radius_gap, start_angle + i as f64 * line_gap_angle))
        .collect()
}

/// First point absolute, every other point an offset from it.
pub fn create_line_with_origin(points: &[Point]) -> Vec<Point> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    std::iter::once(first)
        .chain(rest.iter().map(|p| first + p.to_vec2()))
        .collect()
}

/// Parameters of a looping ray; see [`create_loop`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoopParams {
    pub radius: f64,
    pub radius_gap: f64,
    pub rotate_angle: f64,
    #[serde(default)]
    pub loop_facing: LoopFacing,
    #[serde(default = "one_loop")]
    pub number_of_loops: usize,
    /// Distance the ray advances over one loop, in grid units.
    #[serde(default = "unit_offset")]
    pub loop_offset_steps: f64,
    /// Where along the ray the first loop begins, as a fraction of `radius`.
    pub loop_start: f64,
}

fn one_loop() -> usize {
    1
}

fn unit_offset() -> f64 {
    1.0
}

/// A ray like [`create_line`] with `number_of_loops` curls inserted at `loop_start`.
///
/// Each curl is one turn of a prolate trochoid with radius `loop_offset_steps`, so it always
/// crosses itself. The tip stays at `radius` unless the curls reach past it. `Up` curls toward
/// the left of the ray direction.
pub fn create_loop(origin: Point, p: &LoopParams) -> Vec<Point> {
    let dir = direction(p.rotate_angle);
    let normal = match p.loop_facing {
        LoopFacing::Up => Vec2::new(-dir.y, dir.x),
        LoopFacing::Down => Vec2::new(dir.y, -dir.x),
    };
    let start = origin + dir * p.radius_gap;
    let at = |along: f64, lateral: f64| start + dir * along + normal * lateral;

    let radius = p.radius.max(0.0);
    let offset = p.loop_offset_steps.max(0.0);
    let loop_from = p.loop_start.clamp(0.0, 1.0) * radius;
    let turns = if offset > 0.0 { p.number_of_loops } else { 0 };
    let loop_end = loop_from + offset * turns as f64;

    let mut out = Vec::new();
    push_straight(&mut out, 0.0, loop_from, &at);
    for k in 0..turns {
        let base = loop_from + offset * k as f64;
        for j in 1..=LOOP_POINTS_PER_TURN {
            let phi = TAU * j as f64 / LOOP_POINTS_PER_TURN as f64;
            let along = base + offset * phi / TAU + offset * phi.sin();
            let lateral = offset * (1.0 - phi.cos());
            out.push(at(along, lateral));
        }
    }
    push_straight(&mut out, loop_end, radius.max(loop_end), &at);
    out
}

/// Appends points from `from` to `to` along the ray, skipping `from` when it is already present.
fn push_straight(out: &mut Vec<Point>, from: f64, to: f64, at: &impl Fn(f64, f64) -> Point) {
    let span = to - from;
    let steps = (span / LOOP_STRAIGHT_STEP).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let p = at(from + span * i as f64 / steps as f64, 0.0);
        if out.last().is_some_and(|last| (*last - p).hypot2() < 1.0e-18) {
            continue;
        }
        out.push(p);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/confetti/shapes.rs"]
mod tests;
