use std::fmt;
use std::str::FromStr;

use crate::confetti::scene::{ConfettiShape, ConfettiSpec, Origin, Scene};
use crate::confetti::shapes::{LoopFacing, LoopParams};
use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::grid::mapping::Grid;
use crate::paint::color::ColorDef;
use crate::paint::schema::{ColorSource, ColorStopDef};
use crate::paint::schemes::{ColorScheme, DEFAULT_SCHEME_BREAKPOINTS};
use crate::stroke::orchestrator::DEFAULT_ORCHESTRATION_MS;
use crate::uniforms::config::StrokeWidthToken;

/// Built-in scenes, selectable by name from the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Playground,
    Fireworks,
    Avatar,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Self::Playground, Self::Fireworks, Self::Avatar];

    pub fn name(self) -> &'static str {
        match self {
            Self::Playground => "playground",
            Self::Fireworks => "fireworks",
            Self::Avatar => "avatar",
        }
    }

    pub fn scene(self, keep_trail: bool) -> StrokeResult<Scene> {
        let (grid, confetti) = match self {
            Self::Playground => (
                Grid::new(400.0, 400.0, 16.0, 8.0)?.with_radius(1.0)?,
                playground(),
            ),
            Self::Fireworks => (Grid::new(400.0, 400.0, 8.0, 8.0)?, fireworks()),
            Self::Avatar => (Grid::new(400.0, 400.0, 16.0, 16.0)?, avatar()),
        };
        Ok(Scene {
            canvas: Canvas::new(400, 400)?,
            grid,
            orchestration_ms: DEFAULT_ORCHESTRATION_MS,
            keep_trail,
            confetti,
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = StrokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| StrokeError::config(format!("unknown preset '{s}'")))
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> ColorDef {
    ColorDef::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        1.0,
    )
}

fn stops(list: &[(f32, ColorDef)]) -> ColorSource {
    ColorSource::Stops(
        list.iter()
            .map(|&(breakpoint, color)| ColorStopDef { breakpoint, color })
            .collect(),
    )
}

fn scheme(scheme: ColorScheme) -> ColorSource {
    ColorSource::Scheme {
        scheme,
        breakpoints: DEFAULT_SCHEME_BREAKPOINTS,
    }
}

struct Fan {
    offset: (f64, f64),
    radius: f64,
    radius_gap: f64,
    line_number: usize,
    start_angle: f64,
    line_gap_angle: f64,
}

fn fan(
    f: Fan,
    stroke_width: StrokeWidthToken,
    duration_ms: f64,
    start_at_orchestration: f64,
    colors: ColorSource,
) -> ConfettiSpec {
    ConfettiSpec {
        shape: ConfettiShape::Line {
            radius: f.radius,
            radius_gap: f.radius_gap,
            line_number: f.line_number,
            start_angle: f.start_angle,
            line_gap_angle: f.line_gap_angle,
        },
        origin: Origin::default(),
        offset: Vec2::new(f.offset.0, f.offset.1),
        stroke_width,
        duration_ms,
        delay_ms: 0.0,
        start_at_orchestration,
        destruct_at_front: 0.4,
        ease: None,
        colors,
    }
}

fn curl(
    params: LoopParams,
    stroke_width: StrokeWidthToken,
    duration_ms: f64,
    start_at_orchestration: f64,
    destruct_at_front: f64,
    colors: ColorSource,
) -> ConfettiSpec {
    ConfettiSpec {
        shape: ConfettiShape::Loop(params),
        origin: Origin::default(),
        offset: Vec2::ZERO,
        stroke_width,
        duration_ms,
        delay_ms: 0.0,
        start_at_orchestration,
        destruct_at_front,
        ease: None,
        colors,
    }
}

fn playground() -> Vec<ConfettiSpec> {
    use StrokeWidthToken::{Stroke2, Stroke3, Stroke4};

    let ray = |radius, radius_gap, line_number, start_angle, line_gap_angle| Fan {
        offset: (0.0, 0.0),
        radius,
        radius_gap,
        line_number,
        start_angle,
        line_gap_angle,
    };
    let curl_params = |radius, radius_gap, rotate_angle, loop_facing, loop_offset_steps, loop_start| {
        LoopParams {
            radius,
            radius_gap,
            rotate_angle,
            loop_facing,
            number_of_loops: 1,
            loop_offset_steps,
            loop_start,
        }
    };

    vec![
        fan(
            ray(2.0, 2.2, 3, 45.0, 80.0),
            Stroke3,
            800.0,
            0.0,
            stops(&[(0.0, rgb8(74, 241, 143)), (0.8, rgb8(8, 132, 8))]),
        ),
        fan(
            ray(2.5, 2.3, 2, 180.0, 180.0),
            Stroke3,
            500.0,
            0.15,
            stops(&[(0.0, rgb8(108, 209, 243)), (1.0, rgb8(108, 85, 243))]),
        ),
        fan(
            ray(2.7, 2.1, 3, 75.0, 90.0),
            Stroke3,
            600.0,
            0.25,
            stops(&[
                (0.0, rgb8(252, 158, 248)),
                (0.7, rgb8(189, 13, 191)),
                (1.0, rgb8(179, 5, 147)),
            ]),
        ),
        curl(
            curl_params(6.0, 2.5, 20.0, LoopFacing::Up, 1.0, 0.4),
            Stroke3,
            700.0,
            0.1,
            0.3,
            stops(&[
                (0.0, rgb8(234, 214, 255)),
                (0.5, rgb8(225, 0, 238)),
                (1.0, rgb8(163, 0, 128)),
            ]),
        ),
        curl(
            curl_params(5.5, 2.0, -100.0, LoopFacing::Down, 1.1, 0.5),
            Stroke3,
            700.0,
            0.0,
            0.4,
            stops(&[
                (0.0, rgb8(240, 211, 0)),
                (0.4, rgb8(173, 204, 0)),
                (0.8, rgb8(34, 184, 0)),
            ]),
        ),
        curl(
            curl_params(3.3, 2.0, 100.0, LoopFacing::Up, 0.7, 0.3),
            Stroke4,
            700.0,
            0.0,
            0.4,
            stops(&[
                (0.0, rgb8(7, 138, 89)),
                (0.5, rgb8(202, 97, 63)),
                (1.0, rgb8(217, 19, 30)),
            ]),
        ),
        curl(
            curl_params(3.5, 2.5, 310.0, LoopFacing::Up, 1.0, 0.4),
            Stroke3,
            800.0,
            0.0,
            0.5,
            stops(&[
                (0.0, rgb8(153, 255, 51)),
                (0.7, rgb8(173, 226, 93)),
                (0.9, rgb8(206, 123, 234)),
            ]),
        ),
        fan(
            ray(1.8, 3.0, 12, 33.0, 30.0),
            Stroke2,
            500.0,
            0.3,
            stops(&[(0.0, rgb8(108, 226, 163)), (0.9, rgb8(173, 31, 54))]),
        ),
    ]
}

fn fireworks() -> Vec<ConfettiSpec> {
    use StrokeWidthToken::{Stroke2, Stroke3};

    let burst = |offset, radius, radius_gap, start_angle| Fan {
        offset,
        radius,
        radius_gap,
        line_number: 12,
        start_angle,
        line_gap_angle: 30.0,
    };
    let c = |r: f64, g: f64, b: f64, a: f64| ColorDef::rgba(r / 255.0, g / 255.0, b / 255.0, a);

    vec![
        fan(
            burst((8.0, -5.0), 2.0, 1.0, 10.0),
            Stroke2,
            400.0,
            0.4,
            stops(&[
                (0.0, c(250.0, 145.0, 238.0, 0.0)),
                (0.5, c(245.0, 0.0, 114.0, 0.0)),
                (1.0, c(163.0, 0.0, 76.0, 1.0)),
            ]),
        ),
        fan(
            burst((15.0, -1.0), 2.4, 1.0, 30.0),
            Stroke3,
            400.0,
            0.55,
            stops(&[
                (0.0, rgb8(7, 176, 43)),
                (0.5, rgb8(44, 135, 8)),
                (1.0, rgb8(80, 142, 41)),
            ]),
        ),
        fan(
            burst((7.0, 1.0), 2.2, 1.0, 40.0),
            Stroke3,
            400.0,
            0.15,
            stops(&[
                (0.0, rgb8(80, 142, 249)),
                (0.5, rgb8(40, 84, 246)),
                (1.0, rgb8(31, 48, 132)),
            ]),
        ),
        fan(
            burst((1.0, -3.0), 2.3, 1.5, 70.0),
            Stroke2,
            400.0,
            0.25,
            stops(&[(0.0, rgb8(247, 222, 38)), (1.0, rgb8(202, 122, 13))]),
        ),
    ]
}

fn avatar() -> Vec<ConfettiSpec> {
    use StrokeWidthToken::{Stroke2, Stroke3};

    let ring = |radius_gap, start_angle| Fan {
        offset: (0.0, 0.0),
        radius: 1.0,
        radius_gap,
        line_number: 7,
        start_angle,
        line_gap_angle: 50.0,
    };
    vec![
        fan(ring(2.0, 10.0), Stroke3, 500.0, 0.0, scheme(ColorScheme::Pastel)),
        fan(ring(1.8, 30.0), Stroke3, 500.0, 0.0, scheme(ColorScheme::Teal)),
        fan(ring(2.3, 40.0), Stroke2, 500.0, 0.0, scheme(ColorScheme::Red)),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/confetti/presets.rs"]
mod tests;
