use crate::animation::ease::Ease;
use crate::confetti::shapes::{LoopParams, create_line_collection, create_loop};
use crate::foundation::core::{Canvas, Point, Vec2};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::grid::mapping::Grid;
use crate::paint::schema::ColorSource;
use crate::path::geometry::PathStyle;
use crate::stroke::controller::{Stroke, StrokeOptions};
use crate::stroke::orchestrator::{DEFAULT_ORCHESTRATION_MS, Orchestrator};
use crate::uniforms::config::StrokeWidthToken;

const DEFAULT_DESTRUCT_AT_FRONT: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    Center,
    BottomCenter,
    TopCenter,
    CenterLeft,
    CenterRight,
}

impl Anchor {
    pub fn resolve(self, grid: &Grid) -> Point {
        match self {
            Self::Center => grid.center(),
            Self::BottomCenter => grid.bottom_center(),
            Self::TopCenter => grid.top_center(),
            Self::CenterLeft => grid.center_left(),
            Self::CenterRight => grid.center_right(),
        }
    }
}

/// Burst origin in grid units: a named anchor or an explicit point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Origin {
    Anchor(Anchor),
    Point(Point),
}

impl Default for Origin {
    fn default() -> Self {
        Self::Anchor(Anchor::Center)
    }
}

impl Origin {
    pub fn resolve(self, grid: &Grid) -> Point {
        match self {
            Self::Anchor(a) => a.resolve(grid),
            Self::Point(p) => p,
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(tag = "line_type", rename_all = "snake_case")]
pub enum ConfettiShape {
    /// A fan of straight rays.
    Line {
        radius: f64,
        radius_gap: f64,
        line_number: usize,
        #[serde(default)]
        start_angle: f64,
        line_gap_angle: f64,
    },
    /// One ray with curls.
    Loop(LoopParams),
}

/// One group of confetti strokes sharing shape, colours and timing.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ConfettiSpec {
    #[serde(flatten)]
    pub shape: ConfettiShape,
    #[serde(default)]
    pub origin: Origin,
    /// Added to the resolved origin, in grid units.
    #[serde(default)]
    pub offset: Vec2,
    pub stroke_width: StrokeWidthToken,
    pub duration_ms: f64,
    #[serde(default)]
    pub delay_ms: f64,
    #[serde(default)]
    pub start_at_orchestration: f64,
    #[serde(default = "default_destruct_at_front")]
    pub destruct_at_front: f64,
    #[serde(default)]
    pub ease: Option<Ease>,
    pub colors: ColorSource,
}

fn default_destruct_at_front() -> f64 {
    DEFAULT_DESTRUCT_AT_FRONT
}

impl ConfettiSpec {
    /// Grid-unit point lists, one per stroke.
    pub fn paths(&self, grid: &Grid) -> Vec<Vec<Point>> {
        let origin = self.origin.resolve(grid) + self.offset;
        match &self.shape {
            ConfettiShape::Line {
                radius,
                radius_gap,
                line_number,
                start_angle,
                line_gap_angle,
            } => create_line_collection(
                origin,
                *radius,
                *radius_gap,
                *line_number,
                *line_gap_angle,
                *start_angle,
            ),
            ConfettiShape::Loop(params) => vec![create_loop(origin, params)],
        }
    }

    fn style(&self) -> PathStyle {
        match self.shape {
            ConfettiShape::Line { .. } => PathStyle::Polyline,
            ConfettiShape::Loop(_) => PathStyle::Spline,
        }
    }

    /// Sparks for every path. `keep_trail` stops the back cursor from ever starting.
    pub fn strokes(&self, grid: &Grid, keep_trail: bool) -> StrokeResult<Vec<Stroke>> {
        let schema = self.colors.resolve()?;
        let options = StrokeOptions {
            style: self.style(),
            duration_ms: self.duration_ms,
            delay_ms: self.delay_ms,
            ease: self.ease.unwrap_or(StrokeOptions::default().ease),
            start_at_orchestration: self.start_at_orchestration,
            destruct_at_front: if keep_trail { 1.0 } else { self.destruct_at_front },
            ..StrokeOptions::default()
        };
        self.paths(grid)
            .into_iter()
            .map(|points| Stroke::spark(points, *grid, schema.clone(), self.stroke_width, options))
            .collect()
    }
}

/// A renderable confetti scene, as read from JSON.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub grid: Grid,
    #[serde(default = "default_orchestration_ms")]
    pub orchestration_ms: f64,
    #[serde(default)]
    pub keep_trail: bool,
    #[serde(default)]
    pub confetti: Vec<ConfettiSpec>,
}

fn default_orchestration_ms() -> f64 {
    DEFAULT_ORCHESTRATION_MS
}

impl Scene {
    pub fn from_json(json: &str) -> StrokeResult<Self> {
        let scene: Self = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> StrokeResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if !self.orchestration_ms.is_finite() || self.orchestration_ms < 0.0 {
            return Err(StrokeError::validation("orchestration_ms must be finite and >= 0"));
        }
        for (i, c) in self.confetti.iter().enumerate() {
            if !c.duration_ms.is_finite() || c.duration_ms < 0.0 {
                return Err(StrokeError::validation(format!(
                    "confetti {i}: duration_ms must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    pub fn with_keep_trail(mut self, keep_trail: bool) -> Self {
        self.keep_trail = keep_trail;
        self
    }

    /// Stroke count across all confetti groups.
    pub fn stroke_count(&self) -> usize {
        self.confetti.iter().map(|c| c.paths(&self.grid).len()).sum()
    }

    pub fn build(&self) -> StrokeResult<Orchestrator> {
        self.validate()?;
        let mut orchestrator = Orchestrator::with_duration(self.orchestration_ms)?;
        for spec in &self.confetti {
            for stroke in spec.strokes(&self.grid, self.keep_trail)? {
                orchestrator.push_stroke(stroke);
            }
        }
        tracing::debug!(strokes = orchestrator.strokes().len(), "built scene");
        Ok(orchestrator)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/confetti/scene.rs"]
mod tests;
