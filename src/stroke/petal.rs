use crate::animation::progress::{ProgressProvider, Tween, TweenConfig, TweenPhase};
use crate::foundation::core::{Affine, BezPath, Point, Vec2};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::grid::mapping::Grid;
use crate::paint::schema::ColorSchema;
use crate::shader::petal::PetalUniforms;
use crate::stroke::controller::StrokePhase;

/// What a rendering engine needs to fill one petal this frame.
#[derive(Clone, Copy, Debug)]
pub struct PetalDraw<'a> {
    /// Unrotated shape in pixel space.
    pub path: &'a BezPath,
    /// Local-to-canvas rotation about the petal's base.
    pub transform: Affine,
    pub uniforms: &'a PetalUniforms,
}

/// A two-quad leaf that unfolds by rotating from `start_angle` to `end_angle` (degrees) while
/// its gradient fills in.
#[derive(Clone, Debug)]
pub struct Petal {
    path: BezPath,
    pivot: Point,
    start_angle: f64,
    end_angle: f64,
    tween: Tween,
    uniforms: PetalUniforms,
}

impl Petal {
    /// `pos` and `size` are in grid units; `pos` is the bottom-left of the petal's box.
    pub fn new(
        grid: &Grid,
        pos: Point,
        size: Vec2,
        start_angle: f64,
        end_angle: f64,
        schema: &ColorSchema,
        progress: TweenConfig,
    ) -> StrokeResult<Self> {
        if !start_angle.is_finite() || !end_angle.is_finite() {
            return Err(StrokeError::validation("petal angles must be finite"));
        }
        let base = grid.unit_to_pixel(pos);
        let Vec2 { x: w, y: h } = grid.unit_size_to_pixel(size);
        if w.is_nan() || h.is_nan() || w <= 0.0 || h <= 0.0 {
            return Err(StrokeError::validation("petal size must be > 0"));
        }

        let pivot = Point::new(base.x, base.y - h / 2.0);
        let tip = Point::new(base.x + w, base.y - h / 2.0);
        let mut path = BezPath::new();
        path.move_to(pivot);
        path.quad_to(Point::new(base.x + w / 2.0, base.y - h), tip);
        path.quad_to(Point::new(base.x + w / 2.0, base.y), pivot);
        path.close_path();

        Ok(Self {
            path,
            pivot,
            start_angle,
            end_angle,
            tween: Tween::new(progress)?,
            uniforms: PetalUniforms::new(pivot, tip, schema, 0.0)?,
        })
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn progress(&self) -> f64 {
        self.tween.value()
    }

    pub fn angle(&self) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) * self.progress()
    }

    /// Rotation by `-angle` about the base, so positive angles turn counter-clockwise on screen.
    pub fn transform(&self) -> Affine {
        Affine::rotate_about(-self.angle().to_radians(), self.pivot)
    }

    pub fn phase(&self) -> StrokePhase {
        match self.tween.phase() {
            TweenPhase::Idle => StrokePhase::Idle,
            TweenPhase::Waiting => StrokePhase::Armed,
            TweenPhase::Done => StrokePhase::Done,
            _ if self.tween.is_looping() => StrokePhase::Looping,
            _ => StrokePhase::Running,
        }
    }

    pub fn run(&mut self) {
        self.tween.run();
        self.sync();
    }

    pub fn reset(&mut self) {
        self.tween.reset();
        self.sync();
    }

    pub fn pause(&mut self, paused: bool) {
        self.tween.pause(paused);
    }

    pub fn advance(&mut self, dt_ms: f64, orchestration: f64) -> StrokePhase {
        self.tween.advance(dt_ms, Some(orchestration));
        self.sync();
        self.phase()
    }

    fn sync(&mut self) {
        self.uniforms.set_progress(self.tween.value() as f32);
    }

    pub fn draw(&self) -> PetalDraw<'_> {
        PetalDraw {
            path: &self.path,
            transform: self.transform(),
            uniforms: &self.uniforms,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/petal.rs"]
mod tests;
