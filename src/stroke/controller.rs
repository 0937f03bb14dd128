use crate::animation::ease::Ease;
use crate::animation::progress::{ProgressProvider, Tween, TweenConfig, TweenPhase};
use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::foundation::math::Fnv1a64;
use crate::grid::mapping::Grid;
use crate::paint::schema::ColorSchema;
use crate::path::geometry::{PathGeometry, PathStyle};
use crate::path::intersection::{IntersectionRecord, MAX_INTERSECTIONS, find_intersections};
use crate::path::sampling::{DEFAULT_SAMPLE_COUNT, MAX_SAMPLES, SampleSet};
use crate::uniforms::bundle::{ProgressPair, UniformBundle};
use crate::uniforms::config::{AnimationConfig, StrokeWidthToken};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeKind {
    /// Drawn by the front cursor, then erased by the back cursor.
    #[default]
    Spark,
    /// Drawn by the front cursor only; the trail stays.
    Line,
}

/// Per-stroke tunables.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrokeOptions {
    pub sample_count: usize,
    pub max_intersections: usize,
    pub style: PathStyle,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
    /// The front cursor starts once orchestration progress exceeds this.
    pub start_at_orchestration: f64,
    /// The back cursor starts once front progress exceeds this. `>= 1` keeps the trail.
    pub destruct_at_front: f64,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            max_intersections: MAX_INTERSECTIONS,
            style: PathStyle::Polyline,
            duration_ms: 900.0,
            delay_ms: 0.0,
            ease: Ease::OutEase,
            start_at_orchestration: 0.0,
            destruct_at_front: 0.4,
        }
    }
}

impl StrokeOptions {
    pub fn validate(&self) -> StrokeResult<()> {
        if self.sample_count < 2 || self.sample_count > MAX_SAMPLES {
            return Err(StrokeError::capacity(format!(
                "sample count {} must be in [2, {MAX_SAMPLES}]",
                self.sample_count
            )));
        }
        if self.max_intersections > MAX_INTERSECTIONS {
            return Err(StrokeError::capacity(format!(
                "{} intersections exceed {MAX_INTERSECTIONS}",
                self.max_intersections
            )));
        }
        if !self.start_at_orchestration.is_finite() || !self.destruct_at_front.is_finite() {
            return Err(StrokeError::validation("stroke triggers must be finite"));
        }
        Ok(())
    }

    fn front_tween(&self) -> TweenConfig {
        TweenConfig::new(self.duration_ms, self.ease)
            .with_delay(self.delay_ms)
            .with_wait_until(self.start_at_orchestration)
    }

    fn back_tween(&self) -> TweenConfig {
        TweenConfig::new(self.duration_ms, self.ease).with_wait_until(self.destruct_at_front)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StrokePhase {
    Idle,
    /// Geometry is ready and the front cursor is waiting for its trigger.
    Armed,
    Running,
    Looping,
    Done,
}

/// Geometry derived from one point list, keyed by its fingerprint.
#[derive(Clone, Debug)]
struct GeometryCache {
    key: u64,
    geometry: PathGeometry,
    samples: SampleSet,
    intersections: Vec<IntersectionRecord>,
    uniforms: UniformBundle,
}

/// What a rendering engine needs to draw one stroke this frame.
#[derive(Clone, Copy, Debug)]
pub struct StrokeDraw<'a> {
    pub path: &'a BezPath,
    pub stroke_width: f32,
    pub uniforms: &'a UniformBundle,
}

/// A progressively drawn and erased stroke over grid-space points.
#[derive(Clone, Debug)]
pub struct Stroke {
    kind: StrokeKind,
    points: Vec<Point>,
    grid: Grid,
    schema: ColorSchema,
    token: StrokeWidthToken,
    config: AnimationConfig,
    options: StrokeOptions,
    front: Tween,
    back: Tween,
    cache: Option<GeometryCache>,
    phase: StrokePhase,
}

impl Stroke {
    pub fn new(
        kind: StrokeKind,
        points: Vec<Point>,
        grid: Grid,
        schema: ColorSchema,
        token: StrokeWidthToken,
        options: StrokeOptions,
    ) -> StrokeResult<Self> {
        options.validate()?;
        Ok(Self {
            kind,
            points,
            grid,
            schema,
            token,
            config: token.config(),
            options,
            front: Tween::new(options.front_tween())?,
            back: Tween::new(options.back_tween())?,
            cache: None,
            phase: StrokePhase::Idle,
        })
    }

    pub fn spark(
        points: Vec<Point>,
        grid: Grid,
        schema: ColorSchema,
        token: StrokeWidthToken,
        options: StrokeOptions,
    ) -> StrokeResult<Self> {
        Self::new(StrokeKind::Spark, points, grid, schema, token, options)
    }

    pub fn line(
        points: Vec<Point>,
        grid: Grid,
        schema: ColorSchema,
        token: StrokeWidthToken,
        options: StrokeOptions,
    ) -> StrokeResult<Self> {
        Self::new(StrokeKind::Line, points, grid, schema, token, options)
    }

    pub fn kind(&self) -> StrokeKind {
        self.kind
    }

    pub fn phase(&self) -> StrokePhase {
        self.phase
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn token(&self) -> StrokeWidthToken {
        self.token
    }

    pub fn options(&self) -> &StrokeOptions {
        &self.options
    }

    pub fn progress(&self) -> ProgressPair {
        ProgressPair::new(self.front.value() as f32, self.back.value() as f32)
    }

    /// `None` until [`Stroke::prepare`] or [`Stroke::run`] has built the geometry.
    pub fn geometry(&self) -> Option<&PathGeometry> {
        self.cache.as_ref().map(|c| &c.geometry)
    }

    pub fn samples(&self) -> Option<&SampleSet> {
        self.cache.as_ref().map(|c| &c.samples)
    }

    pub fn intersections(&self) -> &[IntersectionRecord] {
        self.cache.as_ref().map_or(&[], |c| &c.intersections)
    }

    pub fn uniforms(&self) -> Option<&UniformBundle> {
        self.cache.as_ref().map(|c| &c.uniforms)
    }

    fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u64(self.points.len() as u64);
        for p in &self.points {
            h.write_f64(p.x);
            h.write_f64(p.y);
        }
        for v in [
            self.grid.grid_width(),
            self.grid.grid_height(),
            self.grid.cell_width(),
            self.grid.cell_height(),
        ] {
            h.write_f64(v);
        }
        h.write_u8(self.options.style.tag());
        h.write_u64(self.options.sample_count as u64);
        h.write_u64(self.options.max_intersections as u64);
        h.write_f64(f64::from(self.config.tangent_extension));
        h.finish()
    }

    /// Builds (or reuses) geometry, samples, intersections and static uniforms.
    pub fn prepare(&mut self) -> StrokeResult<()> {
        let key = self.fingerprint();
        if self.cache.as_ref().is_some_and(|c| c.key == key) {
            tracing::debug!(key, "stroke geometry cache hit");
            return Ok(());
        }
        tracing::debug!(key, "stroke geometry cache miss");

        let geometry = PathGeometry::from_unit_points(&self.grid, &self.points, self.options.style);
        let samples = geometry.sample(self.options.sample_count)?;
        let intersections = find_intersections(
            &samples,
            self.options.max_intersections,
            f64::from(self.config.tangent_extension),
        );
        for rec in &intersections {
            if rec.separation > f64::from(self.config.stroke_width) {
                tracing::warn!(
                    distance = rec.distance_along_path,
                    separation = rec.separation,
                    "low-confidence intersection: closest samples are farther apart than the stroke width"
                );
            }
        }
        let uniforms = UniformBundle::build(
            &samples,
            &self.schema,
            &intersections,
            &self.config,
            self.progress(),
        )?;
        self.cache = Some(GeometryCache {
            key,
            geometry,
            samples,
            intersections,
            uniforms,
        });
        Ok(())
    }

    /// Replaces the points; geometry is rebuilt only if the fingerprint changes.
    pub fn set_points(&mut self, points: Vec<Point>) -> StrokeResult<()> {
        self.points = points;
        self.refresh()
    }

    /// Replaces the grid; geometry is rebuilt only if the fingerprint changes.
    pub fn set_grid(&mut self, grid: Grid) -> StrokeResult<()> {
        self.grid = grid;
        self.refresh()
    }

    fn refresh(&mut self) -> StrokeResult<()> {
        if self.cache.is_some() {
            self.prepare()
        } else {
            Ok(())
        }
    }

    /// Rewinds both cursors and starts them. Lines never start their back cursor.
    pub fn run(&mut self) -> StrokeResult<()> {
        self.prepare()?;
        self.front.run();
        match self.kind {
            StrokeKind::Spark => self.back.run(),
            StrokeKind::Line => self.back.reset(),
        }
        self.sync();
        Ok(())
    }

    /// Halts and rewinds both cursors; geometry is kept.
    pub fn reset(&mut self) {
        self.front.reset();
        self.back.reset();
        self.sync();
    }

    pub fn pause(&mut self, paused: bool) {
        self.front.pause(paused);
        self.back.pause(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.front.is_paused()
    }

    /// One frame. The back cursor polls the front value from before this frame's step.
    pub fn advance(&mut self, dt_ms: f64, orchestration: f64) -> StrokePhase {
        if self.phase == StrokePhase::Idle {
            return self.phase;
        }
        let front_snapshot = self.front.value();
        self.front.advance(dt_ms, Some(orchestration));
        if self.kind == StrokeKind::Spark {
            self.back.advance(dt_ms, Some(front_snapshot));
        }
        self.sync();
        self.phase
    }

    fn sync(&mut self) {
        let progress = self.progress();
        if let Some(cache) = self.cache.as_mut() {
            cache.uniforms.set_progress(progress, 1.0);
        }
        let phase = self.derive_phase();
        if phase != self.phase {
            tracing::debug!(from = ?self.phase, to = ?phase, "stroke phase");
            self.phase = phase;
        }
    }

    fn derive_phase(&self) -> StrokePhase {
        let back_settled = match self.kind {
            StrokeKind::Line => true,
            StrokeKind::Spark => self.back.is_finished() || self.options.destruct_at_front >= 1.0,
        };
        match self.front.phase() {
            TweenPhase::Idle => StrokePhase::Idle,
            _ if self.front.is_looping() || self.back.is_looping() => StrokePhase::Looping,
            TweenPhase::Waiting => StrokePhase::Armed,
            TweenPhase::Done if back_settled => StrokePhase::Done,
            _ => StrokePhase::Running,
        }
    }

    /// Draw call for the current frame; `None` when there is nothing to draw.
    pub fn draw(&self) -> Option<StrokeDraw<'_>> {
        let cache = self.cache.as_ref()?;
        if cache.geometry.is_empty() {
            return None;
        }
        Some(StrokeDraw {
            path: cache.geometry.path(),
            stroke_width: self.config.stroke_width,
            uniforms: &cache.uniforms,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/controller.rs"]
mod tests;
