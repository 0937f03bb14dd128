use crate::animation::ease::Ease;
use crate::animation::progress::{ProgressProvider, Tween, TweenConfig};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::render::engine::{DrawCall, RenderEngine};
use crate::stroke::controller::{Stroke, StrokePhase};
use crate::stroke::petal::Petal;

pub const DEFAULT_ORCHESTRATION_MS: f64 = 1500.0;

/// Owns a shared orchestration progress and the strokes triggered by it.
#[derive(Clone, Debug)]
pub struct Orchestrator {
    progress: Tween,
    strokes: Vec<Stroke>,
    petals: Vec<Petal>,
}

impl Orchestrator {
    pub fn new(progress: TweenConfig) -> StrokeResult<Self> {
        Ok(Self {
            progress: Tween::new(progress)?,
            strokes: Vec::new(),
            petals: Vec::new(),
        })
    }

    /// Out-eased orchestration over `duration_ms`.
    pub fn with_duration(duration_ms: f64) -> StrokeResult<Self> {
        Self::new(TweenConfig::new(duration_ms, Ease::OutEase))
    }

    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn push_petal(&mut self, petal: Petal) {
        self.petals.push(petal);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn strokes_mut(&mut self) -> &mut [Stroke] {
        &mut self.strokes
    }

    pub fn petals(&self) -> &[Petal] {
        &self.petals
    }

    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    /// Starts every stroke, then the orchestration itself.
    pub fn run(&mut self) -> StrokeResult<()> {
        for stroke in &mut self.strokes {
            stroke.run()?;
        }
        for petal in &mut self.petals {
            petal.run();
        }
        self.progress.run();
        tracing::debug!(
            strokes = self.strokes.len(),
            petals = self.petals.len(),
            "orchestration started"
        );
        Ok(())
    }

    pub fn reset(&mut self) {
        for stroke in &mut self.strokes {
            stroke.reset();
        }
        for petal in &mut self.petals {
            petal.reset();
        }
        self.progress.reset();
    }

    pub fn pause(&mut self, paused: bool) {
        for stroke in &mut self.strokes {
            stroke.pause(paused);
        }
        for petal in &mut self.petals {
            petal.pause(paused);
        }
        self.progress.pause(paused);
    }

    pub fn is_paused(&self) -> bool {
        self.progress.is_paused()
    }

    /// One frame. Children see the orchestration value from before this frame's step.
    pub fn advance(&mut self, dt_ms: f64) {
        let snapshot = self.progress.value();
        self.progress.advance(dt_ms, None);
        for stroke in &mut self.strokes {
            stroke.advance(dt_ms, snapshot);
        }
        for petal in &mut self.petals {
            petal.advance(dt_ms, snapshot);
        }
    }

    /// Advances from t = 0 to `time_ms` in fixed `1000 / fps` steps.
    pub fn seek(&mut self, time_ms: f64, fps: f64) -> StrokeResult<()> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(StrokeError::validation("fps must be > 0"));
        }
        self.reset();
        self.run()?;
        let dt = 1000.0 / fps;
        let mut t = 0.0;
        while t + dt <= time_ms {
            self.advance(dt);
            t += dt;
        }
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.progress.is_finished()
            && self.strokes.iter().all(|s| s.phase() == StrokePhase::Done)
            && self.petals.iter().all(|p| p.phase() == StrokePhase::Done)
    }

    /// Petals first, then strokes in insertion order; zero-length strokes are skipped.
    pub fn draws(&self) -> Vec<DrawCall<'_>> {
        self.petals
            .iter()
            .map(|p| DrawCall::Petal(p.draw()))
            .chain(self.strokes.iter().filter_map(|s| s.draw().map(DrawCall::Stroke)))
            .collect()
    }

    pub fn render<E: RenderEngine + ?Sized>(&self, engine: &mut E) -> StrokeResult<()> {
        for call in self.draws() {
            engine.submit(&call)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/orchestrator.rs"]
mod tests;
