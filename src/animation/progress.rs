use crate::animation::ease::Ease;
use crate::foundation::error::{StrokeError, StrokeResult};

/// Source of a scalar animation value, stepped once per frame by its owner.
pub trait ProgressProvider: Send {
    fn value(&self) -> f64;

    /// Starts from the configured origin. Calling it again restarts.
    fn run(&mut self);

    /// Halts and rewinds to the origin.
    fn reset(&mut self);

    fn pause(&mut self, paused: bool);

    fn is_paused(&self) -> bool;

    /// Steps by `dt_ms`. `upstream` is the frame-start value of whatever this provider waits on;
    /// `None` never releases a wait.
    fn advance(&mut self, dt_ms: f64, upstream: Option<f64>);

    fn is_finished(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenConfig {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub ease: Ease,
    #[serde(default)]
    pub delay_ms: f64,
    /// Hold until the upstream value is strictly greater than this.
    #[serde(default)]
    pub wait_until: Option<f64>,
    /// Ping-pong between `from` and `to` forever.
    #[serde(default)]
    pub repeat: bool,
}

impl TweenConfig {
    pub fn new(duration_ms: f64, ease: Ease) -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            duration_ms,
            ease,
            delay_ms: 0.0,
            wait_until: None,
            repeat: false,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_wait_until(mut self, threshold: f64) -> Self {
        self.wait_until = Some(threshold);
        self
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn validate(&self) -> StrokeResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(StrokeError::animation("tween endpoints must be finite"));
        }
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(StrokeError::animation("tween duration must be finite and >= 0"));
        }
        if !self.delay_ms.is_finite() || self.delay_ms < 0.0 {
            return Err(StrokeError::animation("tween delay must be finite and >= 0"));
        }
        if self.wait_until.is_some_and(|w| !w.is_finite()) {
            return Err(StrokeError::animation("tween wait threshold must be finite"));
        }
        Ok(())
    }

    fn entry_phase(&self) -> TweenPhase {
        if self.wait_until.is_some() {
            TweenPhase::Waiting
        } else {
            self.after_wait()
        }
    }

    fn after_wait(&self) -> TweenPhase {
        if self.delay_ms > 0.0 {
            TweenPhase::Delaying
        } else {
            TweenPhase::Running
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TweenPhase {
    Idle,
    Waiting,
    Delaying,
    Running,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenState {
    pub phase: TweenPhase,
    /// Time spent in the current `Delaying` or `Running` phase.
    pub elapsed_ms: f64,
    pub value: f64,
    pub origin: f64,
    pub target: f64,
    /// Completed legs; above zero means the tween is looping.
    pub cycles: u32,
}

impl TweenState {
    pub fn idle(cfg: &TweenConfig) -> Self {
        Self {
            phase: TweenPhase::Idle,
            elapsed_ms: 0.0,
            value: cfg.from,
            origin: cfg.from,
            target: cfg.to,
            cycles: 0,
        }
    }

    pub fn started(cfg: &TweenConfig) -> Self {
        Self {
            phase: cfg.entry_phase(),
            ..Self::idle(cfg)
        }
    }

    /// One frame. A phase change consumes the frame it happens on, so the next phase starts
    /// counting on the following frame.
    pub fn advance(self, cfg: &TweenConfig, dt_ms: f64, upstream: Option<f64>) -> Self {
        let dt = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        match self.phase {
            TweenPhase::Idle | TweenPhase::Done => self,
            TweenPhase::Waiting => {
                let threshold = cfg.wait_until.unwrap_or(f64::NEG_INFINITY);
                if upstream.is_some_and(|v| v > threshold) {
                    Self {
                        phase: cfg.after_wait(),
                        elapsed_ms: 0.0,
                        ..self
                    }
                } else {
                    self
                }
            }
            TweenPhase::Delaying => {
                let elapsed = self.elapsed_ms + dt;
                if elapsed >= cfg.delay_ms {
                    Self {
                        phase: TweenPhase::Running,
                        elapsed_ms: 0.0,
                        ..self
                    }
                } else {
                    Self {
                        elapsed_ms: elapsed,
                        ..self
                    }
                }
            }
            TweenPhase::Running => {
                let elapsed = self.elapsed_ms + dt;
                if elapsed < cfg.duration_ms {
                    let t = cfg.ease.apply(elapsed / cfg.duration_ms);
                    return Self {
                        elapsed_ms: elapsed,
                        value: self.origin + (self.target - self.origin) * t,
                        ..self
                    };
                }
                if cfg.repeat {
                    Self {
                        phase: cfg.entry_phase(),
                        elapsed_ms: 0.0,
                        value: self.target,
                        origin: self.target,
                        target: self.origin,
                        cycles: self.cycles.saturating_add(1),
                    }
                } else {
                    Self {
                        phase: TweenPhase::Done,
                        elapsed_ms: cfg.duration_ms,
                        value: self.target,
                        cycles: self.cycles.saturating_add(1),
                        ..self
                    }
                }
            }
        }
    }
}

/// [`ProgressProvider`] backed by an explicit [`TweenState`].
#[derive(Clone, Debug)]
pub struct Tween {
    config: TweenConfig,
    state: TweenState,
    paused: bool,
}

impl Tween {
    pub fn new(config: TweenConfig) -> StrokeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: TweenState::idle(&config),
            paused: false,
        })
    }

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn phase(&self) -> TweenPhase {
        self.state.phase
    }

    pub fn is_looping(&self) -> bool {
        self.config.repeat && self.state.cycles > 0
    }
}

impl ProgressProvider for Tween {
    fn value(&self) -> f64 {
        self.state.value
    }

    fn run(&mut self) {
        self.state = TweenState::started(&self.config);
    }

    fn reset(&mut self) {
        self.state = TweenState::idle(&self.config);
    }

    fn pause(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn advance(&mut self, dt_ms: f64, upstream: Option<f64>) {
        if self.paused {
            return;
        }
        self.state = self.state.advance(&self.config, dt_ms, upstream);
    }

    fn is_finished(&self) -> bool {
        self.state.phase == TweenPhase::Done
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
