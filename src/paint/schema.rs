use serde::Deserialize;

use crate::foundation::core::Rgba;
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::paint::color::ColorDef;
use crate::paint::schemes::{ColorScheme, DEFAULT_SCHEME_BREAKPOINTS};

/// Uniform array capacity for colour breakpoints.
pub const MAX_BREAKPOINTS: usize = 100;

/// A premultiplied colour pinned at a fraction of the path length.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorBreakpoint {
    pub breakpoint: f32,
    pub color: Rgba,
}

impl ColorBreakpoint {
    pub fn new(breakpoint: f32, color: Rgba) -> Self {
        Self { breakpoint, color }
    }
}

/// Ascending, validated list of colour breakpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSchema {
    stops: Vec<ColorBreakpoint>,
}

impl ColorSchema {
    /// Validates ranges and capacity, then sorts by breakpoint (stable for equal breakpoints).
    pub fn new(mut stops: Vec<ColorBreakpoint>) -> StrokeResult<Self> {
        if stops.is_empty() {
            return Err(StrokeError::validation("color schema needs at least one breakpoint"));
        }
        if stops.len() > MAX_BREAKPOINTS {
            return Err(StrokeError::capacity(format!(
                "{} color breakpoints exceed {MAX_BREAKPOINTS}",
                stops.len()
            )));
        }
        for (i, s) in stops.iter().enumerate() {
            if !(0.0..=1.0).contains(&s.breakpoint) {
                return Err(StrokeError::validation(format!(
                    "breakpoint {i} must be in [0, 1], got {}",
                    s.breakpoint
                )));
            }
            if s.color.iter().any(|v| !(0.0..=1.0).contains(v)) {
                return Err(StrokeError::validation(format!(
                    "breakpoint {i} color channels must be in [0, 1]"
                )));
            }
        }
        stops.sort_by(|a, b| a.breakpoint.total_cmp(&b.breakpoint));
        Ok(Self { stops })
    }

    /// Generator output is ascending and in range by construction.
    pub(crate) fn from_generated(stops: Vec<ColorBreakpoint>) -> Self {
        debug_assert!(!stops.is_empty() && stops.len() <= MAX_BREAKPOINTS);
        debug_assert!(stops.windows(2).all(|w| w[0].breakpoint <= w[1].breakpoint));
        Self { stops }
    }

    pub fn stops(&self) -> &[ColorBreakpoint] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// One breakpoint as written in scene files; the colour is straight alpha.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ColorStopDef {
    pub breakpoint: f32,
    pub color: ColorDef,
}

/// Where a stroke takes its colours from in a scene file.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ColorSource {
    Scheme {
        scheme: ColorScheme,
        #[serde(default = "default_breakpoints")]
        breakpoints: usize,
    },
    Stops(Vec<ColorStopDef>),
}

fn default_breakpoints() -> usize {
    DEFAULT_SCHEME_BREAKPOINTS
}

impl ColorSource {
    pub fn resolve(&self) -> StrokeResult<ColorSchema> {
        match self {
            Self::Scheme {
                scheme,
                breakpoints,
            } => scheme.schema(*breakpoints),
            Self::Stops(stops) => ColorSchema::new(
                stops
                    .iter()
                    .map(|s| ColorBreakpoint::new(s.breakpoint, s.color.to_premul()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/schema.rs"]
mod tests;
