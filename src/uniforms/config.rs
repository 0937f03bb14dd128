use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{StrokeError, StrokeResult};

/// Discrete stroke widths, written `"stroke/1"` through `"stroke/10"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrokeWidthToken {
    Stroke1,
    Stroke2,
    Stroke3,
    Stroke4,
    Stroke5,
    Stroke6,
    Stroke7,
    Stroke8,
    Stroke9,
    Stroke10,
}

impl StrokeWidthToken {
    pub const ALL: [StrokeWidthToken; 10] = [
        Self::Stroke1,
        Self::Stroke2,
        Self::Stroke3,
        Self::Stroke4,
        Self::Stroke5,
        Self::Stroke6,
        Self::Stroke7,
        Self::Stroke8,
        Self::Stroke9,
        Self::Stroke10,
    ];

    /// Width in pixels.
    pub fn level(self) -> u8 {
        match self {
            Self::Stroke1 => 1,
            Self::Stroke2 => 2,
            Self::Stroke3 => 3,
            Self::Stroke4 => 4,
            Self::Stroke5 => 5,
            Self::Stroke6 => 6,
            Self::Stroke7 => 7,
            Self::Stroke8 => 8,
            Self::Stroke9 => 9,
            Self::Stroke10 => 10,
        }
    }

    /// Tuning row for this width.
    pub fn config(self) -> AnimationConfig {
        let (tangent_extension, falloff_front, tangent_start_adjustment) = match self.level() {
            1..=4 => (5.0, 0.9, 5.0),
            5 | 6 => (15.0, 1.0, 11.0),
            7 | 8 => (15.0, 1.0, 14.0),
            _ => (15.0, 0.9, 10.0),
        };
        AnimationConfig {
            stroke_width: f32::from(self.level()),
            tangent_extension,
            falloff_back: 0.5,
            falloff_front,
            search_threshold: 0.5,
            tangent_start_adjustment,
        }
    }
}

impl FromStr for StrokeWidthToken {
    type Err = StrokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("stroke/")
            .and_then(|n| n.parse::<u8>().ok())
            .and_then(|n| Self::ALL.into_iter().find(|t| t.level() == n))
            .ok_or_else(|| StrokeError::config(format!("invalid stroke width token \"{s}\"")))
    }
}

impl TryFrom<String> for StrokeWidthToken {
    type Error = StrokeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StrokeWidthToken> for String {
    fn from(t: StrokeWidthToken) -> Self {
        t.to_string()
    }
}

impl fmt::Display for StrokeWidthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stroke/{}", self.level())
    }
}

/// Per-width shader tuning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationConfig {
    pub stroke_width: f32,
    /// Half-length of each intersection tangent segment, in pixels.
    pub tangent_extension: f32,
    pub falloff_back: f32,
    pub falloff_front: f32,
    pub search_threshold: f32,
    /// How far before a crossing the head may be while the crossing still counts as reached.
    pub tangent_start_adjustment: f32,
}

impl AnimationConfig {
    /// Looks up a token string such as `"stroke/3"`; unknown tokens fail.
    pub fn for_token(token: &str) -> StrokeResult<Self> {
        Ok(token.parse::<StrokeWidthToken>()?.config())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/uniforms/config.rs"]
mod tests;
