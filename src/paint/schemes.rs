use crate::foundation::error::{StrokeError, StrokeResult};
use crate::paint::color::{ac, hsl_to_rgb};
use crate::paint::schema::{ColorBreakpoint, ColorSchema};

/// Breakpoint count used by scheme generators when none is given.
pub const DEFAULT_SCHEME_BREAKPOINTS: usize = 5;

/// Named gradient generators. Every scheme spaces `n` opaque stops evenly over `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Orange,
    Blue,
    Purple,
    Red,
    Green,
    Yellow,
    Rainbow,
    RainbowReverse,
    Teal,
    Pink,
    Cyan,
    Grayscale,
    Pastel,
    Fire,
    Ocean,
    Sunset,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 16] = [
        Self::Orange,
        Self::Blue,
        Self::Purple,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Rainbow,
        Self::RainbowReverse,
        Self::Teal,
        Self::Pink,
        Self::Cyan,
        Self::Grayscale,
        Self::Pastel,
        Self::Fire,
        Self::Ocean,
        Self::Sunset,
    ];

    /// RGB at stop `i` of `n`.
    fn rgb(self, i: usize, n: usize) -> [f64; 3] {
        let t = i as f64 / (n - 1) as f64;
        match self {
            Self::Orange | Self::Fire => [1.0, t, 0.0],
            Self::Blue => [0.0, t, 1.0],
            Self::Purple => [t, 0.0, 1.0],
            Self::Red => [1.0, 0.0, t],
            Self::Green => [0.0, 1.0, t],
            Self::Yellow => [1.0, 1.0, t],
            Self::Rainbow => hsl_to_rgb(t, 1.0, 0.5),
            Self::RainbowReverse => hsl_to_rgb(1.0 - t, 1.0, 0.5),
            Self::Teal => [0.0, 1.0 - t, t],
            Self::Pink => [1.0, t * 0.5, 1.0],
            Self::Cyan => [0.0, 1.0, 1.0 - t],
            Self::Grayscale => [t, t, t],
            Self::Pastel => hsl_to_rgb(t, 0.5, 0.85),
            Self::Ocean => [0.0, t, 0.5 + i as f64 / (2 * n) as f64],
            Self::Sunset => hsl_to_rgb(0.1 + 0.3 * (1.0 - t), 1.0, 0.5),
        }
    }

    fn stops(self, n: usize) -> Vec<ColorBreakpoint> {
        (0..n)
            .map(|i| {
                let [r, g, b] = self.rgb(i, n);
                ColorBreakpoint::new(
                    (i as f64 / (n - 1) as f64) as f32,
                    ac(1.0, [r as f32, g as f32, b as f32]),
                )
            })
            .collect()
    }

    /// Generates `n` evenly spaced stops.
    pub fn schema(self, n: usize) -> StrokeResult<ColorSchema> {
        if n < 2 {
            return Err(StrokeError::validation(format!(
                "color scheme needs at least 2 breakpoints, got {n}"
            )));
        }
        ColorSchema::new(self.stops(n))
    }

    /// [`ColorScheme::schema`] with the default breakpoint count.
    pub fn default_schema(self) -> ColorSchema {
        ColorSchema::from_generated(self.stops(DEFAULT_SCHEME_BREAKPOINTS))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/schemes.rs"]
mod tests;
