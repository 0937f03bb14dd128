/// Convenience result type used across strokefx.
pub type StrokeResult<T> = Result<T, StrokeError>;

/// Top-level error taxonomy used by the geometry, uniform and animation APIs.
#[derive(thiserror::Error, Debug)]
pub enum StrokeError {
    /// Invalid user-provided data (grids, schemas, scene files).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or measuring path geometry.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Unknown or malformed configuration lookups (stroke-width tokens, presets).
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors while validating or stepping progress animations.
    #[error("animation error: {0}")]
    Animation(String),

    /// A fixed-capacity uniform array would overflow.
    #[error("capacity exceeded: {0}")]
    Capacity(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StrokeError {
    /// Build a [`StrokeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StrokeError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`StrokeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StrokeError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`StrokeError::Capacity`] value.
    pub fn capacity(msg: impl Into<String>) -> Self {
        Self::Capacity(msg.into())
    }

    /// Build a [`StrokeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StrokeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
