//! strokefx draws animated confetti strokes: particle-like vector lines that are revealed along
//! their length by a front cursor and erased from the tail by a back cursor.
//!
//! # Pipeline overview
//!
//! 1. **Geometry**: grid-space points become a [`PathGeometry`] measured by arc length.
//! 2. **Sampling**: [`PathGeometry::sample`] produces a fixed-size [`SampleSet`], and
//!    [`find_intersections`] locates self-crossings with short tangent segments.
//! 3. **Uniforms**: [`UniformBundle::build`] packs samples, colours and crossings into the
//!    zero-padded arrays the stroke shader declares ([`stroke_shader_source`]).
//! 4. **Shading**: per pixel, the nearest sample's distance decides visibility and colour
//!    ([`evaluate`] is the CPU reference of the shader).
//! 5. **Animation**: a [`Stroke`] steps its front and back [`Tween`]s every frame and only the
//!    progress scalars of its bundle change; an [`Orchestrator`] triggers strokes from a shared
//!    progress value.
//!
//! Geometry is computed once per point list. Colours are premultiplied RGBA end to end, and
//! [`CpuRaster`] renders frames without a GPU.
#![forbid(unsafe_code)]

mod animation;
mod confetti;
mod foundation;
mod grid;
mod paint;
mod path;
mod render;
mod shader;
mod stroke;
mod uniforms;

pub use animation::ease::Ease;
pub use animation::progress::{ProgressProvider, Tween, TweenConfig, TweenPhase, TweenState};
pub use confetti::presets::Preset;
pub use confetti::scene::{Anchor, ConfettiShape, ConfettiSpec, Origin, Scene};
pub use confetti::shapes::{
    LoopFacing, LoopParams, create_line, create_line_collection, create_line_with_origin,
    create_loop,
};
pub use foundation::core::{
    Affine, BezPath, Canvas, Point, Rect, Rgba, Rgba8Premul, TRANSPARENT, Vec2, scale_premul,
    src_over,
};
pub use foundation::error::{StrokeError, StrokeResult};
pub use grid::mapping::Grid;
pub use grid::overlay::OverlayDot;
pub use paint::color::{ColorDef, ac, c, hsl_to_rgb, nc};
pub use paint::schema::{ColorBreakpoint, ColorSchema, ColorSource, ColorStopDef, MAX_BREAKPOINTS};
pub use paint::schemes::{ColorScheme, DEFAULT_SCHEME_BREAKPOINTS};
pub use path::geometry::{PathGeometry, PathStyle};
pub use path::intersection::{
    INTERSECTION_STRIDE, IntersectionRecord, MAX_INTERSECTIONS, find_intersections,
};
pub use path::sampling::{DEFAULT_SAMPLE_COUNT, MAX_SAMPLES, SampleSet};
pub use render::cpu::{CpuRaster, FrameRGBA, RenderSettings};
pub use render::engine::{DrawCall, RenderEngine};
pub use shader::petal::{MAX_PETAL_STOPS, PetalUniforms, evaluate_petal};
pub use shader::reference::{closest_distance, color_at_fraction, evaluate, intersection_bypass};
pub use shader::sksl::stroke_shader_source;
pub use stroke::controller::{Stroke, StrokeDraw, StrokeKind, StrokeOptions, StrokePhase};
pub use stroke::orchestrator::{DEFAULT_ORCHESTRATION_MS, Orchestrator};
pub use stroke::petal::{Petal, PetalDraw};
pub use uniforms::bundle::{
    ProgressPair, UNIFORM_FLOAT_COUNT, UNIFORM_LAYOUT, UniformBundle, UniformKind, UniformSlot,
};
pub use uniforms::config::{AnimationConfig, StrokeWidthToken};
