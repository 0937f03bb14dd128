use kurbo::{ParamCurve, ParamCurveArclen, PathEl, PathSeg, Shape};

use crate::foundation::core::{Affine, BezPath, Point, Vec2};
use crate::foundation::error::{StrokeError, StrokeResult};
use crate::grid::mapping::Grid;
use crate::path::spline::natural_spline;

/// Accuracy passed to kurbo's arc-length routines, in pixels.
const ARCLEN_ACCURACY: f64 = 1.0e-6;
const MIN_SEGMENT_LEN: f64 = 1.0e-12;

/// How consecutive input points are joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    /// Straight segments.
    #[default]
    Polyline,
    /// Natural cubic spline through every point.
    Spline,
}

impl PathStyle {
    pub(crate) fn tag(self) -> u8 {
        match self {
            Self::Polyline => 0,
            Self::Spline => 1,
        }
    }
}

/// Arc-length queryable geometry of a single continuous path.
///
/// Only the first contour is measured. Zero-length segments are dropped from the measure table
/// but kept in [`PathGeometry::path`] for drawing.
#[derive(Clone, Debug)]
pub struct PathGeometry {
    path: BezPath,
    origin: Option<Point>,
    segments: Vec<PathSeg>,
    cumulative: Vec<f64>,
    total_length: f64,
}

impl PathGeometry {
    /// Measures `path` directly.
    pub fn from_path(path: BezPath) -> Self {
        let contour = first_contour(&path);
        let origin = contour.elements().iter().find_map(|el| match el {
            PathEl::MoveTo(p) => Some(*p),
            _ => None,
        });

        let mut segments = Vec::new();
        let mut cumulative = Vec::new();
        let mut total = 0.0;
        for seg in contour.segments() {
            let len = seg.arclen(ARCLEN_ACCURACY);
            if len.is_nan() || len <= MIN_SEGMENT_LEN {
                continue;
            }
            total += len;
            segments.push(seg);
            cumulative.push(total);
        }

        Self {
            path,
            origin,
            segments,
            cumulative,
            total_length: total,
        }
    }

    /// Builds geometry from pixel-space points.
    #[tracing::instrument(skip(points), fields(points = points.len()))]
    pub fn from_points(points: &[Point], style: PathStyle) -> Self {
        let path = match style {
            PathStyle::Polyline => polyline(points),
            PathStyle::Spline => natural_spline(points),
        };
        let geo = Self::from_path(path);
        tracing::debug!(length = geo.total_length, segments = geo.segments.len(), "measured path");
        geo
    }

    /// Builds geometry from unit-space points, converting each through `grid` first.
    pub fn from_unit_points(grid: &Grid, points: &[Point], style: PathStyle) -> Self {
        let px: Vec<Point> = points.iter().map(|&p| grid.unit_to_pixel(p)).collect();
        Self::from_points(&px, style)
    }

    /// Parses SVG path data.
    pub fn from_svg(d: &str) -> StrokeResult<Self> {
        let path = BezPath::from_svg(d)
            .map_err(|e| StrokeError::validation(format!("invalid svg path data: {e}")))?;
        Ok(Self::from_path(path))
    }

    /// Parses SVG path data, contain-fits it into a `size` box and moves its bottom-most point
    /// onto `origin`.
    pub fn from_svg_fitted(d: &str, origin: Point, size: Vec2) -> StrokeResult<Self> {
        if size.x.is_nan() || size.y.is_nan() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(StrokeError::validation("fit size must be > 0"));
        }
        let mut path = BezPath::from_svg(d)
            .map_err(|e| StrokeError::validation(format!("invalid svg path data: {e}")))?;

        path.apply_affine(contain_fit(path.bounding_box(), size));

        let bottom = path
            .elements()
            .iter()
            .flat_map(element_points)
            .reduce(|best, p| if p.y > best.y { p } else { best });
        if let Some(bottom) = bottom {
            path.apply_affine(Affine::translate(origin - bottom));
        }
        Ok(Self::from_path(path))
    }

    /// The full path as built, for handing to a rasteriser.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Zero-length geometry has nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.total_length <= 0.0
    }

    /// Point at arc-length offset `len`, clamped to `[0, total_length]`.
    pub fn point_at_length(&self, len: f64) -> Point {
        let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) else {
            return self.origin.unwrap_or(Point::ZERO);
        };
        if len.is_nan() || len <= 0.0 {
            return first.start();
        }
        if len >= self.total_length {
            return last.end();
        }

        let idx = self
            .cumulative
            .partition_point(|&c| c <= len)
            .min(self.segments.len() - 1);
        let seg_start = if idx == 0 { 0.0 } else { self.cumulative[idx - 1] };
        let seg_len = self.cumulative[idx] - seg_start;
        let local = len - seg_start;
        let seg = self.segments[idx];
        if local >= seg_len {
            return seg.end();
        }
        seg.eval(seg.inv_arclen(local, ARCLEN_ACCURACY))
    }
}

fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut it = points.iter();
    if let Some(&p0) = it.next() {
        path.move_to(p0);
        for &p in it {
            path.line_to(p);
        }
    }
    path
}

fn first_contour(path: &BezPath) -> BezPath {
    let mut out = BezPath::new();
    for &el in path.elements() {
        if matches!(el, PathEl::MoveTo(_)) && !out.elements().is_empty() {
            break;
        }
        out.push(el);
    }
    out
}

fn element_points(el: &PathEl) -> Vec<Point> {
    match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => vec![p],
        PathEl::QuadTo(a, b) => vec![a, b],
        PathEl::CurveTo(a, b, c) => vec![a, b, c],
        PathEl::ClosePath => Vec::new(),
    }
}

/// Uniform "contain" fit of `src` into `(0, 0, size)`, centred on the free axis.
fn contain_fit(src: kurbo::Rect, size: Vec2) -> Affine {
    let (w, h) = (src.width(), src.height());
    let scale = match (w > 0.0, h > 0.0) {
        (true, true) => (size.x / w).min(size.y / h),
        (true, false) => size.x / w,
        (false, true) => size.y / h,
        (false, false) => 1.0,
    };
    let tx = (size.x - w * scale) / 2.0 - src.x0 * scale;
    let ty = (size.y - h * scale) / 2.0 - src.y0 * scale;
    Affine::translate((tx, ty)) * Affine::scale(scale)
}

#[cfg(test)]
#[path = "../../tests/unit/path/geometry.rs"]
mod tests;
