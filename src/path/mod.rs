pub(crate) mod geometry;
pub(crate) mod intersection;
pub(crate) mod sampling;
pub(crate) mod spline;
