pub(crate) mod presets;
pub(crate) mod scene;
pub(crate) mod shapes;
