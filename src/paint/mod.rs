pub(crate) mod color;
pub(crate) mod schema;
pub(crate) mod schemes;
