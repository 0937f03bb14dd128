pub(crate) mod petal;
pub(crate) mod reference;
pub(crate) mod sksl;
