pub(crate) mod controller;
pub(crate) mod orchestrator;
pub(crate) mod petal;
