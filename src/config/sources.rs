//! Configuration sources layered on top of the built-in defaults.

pub(crate) mod environment;
