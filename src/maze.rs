//! Grid generation and path tracing.

pub(crate) mod grid;
pub(crate) mod trace;
