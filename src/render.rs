//! Deterministic CPU rendering of maze frames.

pub(crate) mod composite;
/// Ordered draw layers.
pub mod layers;
/// Integer grid geometry.
pub mod layout;
pub(crate) mod scene;
pub(crate) mod spec;
