//! Task assembly: one generated puzzle packaged with its prompt, images and video.

/// Puzzle orchestration into [`assemble::TaskPair`]s.
pub mod assemble;
/// Deterministic multi-task generation.
pub mod batch;
/// On-disk task layout.
pub mod output;
/// Prompt text.
pub mod prompt;
