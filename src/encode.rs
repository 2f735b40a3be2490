//! Video encoding.
//!
//! Frame sinks consume rendered frames in timeline order. A [`VideoEncoder`] opens a sink for one
//! output file; the assembler only ever talks to that trait so the encoder can be swapped or
//! disabled.

/// `ffmpeg`-based encoder (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait, encoder trait and the in-memory sink.
pub mod sink;
