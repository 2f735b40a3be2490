//! Arrowmaze generates arrow-maze puzzles and renders them deterministically.
//!
//! A puzzle is an `N×N` grid of arrows plus a start cell. A marker follows the arrows one cell per
//! step until it leaves the grid, revisits a cell, or hits the step cap. Each puzzle is packaged
//! as a [`TaskPair`]: prompt text, initial and final images, and an optional MP4 of the walk.
//!
//! - Draw a [`Grid`] with [`generate`] and walk it with [`trace`]
//! - Describe frames with [`RenderSpec`] / [`build_sequence`] and draw them with
//!   [`SceneRenderer`]
//! - Assemble whole tasks with [`PuzzleAssembler`] or [`generate_batch`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Generation configuration.
pub mod config;
/// Encoding sinks.
pub mod encode;
pub(crate) mod maze;
/// CPU rendering.
pub mod render;
/// Animation timeline.
pub mod sequence;
/// Task assembly and output.
pub mod task;

pub use crate::foundation::color::Rgb8;
pub use crate::foundation::core::{BezPath, Canvas, Fps, FrameIndex, Point, Rect};
pub use crate::foundation::error::{MazeError, MazeResult};

pub use crate::config::{MazeConfig, RenderConfig, SequenceTiming};
pub use crate::encode::ffmpeg::{FfmpegEncoder, FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig, VideoEncoder};
pub use crate::maze::grid::{Direction, Grid, Position, generate};
pub use crate::maze::trace::{PuzzleState, StopReason, trace, trace_with_limit};
pub use crate::render::layers::Layer;
pub use crate::render::layout::GridLayout;
pub use crate::render::scene::{FrameRGBA, SceneRenderer};
pub use crate::render::spec::RenderSpec;
pub use crate::sequence::{FrameSegment, FrameSequence, build_sequence, frame_count};
pub use crate::task::assemble::{PuzzleAssembler, PuzzleFacts, TaskPair};
pub use crate::task::batch::{BatchOptions, generate_batch, generate_batch_with, task_id};
pub use crate::task::output::write_task;
pub use crate::task::prompt::prompt;
