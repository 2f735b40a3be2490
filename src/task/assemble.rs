use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MazeConfig;
use crate::encode::ffmpeg::FfmpegEncoder;
use crate::encode::sink::{FrameSink, SinkConfig, VideoEncoder};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::MazeResult;
use crate::maze::grid::{Direction, Position, generate};
use crate::maze::trace::{PuzzleState, StopReason, trace};
use crate::render::scene::{FrameRGBA, RenderSettings, SceneRenderer};
use crate::render::spec::RenderSpec;
use crate::sequence::{FrameSequence, build_sequence};
use crate::task::prompt::prompt;

/// Serializable summary of one traced puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleFacts {
    /// Grid dimension `N`.
    pub grid_size: usize,
    /// Start cell (0-based).
    pub start: Position,
    /// End cell (0-based).
    pub end: Position,
    /// Why the walk stopped.
    pub stop_reason: StopReason,
    /// Number of positions in the path, including the start.
    pub path_length: usize,
    /// Arrow stored at the end cell.
    pub exit_direction: Direction,
    /// Visited positions in order.
    pub path: Vec<Position>,
    /// Arrow rows, top to bottom.
    pub grid: Vec<Vec<Direction>>,
}

impl PuzzleFacts {
    /// Summarize `state`.
    pub fn from_state(state: &PuzzleState) -> Self {
        Self {
            grid_size: state.grid_size(),
            start: state.start(),
            end: state.end(),
            stop_reason: state.stop_reason(),
            path_length: state.path().len(),
            exit_direction: state.end_direction(),
            path: state.path().to_vec(),
            grid: state.grid().rows().map(<[Direction]>::to_vec).collect(),
        }
    }
}

/// One finished task.
#[derive(Clone, Debug)]
pub struct TaskPair {
    /// Unique id within a batch.
    pub task_id: String,
    /// Domain tag from the config.
    pub domain: String,
    /// Prompt text.
    pub prompt: String,
    /// Marker at the start, nothing highlighted.
    pub first_image: FrameRGBA,
    /// Marker at the end, whole path highlighted, destination outlined.
    pub final_image: FrameRGBA,
    /// Encoded animation, when one was produced.
    pub video: Option<PathBuf>,
    /// Puzzle summary behind the prompt.
    pub facts: PuzzleFacts,
}

/// Runs generation, tracing, sequencing, rendering and encoding for single puzzles.
///
/// Holds a raster context, so it is `Send` but not `Sync`. Batch generation builds one per worker
/// from [`AssemblerParts`].
pub struct PuzzleAssembler {
    cfg: MazeConfig,
    renderer: SceneRenderer,
    encoder: Option<Arc<dyn VideoEncoder>>,
}

impl std::fmt::Debug for PuzzleAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleAssembler")
            .field("domain", &self.cfg.domain)
            .field("has_encoder", &self.encoder.is_some())
            .finish()
    }
}

/// Everything needed to build a [`PuzzleAssembler`] on another thread.
#[derive(Clone)]
pub(crate) struct AssemblerParts {
    cfg: MazeConfig,
    render: RenderSettings,
    encoder: Option<Arc<dyn VideoEncoder>>,
}

impl AssemblerParts {
    pub(crate) fn build(&self) -> PuzzleAssembler {
        PuzzleAssembler {
            cfg: self.cfg.clone(),
            renderer: SceneRenderer::from_settings(self.render.clone()),
            encoder: self.encoder.clone(),
        }
    }
}

impl PuzzleAssembler {
    /// Validate `cfg` and build an assembler.
    ///
    /// When `generate_video` is set and `ffmpeg` is on `PATH`, videos are encoded with
    /// [`FfmpegEncoder`]; otherwise tasks come without video.
    pub fn new(cfg: &MazeConfig) -> MazeResult<Self> {
        cfg.validate()?;
        let encoder: Option<Arc<dyn VideoEncoder>> =
            if cfg.generate_video && FfmpegEncoder::is_available() {
                Some(Arc::new(FfmpegEncoder::new(cfg.render.background)))
            } else {
                None
            };
        Ok(Self {
            renderer: SceneRenderer::new(&cfg.render)?,
            cfg: cfg.clone(),
            encoder,
        })
    }

    /// Replace the video encoder; `None` disables video.
    pub fn with_encoder(mut self, encoder: Option<Arc<dyn VideoEncoder>>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Config this assembler was built with.
    pub fn config(&self) -> &MazeConfig {
        &self.cfg
    }

    pub(crate) fn parts(&self) -> AssemblerParts {
        AssemblerParts {
            cfg: self.cfg.clone(),
            render: self.renderer.settings().clone(),
            encoder: self.encoder.clone(),
        }
    }

    /// Generate a fresh puzzle from `rng` and package it.
    #[tracing::instrument(skip(self, rng))]
    pub fn generate_task(&mut self, task_id: &str, rng: &mut impl Rng) -> MazeResult<TaskPair> {
        let (grid, start) = generate(rng, self.cfg.min_grid_size, self.cfg.max_grid_size)?;
        let state = trace(&grid, start)?;
        self.assemble(task_id, &state)
    }

    /// Package an already traced puzzle.
    pub fn assemble(&mut self, task_id: &str, state: &PuzzleState) -> MazeResult<TaskPair> {
        let facts = PuzzleFacts::from_state(state);
        tracing::debug!(
            task_id,
            grid_size = facts.grid_size,
            path_length = facts.path_length,
            stop_reason = facts.stop_reason.as_str(),
            "puzzle traced"
        );

        let first_image = self.renderer.render(state, &RenderSpec::initial(state))?;
        let final_image = self.renderer.render(state, &RenderSpec::final_state(state))?;

        let video = self.try_video(task_id, state);

        Ok(TaskPair {
            task_id: task_id.to_owned(),
            domain: self.cfg.domain.clone(),
            prompt: prompt(&facts),
            first_image,
            final_image,
            video,
            facts,
        })
    }

    /// Render every frame of `seq` into `sink`, rendering each segment once.
    ///
    /// Returns the number of frames pushed. `begin`/`end` are left to the caller.
    pub fn render_frames(
        &mut self,
        state: &PuzzleState,
        seq: &FrameSequence,
        sink: &mut dyn FrameSink,
    ) -> MazeResult<u64> {
        let mut idx = 0u64;
        for segment in seq.segments() {
            let frame = self.renderer.render(state, &segment.spec)?;
            for _ in 0..segment.repeat {
                sink.push_frame(FrameIndex(idx), &frame)?;
                idx += 1;
            }
        }
        Ok(idx)
    }

    fn try_video(&mut self, task_id: &str, state: &PuzzleState) -> Option<PathBuf> {
        if !self.cfg.generate_video {
            return None;
        }
        let Some(encoder) = self.encoder.clone() else {
            tracing::warn!(task_id, "no video encoder available; skipping video");
            return None;
        };
        let path = self
            .cfg
            .resolved_video_dir()
            .join(format!("{task_id}_ground_truth.mp4"));
        match self.encode_video(encoder.as_ref(), &path, state) {
            Ok(frames) => {
                tracing::debug!(task_id, frames, path = %path.display(), "video encoded");
                Some(path)
            }
            Err(e) => {
                tracing::warn!(task_id, error = %e, "video encoding failed; continuing without video");
                let _ = std::fs::remove_file(&path);
                None
            }
        }
    }

    fn encode_video(
        &mut self,
        encoder: &dyn VideoEncoder,
        path: &Path,
        state: &PuzzleState,
    ) -> MazeResult<u64> {
        let seq = build_sequence(state, &self.cfg.timing);
        let cfg = SinkConfig {
            width: self.cfg.render.canvas.width,
            height: self.cfg.render.canvas.height,
            fps: self.cfg.fps()?,
        };
        let mut sink = encoder.open(path, cfg)?;
        let frames = self.render_frames(state, &seq, sink.as_mut())?;
        sink.end()?;
        Ok(frames)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/task/assemble.rs"]
mod tests;
