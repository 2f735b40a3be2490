//! Immutable generation configuration.
//!
//! One [`MazeConfig`] drives a whole generation run. The renderer and the frame sequencer only see
//! their own sub-views ([`RenderConfig`], [`SequenceTiming`]), always by reference.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgb8;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{MazeError, MazeResult};
use crate::render::layout::GridLayout;

/// Top-level configuration for puzzle generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MazeConfig {
    /// Domain tag attached to every task.
    pub domain: String,
    /// Smallest grid dimension (inclusive).
    pub min_grid_size: usize,
    /// Largest grid dimension (inclusive).
    pub max_grid_size: usize,
    /// Renderer settings.
    pub render: RenderConfig,
    /// Animation timing.
    pub timing: SequenceTiming,
    /// Output video frame rate.
    pub fps: u32,
    /// Whether to attempt video encoding at all.
    pub generate_video: bool,
    /// Directory for encoded videos; `<tmp>/<domain>_videos` when unset.
    pub video_dir: Option<PathBuf>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            domain: "arrow_maze".to_owned(),
            min_grid_size: 4,
            max_grid_size: 6,
            render: RenderConfig::default(),
            timing: SequenceTiming::default(),
            fps: 10,
            generate_video: true,
            video_dir: None,
        }
    }
}

impl MazeConfig {
    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> MazeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MazeError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| MazeError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json_str(s: &str) -> MazeResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| MazeError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field; nothing is generated from an invalid config.
    pub fn validate(&self) -> MazeResult<()> {
        if self.min_grid_size == 0 {
            return Err(MazeError::config("min_grid_size must be >= 1"));
        }
        if self.max_grid_size < self.min_grid_size {
            return Err(MazeError::config(format!(
                "max_grid_size ({}) must be >= min_grid_size ({})",
                self.max_grid_size, self.min_grid_size
            )));
        }
        if self.domain.trim().is_empty() {
            return Err(MazeError::config("domain must be non-empty"));
        }
        self.fps()?;
        self.timing.validate()?;
        self.render.validate()?;
        // The largest grid has the smallest cells.
        GridLayout::new(&self.render, self.max_grid_size)?;
        Ok(())
    }

    /// Frame rate as a validated [`Fps`].
    pub fn fps(&self) -> MazeResult<Fps> {
        Fps::new(self.fps, 1)
    }

    /// Directory videos are written to.
    pub fn resolved_video_dir(&self) -> PathBuf {
        self.video_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(format!("{}_videos", self.domain)))
    }
}

/// Canvas geometry and palette for the scene renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output image size.
    pub canvas: Canvas,
    /// Minimum free space around the grid, in pixels.
    pub margin: u32,
    /// Canvas fill.
    pub background: Rgb8,
    /// Grid line color.
    pub grid_color: Rgb8,
    /// Arrow glyph color.
    pub arrow_color: Rgb8,
    /// Marker fill color.
    pub marker_color: Rgb8,
    /// Opaque fill for visited cells.
    pub visited_color: Rgb8,
    /// Outline color for the destination cell.
    pub destination_color: Rgb8,
    /// Marker radius in pixels.
    pub marker_radius: u32,
    /// Alpha of the marker fill.
    pub marker_opacity: u8,
    /// Grid line width in pixels.
    pub grid_line_width: u32,
    /// Destination outline width in pixels.
    pub destination_outline_width: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            margin: 50,
            background: Rgb8::new(255, 255, 255),
            grid_color: Rgb8::new(200, 200, 200),
            arrow_color: Rgb8::new(100, 100, 100),
            marker_color: Rgb8::new(50, 150, 255),
            visited_color: Rgb8::new(255, 200, 100),
            destination_color: Rgb8::new(50, 200, 50),
            marker_radius: 15,
            marker_opacity: 180,
            grid_line_width: 2,
            destination_outline_width: 4,
        }
    }
}

impl RenderConfig {
    /// Largest canvas edge the rasterizer accepts.
    pub const MAX_CANVAS_EDGE: u32 = u16::MAX as u32;

    fn validate(&self) -> MazeResult<()> {
        let Canvas { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(MazeError::config("canvas width/height must be non-zero"));
        }
        if width > Self::MAX_CANVAS_EDGE || height > Self::MAX_CANVAS_EDGE {
            return Err(MazeError::config(format!(
                "canvas {width}x{height} exceeds {0}x{0}",
                Self::MAX_CANVAS_EDGE
            )));
        }
        if self.grid_line_width == 0 {
            return Err(MazeError::config("grid_line_width must be >= 1"));
        }
        Ok(())
    }
}

/// Hold and step frame counts for the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceTiming {
    /// Frames shown per path position.
    pub frames_per_step: u32,
    /// Leading pause; the trailing pause is twice as long.
    pub hold_frames: u32,
}

impl Default for SequenceTiming {
    fn default() -> Self {
        Self {
            frames_per_step: 6,
            hold_frames: 8,
        }
    }
}

impl SequenceTiming {
    fn validate(&self) -> MazeResult<()> {
        if self.frames_per_step == 0 {
            return Err(MazeError::config("frames_per_step must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
