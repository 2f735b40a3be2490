use std::path::Path;

use crate::config::RenderConfig;
use crate::foundation::color::Rgb8;
use crate::foundation::error::{MazeError, MazeResult};
use crate::maze::trace::PuzzleState;
use crate::render::composite::{flatten_premul_to_rgb8, premul_over_in_place};
use crate::render::layers::{Layer, LayerTarget, Scene};
use crate::render::layout::GridLayout;
use crate::render::spec::RenderSpec;

/// A rendered frame as premultiplied RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Premultiplied RGBA of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Opaque RGB image, flattening any alpha over `bg`.
    pub fn to_rgb_image(&self, bg: Rgb8) -> MazeResult<image::RgbImage> {
        let rgb = flatten_premul_to_rgb8(&self.data, bg)?;
        image::RgbImage::from_raw(self.width, self.height, rgb)
            .ok_or_else(|| MazeError::render("frame buffer does not match its dimensions"))
    }

    /// Write the frame as an opaque PNG.
    pub fn save_png(&self, path: &Path, bg: Rgb8) -> MazeResult<()> {
        use anyhow::Context as _;

        self.to_rgb_image(bg)?
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Validated canvas settings a [`SceneRenderer`] is built from.
///
/// Plain data, so it can be shared across worker threads while each worker owns its renderer.
#[derive(Clone, Debug)]
pub(crate) struct RenderSettings {
    cfg: RenderConfig,
    width: u16,
    height: u16,
}

impl RenderSettings {
    pub(crate) fn new(cfg: &RenderConfig) -> MazeResult<Self> {
        let to_u16 = |v: u32, what: &str| -> MazeResult<u16> {
            match u16::try_from(v) {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(MazeError::render(format!(
                    "canvas {what} {v} must be in 1..={}",
                    u16::MAX
                ))),
            }
        };
        Ok(Self {
            width: to_u16(cfg.canvas.width, "width")?,
            height: to_u16(cfg.canvas.height, "height")?,
            cfg: cfg.clone(),
        })
    }
}

/// CPU renderer for maze frames, powered by `vello_cpu`.
///
/// Output depends only on the config, the puzzle and the [`RenderSpec`]; the raster context is
/// reused between calls purely as an allocation cache. The context is not `Sync`, so parallel
/// callers build one renderer per worker.
pub struct SceneRenderer {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl SceneRenderer {
    /// Create a renderer for the configured canvas.
    pub fn new(cfg: &RenderConfig) -> MazeResult<Self> {
        Ok(Self::from_settings(RenderSettings::new(cfg)?))
    }

    pub(crate) fn from_settings(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }

    pub(crate) fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Config this renderer draws with.
    pub fn config(&self) -> &RenderConfig {
        &self.settings.cfg
    }

    /// Render every layer of one frame.
    pub fn render(&mut self, state: &PuzzleState, spec: &RenderSpec) -> MazeResult<FrameRGBA> {
        self.render_layers(state, spec, &Layer::DRAW_ORDER)
    }

    /// Render only `layers`, always in [`Layer::DRAW_ORDER`].
    ///
    /// Consecutive base layers share one raster pass; each overlay layer gets its own pass. Every
    /// pass is composited source-over onto the frame, which starts fully transparent.
    pub fn render_layers(
        &mut self,
        state: &PuzzleState,
        spec: &RenderSpec,
        layers: &[Layer],
    ) -> MazeResult<FrameRGBA> {
        let layout = GridLayout::new(self.config(), state.grid_size())?;
        let cfg = self.settings.cfg.clone();
        let (width, height) = (self.settings.width, self.settings.height);
        let scene = Scene {
            cfg: &cfg,
            layout,
            state,
            spec,
        };

        let mut passes: Vec<Vec<Layer>> = Vec::new();
        for layer in Layer::DRAW_ORDER.into_iter().filter(|l| layers.contains(l)) {
            match (layer.target(), passes.last_mut()) {
                (LayerTarget::Base, Some(pass))
                    if pass.last().is_some_and(|l| l.target() == LayerTarget::Base) =>
                {
                    pass.push(layer);
                }
                _ => passes.push(vec![layer]),
            }
        }

        let mut frame = vello_cpu::Pixmap::new(width, height);
        let mut tmp = vello_cpu::Pixmap::new(width, height);
        for (i, pass) in passes.iter().enumerate() {
            let dst = if i == 0 { &mut frame } else { &mut tmp };
            self.with_ctx_mut(|ctx| {
                for layer in pass {
                    layer.draw(&scene, ctx);
                }
                ctx.flush();
                ctx.render_to_pixmap(dst);
            });
            if i > 0 {
                premul_over_in_place(frame.data_as_u8_slice_mut(), tmp.data_as_u8_slice())?;
            }
        }

        Ok(FrameRGBA {
            width: u32::from(width),
            height: u32::from(height),
            data: frame.data_as_u8_slice().to_vec(),
        })
    }

    fn with_ctx_mut<R>(&mut self, f: impl FnOnce(&mut vello_cpu::RenderContext) -> R) -> R {
        let (width, height) = (self.settings.width, self.settings.height);
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx);
        self.ctx = Some(ctx);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
