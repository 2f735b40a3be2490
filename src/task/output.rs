use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Serialize;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::color::Rgb8;
use crate::foundation::error::{MazeError, MazeResult};
use crate::task::assemble::{PuzzleFacts, TaskPair};

/// File names inside a task directory.
pub const FIRST_FRAME: &str = "first_frame.png";
/// Final state image.
pub const FINAL_FRAME: &str = "final_frame.png";
/// Prompt text.
pub const PROMPT: &str = "prompt.txt";
/// [`PuzzleFacts`] plus ids, as JSON.
pub const METADATA: &str = "metadata.json";
/// Copied ground-truth video.
pub const VIDEO: &str = "ground_truth.mp4";

#[derive(Serialize)]
struct TaskMetadata<'a> {
    task_id: &'a str,
    domain: &'a str,
    has_video: bool,
    #[serde(flatten)]
    facts: &'a PuzzleFacts,
}

/// `<out_root>/<domain>_task/<task_id>`.
pub fn task_dir(out_root: &Path, domain: &str, task_id: &str) -> PathBuf {
    out_root.join(format!("{domain}_task")).join(task_id)
}

/// Write `task` below `out_root` and return its directory.
///
/// Images are flattened over `bg`. The video, if any, is copied next to the images.
pub fn write_task(out_root: &Path, task: &TaskPair, bg: Rgb8) -> MazeResult<PathBuf> {
    let dir = task_dir(out_root, &task.domain, &task.task_id);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create task directory '{}'", dir.display()))?;

    task.first_image.save_png(&dir.join(FIRST_FRAME), bg)?;
    task.final_image.save_png(&dir.join(FINAL_FRAME), bg)?;

    let prompt_path = dir.join(PROMPT);
    std::fs::write(&prompt_path, &task.prompt)
        .with_context(|| format!("write prompt '{}'", prompt_path.display()))?;

    let video_dst = dir.join(VIDEO);
    if let Some(src) = task.video.as_deref() {
        ensure_parent_dir(&video_dst)?;
        std::fs::copy(src, &video_dst).with_context(|| {
            format!("copy video '{}' to '{}'", src.display(), video_dst.display())
        })?;
    }

    let meta = TaskMetadata {
        task_id: &task.task_id,
        domain: &task.domain,
        has_video: task.video.is_some(),
        facts: &task.facts,
    };
    let json = serde_json::to_string_pretty(&meta).map_err(|e| MazeError::serde(e.to_string()))?;
    let meta_path = dir.join(METADATA);
    std::fs::write(&meta_path, json)
        .with_context(|| format!("write metadata '{}'", meta_path.display()))?;

    Ok(dir)
}

#[cfg(test)]
#[path = "../../tests/unit/task/output.rs"]
mod tests;
