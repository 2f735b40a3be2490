//! Animation timeline for a traced puzzle.
//!
//! The sequence is a pure function of the puzzle and the timing: a leading hold on the initial
//! state, `frames_per_step` frames per path position, then a trailing hold twice as long on the
//! final state.

use crate::config::SequenceTiming;
use crate::maze::trace::PuzzleState;
use crate::render::spec::RenderSpec;

/// One render state shown for `repeat` consecutive frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSegment {
    /// What the frames show.
    pub spec: RenderSpec,
    /// How many identical frames.
    pub repeat: u64,
}

/// Run-length encoded list of render states, in playback order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    segments: Vec<FrameSegment>,
}

impl FrameSequence {
    /// Segments in playback order. Zero-length segments are never stored.
    pub fn segments(&self) -> &[FrameSegment] {
        &self.segments
    }

    /// Total number of frames.
    pub fn len(&self) -> u64 {
        self.segments.iter().map(|s| s.repeat).sum()
    }

    /// `true` when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// One render state per frame.
    pub fn iter(&self) -> impl Iterator<Item = &RenderSpec> + '_ {
        self.segments
            .iter()
            .flat_map(|s| std::iter::repeat_n(&s.spec, s.repeat as usize))
    }
}

/// Frames produced for a path of `path_len` positions:
/// `hold + frames_per_step * path_len + 2 * hold`.
pub fn frame_count(timing: &SequenceTiming, path_len: usize) -> u64 {
    let hold = u64::from(timing.hold_frames);
    hold + u64::from(timing.frames_per_step) * path_len as u64 + 2 * hold
}

/// Build the animation timeline for `state`.
pub fn build_sequence(state: &PuzzleState, timing: &SequenceTiming) -> FrameSequence {
    let mut segments = Vec::with_capacity(state.path().len() + 2);
    let mut push = |spec: RenderSpec, repeat: u64| {
        if repeat > 0 {
            segments.push(FrameSegment { spec, repeat });
        }
    };

    let hold = u64::from(timing.hold_frames);
    push(RenderSpec::initial(state), hold);
    for i in 0..state.path().len() {
        push(RenderSpec::step(state, i), u64::from(timing.frames_per_step));
    }
    push(RenderSpec::final_state(state), 2 * hold);

    FrameSequence { segments }
}

#[cfg(test)]
#[path = "../tests/unit/sequence.rs"]
mod tests;
