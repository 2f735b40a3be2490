use rand::SeedableRng;
use rand_pcg::Pcg64;
use rayon::prelude::*;

use crate::foundation::error::MazeResult;
use crate::foundation::math::mix_seed;
use crate::task::assemble::{PuzzleAssembler, TaskPair};

/// How many tasks to generate and from which seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    /// Number of tasks.
    pub count: usize,
    /// Base seed; task `i` uses a seed derived from `(seed, i)`.
    pub seed: u64,
    /// Spread tasks over the rayon thread pool.
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: 1,
            seed: 0,
            parallel: true,
        }
    }
}

/// Id of task `index` in `domain`.
pub fn task_id(domain: &str, index: usize) -> String {
    format!("{domain}_{index:04}")
}

/// RNG for task `index` of a batch seeded with `seed`.
pub fn task_rng(seed: u64, index: usize) -> Pcg64 {
    Pcg64::seed_from_u64(mix_seed(seed, index as u64))
}

/// Generate `opts.count` tasks in index order.
///
/// Every task draws from its own RNG, so output does not depend on `parallel` or on the size of
/// the thread pool.
pub fn generate_batch(
    assembler: &PuzzleAssembler,
    opts: &BatchOptions,
) -> MazeResult<Vec<TaskPair>> {
    generate_batch_with(assembler, opts, Ok)
}

/// Generate `opts.count` tasks, handing each one to `on_task` as soon as it is assembled.
///
/// Only the values returned by `on_task` are kept, in index order. With `parallel` set,
/// `on_task` runs on the worker threads in completion order; each task still gets the id and
/// RNG of its index.
#[tracing::instrument(skip(assembler, on_task), fields(domain = %assembler.config().domain))]
pub fn generate_batch_with<R, F>(
    assembler: &PuzzleAssembler,
    opts: &BatchOptions,
    on_task: F,
) -> MazeResult<Vec<R>>
where
    R: Send,
    F: Fn(TaskPair) -> MazeResult<R> + Sync + Send,
{
    let one = |asm: &mut PuzzleAssembler, i: usize| -> MazeResult<R> {
        let id = task_id(&asm.config().domain, i);
        on_task(asm.generate_task(&id, &mut task_rng(opts.seed, i))?)
    };

    let parts = assembler.parts();
    let out = if opts.parallel {
        (0..opts.count)
            .into_par_iter()
            .map_init(|| parts.build(), one)
            .collect::<MazeResult<Vec<_>>>()?
    } else {
        let mut asm = parts.build();
        (0..opts.count)
            .map(|i| one(&mut asm, i))
            .collect::<MazeResult<Vec<_>>>()?
    };

    tracing::info!(count = out.len(), "batch generated");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/task/batch.rs"]
mod tests;
