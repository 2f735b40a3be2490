use super::*;
use crate::config::MazeConfig;

fn assembler() -> PuzzleAssembler {
    let cfg = MazeConfig {
        generate_video: false,
        ..MazeConfig::default()
    };
    PuzzleAssembler::new(&cfg).unwrap()
}

#[test]
fn task_ids_are_zero_padded() {
    assert_eq!(task_id("arrow_maze", 0), "arrow_maze_0000");
    assert_eq!(task_id("arrow_maze", 42), "arrow_maze_0042");
    assert_eq!(task_id("x", 12345), "x_12345");
}

#[test]
fn parallel_and_sequential_batches_match() {
    let asm = assembler();
    let par = generate_batch(
        &asm,
        &BatchOptions {
            count: 6,
            seed: 9,
            parallel: true,
        },
    )
    .unwrap();
    let seq = generate_batch(
        &asm,
        &BatchOptions {
            count: 6,
            seed: 9,
            parallel: false,
        },
    )
    .unwrap();

    assert_eq!(par.len(), 6);
    for (i, (a, b)) in par.iter().zip(seq.iter()).enumerate() {
        assert_eq!(a.task_id, task_id("arrow_maze", i));
        assert_eq!(a.task_id, b.task_id);
        assert_eq!(a.facts, b.facts);
        assert_eq!(a.first_image, b.first_image);
        assert_eq!(a.video, None);
    }
}

#[test]
fn different_seeds_give_different_batches() {
    let asm = assembler();
    let facts = |seed| {
        generate_batch(
            &asm,
            &BatchOptions {
                count: 4,
                seed,
                parallel: false,
            },
        )
        .unwrap()
        .into_iter()
        .map(|t| t.facts)
        .collect::<Vec<_>>()
    };
    assert_eq!(facts(1), facts(1));
    assert_ne!(facts(1), facts(2));
}

#[test]
fn empty_batch_is_ok() {
    let out = generate_batch(
        &assembler(),
        &BatchOptions {
            count: 0,
            ..BatchOptions::default()
        },
    )
    .unwrap();
    assert!(out.is_empty());
}

#[test]
fn callback_sees_each_task_once_and_results_keep_index_order() {
    use std::sync::Mutex;

    let asm = assembler();
    let seen = Mutex::new(Vec::new());
    let opts = BatchOptions {
        count: 5,
        seed: 3,
        parallel: true,
    };
    let ids = generate_batch_with(&asm, &opts, |task| {
        seen.lock().unwrap().push(task.task_id.clone());
        Ok(task.task_id)
    })
    .unwrap();

    let expected: Vec<_> = (0..5).map(|i| task_id("arrow_maze", i)).collect();
    assert_eq!(ids, expected);
    let mut seen = seen.into_inner().unwrap();
    seen.sort();
    assert_eq!(seen, expected);
}

#[test]
fn callback_gets_the_same_tasks_as_the_collected_batch() {
    let asm = assembler();
    let opts = BatchOptions {
        count: 3,
        seed: 11,
        parallel: false,
    };
    let facts = generate_batch_with(&asm, &opts, |task| Ok(task.facts)).unwrap();
    let full: Vec<_> = generate_batch(&asm, &opts)
        .unwrap()
        .into_iter()
        .map(|t| t.facts)
        .collect();
    assert_eq!(facts, full);
}

#[test]
fn callback_error_stops_the_batch() {
    let asm = assembler();
    let opts = BatchOptions {
        count: 4,
        seed: 0,
        parallel: false,
    };
    let err = generate_batch_with(&asm, &opts, |task| -> MazeResult<()> {
        if task.task_id.ends_with("0002") {
            Err(crate::foundation::error::MazeError::encode("disk full"))
        } else {
            Ok(())
        }
    })
    .unwrap_err();
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn worker_parts_build_equivalent_assemblers() {
    fn assert_sync<T: Sync + Send>(_: &T) {}

    let asm = assembler();
    let parts = asm.parts();
    assert_sync(&parts);
    let mut a = parts.build();
    let mut b = parts.build();
    let ta = a.generate_task("t", &mut task_rng(4, 0)).unwrap();
    let tb = b.generate_task("t", &mut task_rng(4, 0)).unwrap();
    assert_eq!(ta.final_image, tb.final_image);
    assert_eq!(a.config().domain, asm.config().domain);
}
