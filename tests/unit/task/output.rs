use super::*;
use crate::config::MazeConfig;
use crate::maze::grid::{Direction, Grid, Position};
use crate::maze::trace::trace;
use crate::task::assemble::PuzzleAssembler;

fn root(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("arrowmaze_output_{}_{name}", std::process::id()))
}

fn task() -> TaskPair {
    use Direction::{Down, Left, Right, Up};
    let g = Grid::from_rows(vec![vec![Right, Up], vec![Left, Down]]).unwrap();
    let state = trace(&g, Position::new(0, 0)).unwrap();
    let cfg = MazeConfig {
        generate_video: false,
        ..MazeConfig::default()
    };
    PuzzleAssembler::new(&cfg)
        .unwrap()
        .assemble("arrow_maze_0003", &state)
        .unwrap()
}

#[test]
fn writes_the_task_directory_layout() {
    let out = root("layout");
    let task = task();
    let dir = write_task(&out, &task, Rgb8::new(255, 255, 255)).unwrap();

    assert_eq!(dir, out.join("arrow_maze_task").join("arrow_maze_0003"));
    for name in [FIRST_FRAME, FINAL_FRAME, PROMPT, METADATA] {
        assert!(dir.join(name).is_file(), "{name} missing");
    }
    assert!(!dir.join(VIDEO).exists());

    assert_eq!(std::fs::read_to_string(dir.join(PROMPT)).unwrap(), task.prompt);

    let img = image::open(dir.join(FIRST_FRAME)).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (512, 512));
    let px = task.first_image.pixel(49, 300).unwrap();
    assert_eq!(img.get_pixel(49, 300).0, [px[0], px[1], px[2]]);

    let meta: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join(METADATA)).unwrap()).unwrap();
    assert_eq!(meta["task_id"], "arrow_maze_0003");
    assert_eq!(meta["domain"], "arrow_maze");
    assert_eq!(meta["has_video"], false);
    assert_eq!(meta["stop_reason"], "exited_boundary");
    assert_eq!(meta["path_length"], 2);
    assert_eq!(meta["exit_direction"], "up");

    let _ = std::fs::remove_dir_all(out);
}

#[test]
fn copies_the_video_when_present() {
    let out = root("video");
    let src = out.join("src").join("clip.mp4");
    ensure_parent_dir(&src).unwrap();
    std::fs::write(&src, b"not really an mp4").unwrap();

    let mut task = task();
    task.video = Some(src);
    let dir = write_task(&out, &task, Rgb8::new(255, 255, 255)).unwrap();
    assert_eq!(std::fs::read(dir.join(VIDEO)).unwrap(), b"not really an mp4");

    let _ = std::fs::remove_dir_all(out);
}

#[test]
fn missing_video_source_is_an_error() {
    let out = root("missing");
    let mut task = task();
    task.video = Some(out.join("nope.mp4"));
    assert!(matches!(
        write_task(&out, &task, Rgb8::new(0, 0, 0)),
        Err(MazeError::Other(_))
    ));
    let _ = std::fs::remove_dir_all(out);
}
