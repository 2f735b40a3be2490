use super::*;

#[test]
fn defaults_validate() {
    let cfg = MazeConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.domain, "arrow_maze");
    assert_eq!((cfg.min_grid_size, cfg.max_grid_size), (4, 6));
    assert_eq!(cfg.timing.frames_per_step, 6);
    assert_eq!(cfg.timing.hold_frames, 8);
    assert_eq!(cfg.fps().unwrap(), Fps { num: 10, den: 1 });
}

#[test]
fn size_bounds_are_checked() {
    let cfg = MazeConfig {
        min_grid_size: 0,
        ..MazeConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(MazeError::Config(_))));

    let cfg = MazeConfig {
        min_grid_size: 5,
        max_grid_size: 4,
        ..MazeConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(MazeError::Config(_))));
}

#[test]
fn zero_timing_and_fps_are_rejected() {
    let cfg = MazeConfig {
        fps: 0,
        ..MazeConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = MazeConfig {
        timing: SequenceTiming {
            frames_per_step: 0,
            hold_frames: 8,
        },
        ..MazeConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = MazeConfig {
        timing: SequenceTiming {
            frames_per_step: 1,
            hold_frames: 0,
        },
        ..MazeConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn canvas_too_small_for_largest_grid_is_a_render_error() {
    let mut cfg = MazeConfig::default();
    cfg.render.canvas = Canvas {
        width: 104,
        height: 104,
    };
    // 104 - 2 * 50 = 4 pixels for 6 cells.
    assert!(matches!(cfg.validate(), Err(MazeError::Render(_))));
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = MazeConfig::from_json_str(
        r##"{
            "min_grid_size": 3,
            "max_grid_size": 3,
            "render": { "canvas": { "width": 256, "height": 200 }, "visited_color": "#ffff00" },
            "generate_video": false
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.max_grid_size, 3);
    assert_eq!(cfg.render.canvas.width, 256);
    assert_eq!(cfg.render.visited_color, Rgb8::new(255, 255, 0));
    assert_eq!(cfg.render.margin, 50);
    assert!(!cfg.generate_video);
    assert_eq!(cfg.timing, SequenceTiming::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = MazeConfig::from_json_str(r#"{ "grid_sise": 4 }"#).unwrap_err();
    assert!(matches!(err, MazeError::Serde(_)));
}

#[test]
fn video_dir_defaults_under_temp() {
    let cfg = MazeConfig::default();
    assert!(cfg.resolved_video_dir().ends_with("arrow_maze_videos"));

    let cfg = MazeConfig {
        video_dir: Some(PathBuf::from("out/videos")),
        ..MazeConfig::default()
    };
    assert_eq!(cfg.resolved_video_dir(), PathBuf::from("out/videos"));
}
