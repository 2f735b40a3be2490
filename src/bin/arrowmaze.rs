use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use arrowmaze::task::batch::task_rng;

#[derive(Parser, Debug)]
#[command(name = "arrowmaze", version)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate puzzle tasks into an output directory.
    Generate(GenerateArgs),
    /// Render the initial or final image of one seeded puzzle as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Number of tasks.
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Base seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output root; tasks land in `<out>/<domain>_task/<task_id>/`.
    #[arg(long)]
    out: PathBuf,

    /// Config JSON (defaults are used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip video encoding.
    #[arg(long)]
    no_video: bool,

    /// Generate tasks on all cores.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Base seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Task index within the seeded batch.
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Which state to draw.
    #[arg(long, value_enum, default_value_t = FrameState::Initial)]
    state: FrameState,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Config JSON (defaults are used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FrameState {
    Initial,
    Final,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<arrowmaze::MazeConfig> {
    match path {
        Some(p) => arrowmaze::MazeConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(arrowmaze::MazeConfig::default()),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if args.no_video {
        cfg.generate_video = false;
    }

    let assembler = arrowmaze::PuzzleAssembler::new(&cfg)?;
    let bg = cfg.render.background;
    let written = arrowmaze::generate_batch_with(
        &assembler,
        &arrowmaze::BatchOptions {
            count: args.count,
            seed: args.seed,
            parallel: args.parallel,
        },
        |task| {
            let dir = arrowmaze::write_task(&args.out, &task, bg)?;
            tracing::debug!(dir = %dir.display(), "task written");
            Ok(task.video.is_some())
        },
    )?;

    let videos = written.iter().filter(|&&v| v).count();
    eprintln!(
        "wrote {} tasks ({} with video) to {}",
        written.len(),
        videos,
        args.out.display()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;

    let mut rng = task_rng(args.seed, args.index);
    let (grid, start) = arrowmaze::generate(&mut rng, cfg.min_grid_size, cfg.max_grid_size)?;
    let state = arrowmaze::trace(&grid, start)?;
    let spec = match args.state {
        FrameState::Initial => arrowmaze::RenderSpec::initial(&state),
        FrameState::Final => arrowmaze::RenderSpec::final_state(&state),
    };

    let mut renderer = arrowmaze::SceneRenderer::new(&cfg.render)?;
    let frame = renderer.render(&state, &spec)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.save_png(&args.out, cfg.render.background)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
