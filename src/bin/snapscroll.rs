use std::{cell::RefCell, path::PathBuf, rc::Rc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use snapscroll::{ScrollPhase, ScrollScene, ScrollViewport as _};

#[derive(Parser, Debug)]
#[command(name = "snapscroll", version)]
struct Cli {
    /// Print debug-level controller logs to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print slide positions, content size and snap targets as JSON.
    Layout(LayoutArgs),
    /// Drive the controller frame by frame and print a JSON summary.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Drag to this normalized position and release.
    #[arg(long, conflicts_with = "goto", required_unless_present = "goto")]
    release_at: Option<f64>,

    /// Navigate to this slide index.
    #[arg(long)]
    goto: Option<usize>,

    /// Frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Stop after this many frames even if the snap has not settled.
    #[arg(long, default_value_t = 600)]
    max_frames: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let scene = ScrollScene::from_path(&args.in_path)?;
    let mut scroll = scene.build_controller()?;
    let slide_count = scroll
        .initialize()
        .with_context(|| format!("initialize scene '{}'", args.in_path.display()))?;

    let arrangement = scroll
        .arrangement()
        .context("initialized controller has no arrangement")?;
    let report = serde_json::json!({
        "direction": scene.settings.direction,
        "slide_count": slide_count,
        "content_size": arrangement.content_size,
        "positions": arrangement.elements.iter().map(|e| e.position).collect::<Vec<_>>(),
        "snap_targets": scroll.snap_targets(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let scene = ScrollScene::from_path(&args.in_path)?;
    let mut scroll = scene.build_controller()?;
    scroll
        .initialize()
        .with_context(|| format!("initialize scene '{}'", args.in_path.display()))?;

    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notifications);
    scroll.subscribe(move |change| sink.borrow_mut().push(*change));

    let dir = scene.settings.direction;
    let accepted = match (args.release_at, args.goto) {
        (Some(pos), _) => {
            scroll.begin_drag();
            if let Some(vp) = scroll.viewport_mut() {
                vp.set_normalized_position(dir, pos);
            }
            scroll.end_drag().is_some()
        }
        (None, Some(index)) => scroll.go_to_slide(index),
        (None, None) => anyhow::bail!("either --release-at or --goto is required"),
    };

    let mut frames = 0u32;
    while scroll.phase() == ScrollPhase::Snapping && frames < args.max_frames {
        scroll.advance(args.dt);
        frames += 1;
    }

    let position = scroll
        .viewport()
        .map(|vp| vp.normalized_position(dir))
        .context("controller lost its viewport")?;
    let report = serde_json::json!({
        "accepted": accepted,
        "current_index": scroll.current_index(),
        "final_position": position,
        "frames": frames,
        "settled": scroll.phase() == ScrollPhase::Idle,
        "notifications": notifications.borrow().clone(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
