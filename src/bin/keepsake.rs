use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use keepsake::{
    Card, CardConfig, CardOutput, GridLayout, HostEvent, IntroTimeline, Millis, Rasterizer,
    compute_connectors, snapshot_svg,
};

#[derive(Parser, Debug)]
#[command(name = "keepsake", version)]
struct Cli {
    /// Log engine activity to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the intro timeline as JSON.
    Timeline(ConfigArgs),
    /// Print story card boxes and their connectors for a viewport width.
    Connectors(ConnectorsArgs),
    /// Replay a host event script and print outputs plus the final frame.
    Run(RunArgs),
    /// Replay a host event script up to a time and render that frame.
    Snapshot(SnapshotArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Card configuration JSON. Defaults to the built-in card.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ConnectorsArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Viewport width in px.
    #[arg(long)]
    width: f64,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// JSON array of host events.
    #[arg(long)]
    script: PathBuf,
}

#[derive(Args, Debug)]
struct SnapshotArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// JSON array of host events.
    #[arg(long)]
    script: PathBuf,

    /// Host time of the frame, in ms.
    #[arg(long)]
    at: u64,

    /// Output path. `.svg` writes the SVG document, anything else a PNG.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Connectors(args) => cmd_connectors(args),
        Command::Run(args) => cmd_run(args),
        Command::Snapshot(args) => cmd_snapshot(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<CardConfig> {
    match &args.config {
        Some(path) => Ok(CardConfig::from_path(path)?),
        None => Ok(CardConfig::default()),
    }
}

fn load_script(path: &Path) -> anyhow::Result<Vec<HostEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read event script '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse event script '{}'", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}

fn cmd_timeline(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let timeline = IntroTimeline::love()?;
    let completes_at = timeline.completing_stage().map(|s| s.end());
    print_json(&serde_json::json!({
        "name": cfg.intro.name,
        "completes_at": completes_at,
        "total_duration": timeline.total_duration(),
        "timeline": timeline,
    }))
}

fn cmd_connectors(args: ConnectorsArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    anyhow::ensure!(
        args.width.is_finite() && args.width > 0.0,
        "--width must be a positive number"
    );
    let grid = GridLayout::new(cfg.grid)?.layout(args.width, cfg.stories.len());
    let connectors: Vec<_> = compute_connectors(&grid.nodes, cfg.connector.tangent)
        .into_iter()
        .map(|c| {
            serde_json::json!({
                "id": c.id,
                "orientation": c.orientation,
                "d": c.svg_d(),
            })
        })
        .collect();
    print_json(&serde_json::json!({
        "grid": grid,
        "connectors": connectors,
    }))
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let events = load_script(&args.script)?;
    let last = events
        .iter()
        .filter_map(HostEvent::time)
        .max()
        .unwrap_or(Millis(0));

    let mut card = Card::new(cfg)?;
    let outputs: Vec<CardOutput> = card.replay(events)?;
    print_json(&serde_json::json!({
        "screen": card.screen(),
        "outputs": outputs,
        "snapshot": card.snapshot(last),
    }))
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let events = load_script(&args.script)?;
    let at = Millis(args.at);

    let mut card = Card::new(cfg)?;
    let upto = events
        .into_iter()
        .take_while(|e| e.time().is_none_or(|t| t <= at));
    card.replay(upto)?;
    card.handle(HostEvent::Tick { now: at })?;
    let snap = card.snapshot(at);

    let is_svg = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(&args.out, snapshot_svg(&snap))
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    } else {
        Rasterizer::new().render_snapshot(&snap)?.save_png(&args.out)?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
