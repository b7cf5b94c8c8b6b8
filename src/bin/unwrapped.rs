use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "unwrapped", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the total video length in frames.
    Duration(PlanArgs),
    /// Write the placed timeline as JSON.
    Plan(PlanOutArgs),
    /// Print the scenes visible at one frame.
    At(AtArgs),
    /// Check a props file against the input schema.
    Validate(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input props JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Timeline config JSON overriding the default scene lengths.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the planets exit overlap policy.
    #[arg(long, value_enum)]
    policy: Option<PolicyChoice>,
}

#[derive(Args, Debug)]
struct PlanOutArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AtArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyChoice {
    Always,
    WhenAdjacent,
}

impl From<PolicyChoice> for unwrapped::OverlapPolicy {
    fn from(v: PolicyChoice) -> Self {
        match v {
            PolicyChoice::Always => Self::Always,
            PolicyChoice::WhenAdjacent => Self::WhenAdjacent,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Duration(args) => cmd_duration(args),
        Command::Plan(args) => cmd_plan(args),
        Command::At(args) => cmd_at(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_props(path: &Path) -> anyhow::Result<unwrapped::UnwrappedProps> {
    unwrapped::UnwrappedProps::from_path(path)
        .with_context(|| format!("load props '{}'", path.display()))
}

fn load_config(args: &PlanArgs) -> anyhow::Result<unwrapped::TimelineConfig> {
    let mut config = match &args.config {
        Some(path) => unwrapped::TimelineConfig::from_path(path)
            .with_context(|| format!("load timeline config '{}'", path.display()))?,
        None => unwrapped::TimelineConfig::default(),
    };
    if let Some(policy) = args.policy {
        config.overlap_policy = policy.into();
    }
    Ok(config)
}

fn plan(args: &PlanArgs) -> anyhow::Result<unwrapped::Timeline> {
    let props = load_props(&args.input.in_path)?;
    let config = load_config(args)?;
    Ok(unwrapped::plan_timeline(
        &props,
        &config,
        &unwrapped::PlanetTiming::default(),
    ))
}

fn cmd_duration(args: PlanArgs) -> anyhow::Result<()> {
    let timeline = plan(&args)?;
    println!("{}", timeline.duration_frames());
    Ok(())
}

fn cmd_plan(args: PlanOutArgs) -> anyhow::Result<()> {
    let timeline = plan(&args.plan)?;
    let json = timeline.to_json_pretty()?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write plan '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_at(args: AtArgs) -> anyhow::Result<()> {
    let timeline = plan(&args.plan)?;
    if args.frame >= timeline.duration_frames() {
        anyhow::bail!(
            "frame {} is out of bounds (video has {} frames)",
            args.frame,
            timeline.duration_frames()
        );
    }
    for scene in timeline.active_at(unwrapped::FrameIndex(args.frame)) {
        println!("{}", scene.id);
    }
    Ok(())
}

fn cmd_validate(args: InputArgs) -> anyhow::Result<()> {
    let props = load_props(&args.in_path)?;
    props
        .validate()
        .with_context(|| format!("validate props '{}'", args.in_path.display()))?;
    eprintln!("ok {}", args.in_path.display());
    Ok(())
}
