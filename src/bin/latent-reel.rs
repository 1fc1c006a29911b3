use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use latent_reel::{CutoffPolicy, LinearGenerator, RunConfig, compute_schedule};

#[derive(Parser, Debug)]
#[command(name = "latent-reel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render numbered PNG frames of a latent-space walk.
    Render(RenderArgs),
    /// Print the frame schedule as JSON without loading a generator.
    Plan(PlanArgs),
    /// Write seeded random generator weights (JSON) for demos.
    InitWeights(InitWeightsArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Pretrained generator weights (JSON).
    #[arg(long)]
    generator_file: Option<PathBuf>,

    /// Directory for the numbered frames.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    #[command(flatten)]
    run: RunOverrides,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    run: RunOverrides,
}

#[derive(Args, Debug)]
struct InitWeightsArgs {
    /// Output weights path.
    #[arg(long)]
    out: PathBuf,

    /// Latent dimension.
    #[arg(long, default_value_t = 512)]
    latent_size: usize,

    /// Image size in pixels.
    #[arg(long, default_value_t = 128)]
    size: usize,

    /// Output channels.
    #[arg(long, value_enum, default_value_t = Channels::Rgb)]
    channels: Channels,

    /// Weight seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Channels {
    Gray,
    Rgb,
}

/// Flags that override the (default or file-provided) run config.
#[derive(Args, Debug)]
struct RunOverrides {
    /// Base run config (JSON). Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Latent size of the generator.
    #[arg(long)]
    latent_size: Option<usize>,

    /// Number of samples per frame (preferably a square number).
    #[arg(long)]
    num_samples: Option<usize>,

    /// Image size of the generator output.
    #[arg(long)]
    size: Option<usize>,

    /// Length of the animation in minutes.
    #[arg(long)]
    time: Option<f64>,

    /// Standard deviation of the drawn latent points.
    #[arg(long)]
    std: Option<f32>,

    /// Redraw standard-normal values beyond this magnitude.
    #[arg(long)]
    truncation: Option<f32>,

    /// Seconds to go from one point to the next.
    #[arg(long)]
    traversal_time: Option<f64>,

    /// Seconds to hold each point.
    #[arg(long)]
    static_time: Option<f64>,

    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Latent sampler seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Where the frame budget is enforced.
    #[arg(long, value_enum)]
    cutoff: Option<CutoffArg>,

    /// Grid padding in pixels.
    #[arg(long)]
    padding: Option<u32>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CutoffArg {
    PerFrame,
    TransitionBoundary,
}

impl RunOverrides {
    fn resolve(&self) -> anyhow::Result<RunConfig> {
        let mut cfg = match &self.config {
            Some(path) => RunConfig::from_path(path)?,
            None => RunConfig::default(),
        };
        if let Some(v) = self.latent_size {
            cfg.latent_size = v;
        }
        if let Some(v) = self.num_samples {
            cfg.num_samples = v;
        }
        if let Some(v) = self.size {
            cfg.size = v;
        }
        if let Some(v) = self.time {
            cfg.time_minutes = v;
        }
        if let Some(v) = self.std {
            cfg.std = v;
        }
        if let Some(v) = self.truncation {
            cfg.truncation = Some(v);
        }
        if let Some(v) = self.traversal_time {
            cfg.traversal_time = v;
        }
        if let Some(v) = self.static_time {
            cfg.static_time = v;
        }
        if let Some(v) = self.fps {
            cfg.fps = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = v;
        }
        if let Some(v) = self.cutoff {
            cfg.cutoff = match v {
                CutoffArg::PerFrame => CutoffPolicy::PerFrame,
                CutoffArg::TransitionBoundary => CutoffPolicy::TransitionBoundary,
            };
        }
        if let Some(v) = self.padding {
            cfg.padding = v;
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Plan(args) => cmd_plan(args),
        Command::InitWeights(args) => cmd_init_weights(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = args.run.resolve()?;
    if let Some(path) = args.generator_file {
        cfg.generator_file = Some(path);
    }
    if let Some(dir) = args.out_dir {
        cfg.out_dir = dir;
    }

    // Fail on timing before paying for the weights.
    cfg.timing()?;

    let weights = cfg.require_generator_file()?;
    tracing::info!(path = %weights.display(), "loading generator weights");
    let model = LinearGenerator::from_path(weights)?;
    model.expect_dims(cfg.latent_size, cfg.size)?;

    let stats = latent_reel::render_to_dir(&cfg, &model)?;
    eprintln!(
        "wrote {} frames to {}",
        stats.frames_emitted,
        cfg.out_dir.display()
    );
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = args.run.resolve()?;
    let timing = cfg.timing()?;
    let schedule = compute_schedule(&timing);
    let json = serde_json::to_string_pretty(&schedule).context("serialize schedule")?;
    println!("{json}");
    Ok(())
}

fn cmd_init_weights(args: InitWeightsArgs) -> anyhow::Result<()> {
    let channels = match args.channels {
        Channels::Gray => 1,
        Channels::Rgb => 3,
    };
    let model = LinearGenerator::random(args.latent_size, channels, args.size, args.seed)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = std::fs::File::create(&args.out)
        .with_context(|| format!("create weights file '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, model.weights())
        .with_context(|| format!("write weights '{}'", args.out.display()))?;
    w.flush()
        .with_context(|| format!("flush weights '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
