use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use broll::{
    BakeThreading, CameraMotion, CameraPath, ClipSpec, ComposedFrame, Composer, Fps, Mood, Pose,
    Rgb8, SceneConfig, SceneOverrides, StageLook,
};

#[derive(Parser, Debug)]
#[command(name = "broll", version, about = "Prompt-driven mannequin scene configurator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map a prompt to a scene configuration.
    Map(MapArgs),
    /// Compose a single frame (the still) as JSON.
    Frame(FrameArgs),
    /// Compose every frame of a clip as JSON.
    Bake(BakeArgs),
    /// Print the average color of a reference photo.
    SampleColor(SampleColorArgs),
}

#[derive(Parser, Debug)]
struct MapArgs {
    /// Scene description.
    #[arg(long)]
    prompt: String,

    /// Also report which vocabulary rules fired.
    #[arg(long, default_value_t = false)]
    explain: bool,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene description (defaults to the starting prompt).
    #[arg(long, conflicts_with = "config")]
    prompt: Option<String>,

    /// Scene configuration JSON instead of a prompt.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override mood (moody, clinical, dramatic).
    #[arg(long)]
    mood: Option<Mood>,

    /// Override pose (standing, profile, looking_down, seated).
    #[arg(long)]
    pose: Option<Pose>,

    /// Override camera path (orbit, dolly_in, pan).
    #[arg(long)]
    camera: Option<CameraPath>,

    /// Override key light color (#rrggbb).
    #[arg(long, conflicts_with = "light_from_image")]
    light_color: Option<Rgb8>,

    /// Tint the key light with the average color of a photo.
    #[arg(long)]
    light_from_image: Option<PathBuf>,

    /// Override vertical field of view in degrees.
    #[arg(long)]
    fov: Option<f64>,

    /// Override key light intensity.
    #[arg(long)]
    key: Option<f64>,

    /// Override rim light intensity.
    #[arg(long)]
    rim: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Elapsed time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Use the recording camera speed.
    #[arg(long, default_value_t = false)]
    recording: bool,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BakeArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Clip length in seconds.
    #[arg(long, default_value_t = 6.0)]
    seconds: f64,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Use the preview camera speed instead of the recording one.
    #[arg(long, default_value_t = false)]
    preview: bool,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Minimum frames per worker task (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleColorArgs {
    /// Reference photo.
    #[arg(long)]
    image: PathBuf,
}

#[derive(serde::Serialize)]
struct FrameOutput {
    config: SceneConfig,
    look: StageLook,
    frame: ComposedFrame,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Map(args) => cmd_map(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Bake(args) => cmd_bake(args),
        Command::SampleColor(args) => cmd_sample_color(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_map(args: MapArgs) -> anyhow::Result<()> {
    if args.explain {
        write_json(&broll::explain_prompt(&args.prompt), args.out.as_deref())
    } else {
        write_json(
            &broll::map_prompt_to_params(&args.prompt),
            args.out.as_deref(),
        )
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = resolve_scene(&args.scene)?;
    let motion = CameraMotion {
        recording: args.recording,
    };
    let out = FrameOutput {
        look: StageLook::for_config(&config),
        frame: Composer::compose_with_motion(&config, args.time, motion),
        config,
    };
    write_json(&out, args.out.as_deref())
}

fn cmd_bake(args: BakeArgs) -> anyhow::Result<()> {
    let config = resolve_scene(&args.scene)?;
    let clip = ClipSpec {
        fps: Fps::new(args.fps, 1)?,
        duration_secs: args.seconds,
        motion: CameraMotion {
            recording: !args.preview,
        },
    };
    let threading = BakeThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let baked = broll::bake_clip(&config, &clip, &threading)?;
    tracing::info!(frames = baked.frames.len(), "baked clip");
    write_json(&baked, args.out.as_deref())
}

fn cmd_sample_color(args: SampleColorArgs) -> anyhow::Result<()> {
    let color = broll::sample_light_color(&args.image)?;
    println!("{color}");
    Ok(())
}

fn resolve_scene(args: &SceneArgs) -> anyhow::Result<SceneConfig> {
    let base = match &args.config {
        Some(path) => SceneConfig::from_path(path)?,
        None => broll::map_prompt_to_params(
            args.prompt.as_deref().unwrap_or(broll::DEFAULT_PROMPT),
        ),
    };

    let light_color = match &args.light_from_image {
        Some(path) => Some(broll::sample_light_color(path)?),
        None => args.light_color,
    };
    let overrides = SceneOverrides {
        mood: args.mood,
        pose: args.pose,
        camera_path: args.camera,
        light_color,
        fov_deg: args.fov,
        key_intensity: args.key,
        rim_intensity: args.rim,
    };
    if overrides.is_empty() {
        return Ok(base);
    }
    base.with_overrides(&overrides)
        .context("apply scene overrides")
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output JSON")?;
    let Some(out) = out else {
        println!("{json}");
        return Ok(());
    };

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, json).with_context(|| format!("write json '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
