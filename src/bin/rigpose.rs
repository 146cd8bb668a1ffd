use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rigpose", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the frame numbers a sampling policy selects.
    Frames(FramesArgs),
    /// Run the full pose pipeline over a baked rig and write the result as JSON.
    Extract(ExtractArgs),
    /// Build a camera profile from rotation/zoom key files.
    Camera(CameraArgs),
    /// Summarize a baked rig: native range, root motion and a suggested frame step.
    Info(InfoArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Spread,
    RangeStep,
    Clamped,
}

impl From<ModeArg> for rigpose::FrameMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Spread => Self::SpreadTotalAnimation,
            ModeArg::RangeStep => Self::RangeStep,
            ModeArg::Clamped => Self::Clamped,
        }
    }
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[arg(long, value_enum, default_value_t = ModeArg::Spread)]
    mode: ModeArg,

    /// Number of frames to select.
    #[arg(long, default_value_t = 81)]
    count: u32,

    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    start: i64,

    #[arg(long, default_value_t = 500, allow_hyphen_values = true)]
    end: i64,

    #[arg(long, default_value_t = 1)]
    step: i64,

    /// First frame of the animation.
    #[arg(long, allow_hyphen_values = true)]
    native_start: i64,

    /// Last frame of the animation (inclusive).
    #[arg(long, allow_hyphen_values = true)]
    native_end: i64,
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Baked rig JSON.
    #[arg(long)]
    rig: PathBuf,

    /// Pose config JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reference pose image to align to.
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Camera profile JSON, overriding the config's camera.
    #[arg(long)]
    camera: Option<PathBuf>,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CameraArgs {
    /// Number of output frames the profile covers.
    #[arg(long, default_value_t = 81)]
    frames: usize,

    /// Rotation keys, one `frame, degrees` pair per line.
    #[arg(long)]
    rotation: Option<PathBuf>,

    /// Zoom keys, one `frame, factor` pair per line.
    #[arg(long)]
    zoom: Option<PathBuf>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Baked rig JSON.
    #[arg(long)]
    rig: PathBuf,

    /// Source frame rate, overriding the rig's own.
    #[arg(long)]
    fps: Option<f64>,

    /// Frame rate the pose sequence is meant to play back at.
    #[arg(long, default_value_t = rigpose::DEFAULT_TARGET_FPS)]
    target_fps: f64,
}

#[derive(serde::Serialize)]
struct InfoReport {
    #[serde(flatten)]
    clip: rigpose::ClipInfo,
    suggested_step: i64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Extract(args) => cmd_extract(args),
        Command::Camera(args) => cmd_camera(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let spec = rigpose::FrameSampleSpec {
        mode: args.mode.into(),
        requested_count: args.count,
        range_start: args.start,
        range_end: args.end,
        step: args.step,
    };
    let frames = rigpose::compute_frames(&spec, args.native_start, args.native_end);
    println!("{}", serde_json::to_string(&frames)?);
    Ok(())
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => rigpose::PoseConfig::from_path(path)?,
        None => rigpose::PoseConfig::default(),
    };
    if let Some(path) = &args.camera {
        let text = read_text(path)?;
        let profile: rigpose::CameraProfile = serde_json::from_str(&text)
            .with_context(|| format!("parse camera profile '{}'", path.display()))?;
        config.camera = Some(profile);
    }

    let rig = rigpose::BakedRig::from_path(&args.rig)?;
    let reference = match &args.reference {
        Some(path) => {
            rigpose::ReferenceBBox::from_path(path, config.canvas.width, config.canvas.height)?
        }
        None => None,
    };

    let session = rigpose::PoseSession::new(config)?;
    let output = session.run(&rig, reference.as_ref())?;

    write_json(&args.out, &output)?;
    eprintln!(
        "wrote {} ({} frames)",
        args.out.display(),
        output.frames.len()
    );
    Ok(())
}

fn cmd_camera(args: CameraArgs) -> anyhow::Result<()> {
    let rotation = args.rotation.as_deref().map(read_text).transpose()?;
    let zoom = args.zoom.as_deref().map(read_text).transpose()?;
    let build = rigpose::CameraProfile::from_keys(
        args.frames,
        rotation.as_deref().unwrap_or_default(),
        zoom.as_deref().unwrap_or_default(),
    );

    match &args.out {
        Some(path) => write_json(path, &build.profile)?,
        None => println!("{}", serde_json::to_string(&build.profile)?),
    }
    eprintln!("{}", build.status);
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let mut rig = rigpose::BakedRig::from_path(&args.rig)?;
    if let Some(fps) = args.fps {
        rig = rig.with_fps(fps);
    }
    let clip = rigpose::analyze(&rig)?;
    let report = InfoReport {
        clip,
        suggested_step: clip.suggested_step(args.target_fps),
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let mut f = std::fs::File::create(path)
        .with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(&mut f, value)
        .with_context(|| format!("write JSON '{}'", path.display()))?;
    f.write_all(b"\n")?;
    Ok(())
}
