use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "inkscribe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the full signature MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input signature JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Name to write. Overrides the name in the JSON, if any.
    #[arg(long)]
    name: Option<String>,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input signature JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Name to write. Overrides the name in the JSON, if any.
    #[arg(long)]
    name: Option<String>,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    session: SessionArgs,
}

#[derive(Parser, Debug)]
struct SessionArgs {
    /// Override the particle seed. Defaults to a hash of the name.
    #[arg(long)]
    seed: Option<u64>,

    /// Pin the pen tip at the canvas center instead of tracking the text.
    #[arg(long)]
    static_pen: bool,
}

impl SessionArgs {
    fn opts(&self) -> inkscribe::RenderSessionOpts {
        inkscribe::RenderSessionOpts {
            track_pen: !self.static_pen,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn make_session(
    in_path: &Path,
    name: Option<String>,
    opts: inkscribe::RenderSessionOpts,
) -> anyhow::Result<inkscribe::RenderSession> {
    let mut sig = inkscribe::Signature::from_path(in_path)?;
    if let Some(name) = name {
        sig = sig.with_name(name);
    }
    sig.validate()?;

    let assets_root = in_path.parent().unwrap_or_else(|| Path::new("."));
    let assets = inkscribe::PreparedAssets::prepare(&sig, assets_root)?;
    Ok(inkscribe::RenderSession::new(sig, assets, opts)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let session = make_session(&args.in_path, args.name, args.session.opts())?;
    let mut rasterizer = inkscribe::CpuRasterizer::new();
    let frame = session.render_frame(&mut rasterizer, inkscribe::FrameIndex(args.frame))?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let session = make_session(&args.in_path, args.name, args.session.opts())?;
    let mut rasterizer = inkscribe::CpuRasterizer::new();
    let mut sink = inkscribe::FfmpegSink::new(inkscribe::FfmpegSinkOpts::new(&args.out));

    let stats = session.render_all(&mut rasterizer, &mut sink)?;

    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames_total);
    Ok(())
}
