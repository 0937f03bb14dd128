use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "strokefx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame of a scene as a PNG.
    Frame(FrameArgs),
    /// Print the stroke shader's SkSL source.
    Shader,
    /// Print per-stroke geometry (length, crossings) as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scene JSON path, or a preset name (playground, fireworks, avatar).
    #[arg(long)]
    scene: String,

    /// Time since the scene started, in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,

    /// Simulation rate used to step from 0 to `--time-ms`.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Draw the grid's debug dots under the strokes.
    #[arg(long)]
    grid_overlay: bool,

    /// Never erase strokes from the tail.
    #[arg(long)]
    keep_trail: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Scene JSON path, or a preset name.
    #[arg(long)]
    scene: String,
}

const BACKGROUND: [u8; 4] = [18, 20, 28, 255];
const OVERLAY_COLOR: strokefx::Rgba = [0.596, 0.984, 0.596, 1.0];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Shader => {
            print!("{}", strokefx::stroke_shader_source());
            Ok(())
        }
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn load_scene(arg: &str) -> anyhow::Result<strokefx::Scene> {
    if let Ok(preset) = arg.parse::<strokefx::Preset>() {
        return Ok(preset.scene(false)?);
    }
    let path = Path::new(arg);
    let json =
        fs::read_to_string(path).with_context(|| format!("read scene '{}'", path.display()))?;
    strokefx::Scene::from_json(&json).with_context(|| format!("parse scene '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let scene = if args.keep_trail {
        scene.with_keep_trail(true)
    } else {
        scene
    };

    let mut orchestrator = scene.build().context("build scene")?;
    orchestrator
        .seek(args.time_ms, args.fps)
        .context("advance scene")?;

    let mut raster = strokefx::CpuRaster::new(
        scene.canvas,
        strokefx::RenderSettings {
            clear_rgba: Some(BACKGROUND),
        },
    );
    if args.grid_overlay {
        use strokefx::RenderEngine as _;
        for dot in scene
            .grid
            .overlay_dots(OVERLAY_COLOR)
            .into_iter()
            .chain(scene.grid.anchor_dots(OVERLAY_COLOR))
        {
            raster.submit(&dot.into())?;
        }
    }
    orchestrator.render(&mut raster).context("render frame")?;
    let frame = raster.frame();

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
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

#[derive(serde::Serialize)]
struct StrokeReport<'a> {
    index: usize,
    points: usize,
    total_length: f64,
    intersections: &'a [strokefx::IntersectionRecord],
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let mut orchestrator = scene.build().context("build scene")?;
    for stroke in orchestrator.strokes_mut() {
        stroke.prepare()?;
    }

    let reports: Vec<StrokeReport<'_>> = orchestrator
        .strokes()
        .iter()
        .enumerate()
        .map(|(index, s)| StrokeReport {
            index,
            points: s.points().len(),
            total_length: s.geometry().map_or(0.0, |g| g.total_length()),
            intersections: s.intersections(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
