//! Contour plot renderer.
//!
//! Reads a scalar field from a JSON file and writes a filled contour plot:
//! - Threshold ladder over the field's value range (or `minZ`/`maxZ`)
//! - Grayscale bands painted lowest level first
//! - Optional contour outlines on top
//! - PNG output, indexed when the plot has few colors

mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use renderer::{render_plot, LevelSpec, PlotConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use input::FieldFile;

/// Ladder size selected by `--more`.
const MORE_LEVELS: usize = 16;

#[derive(Parser, Debug)]
#[command(name = "contour-plot")]
#[command(about = "Render a filled contour plot of a gridded scalar field")]
struct Args {
    /// Field file (JSON with a `data` array of rows)
    input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "plot.png")]
    output: PathBuf,

    /// Plot configuration file (JSON)
    #[arg(short, long, env = "CONTOUR_PLOT_CONFIG")]
    config: Option<PathBuf>,

    /// Number of threshold levels (overrides the configured levels)
    #[arg(short = 'n', long)]
    levels: Option<usize>,

    /// Use the denser 16-level ladder
    #[arg(long, conflicts_with = "levels")]
    more: bool,

    /// Draw contour lines over the filled bands
    #[arg(long)]
    contours: bool,

    /// Pixels per grid step
    #[arg(long)]
    scale: Option<f64>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let field = FieldFile::load(&args.input)?;
    let grid = field.grid()?;
    info!(
        input = %args.input.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "Loaded field"
    );

    let mut config = match &args.config {
        Some(path) => PlotConfig::from_file(path)
            .with_context(|| format!("Failed to load plot config {}", path.display()))?,
        None => PlotConfig::default(),
    };
    apply_overrides(&mut config, args);
    if config.range.is_none() {
        config.range = field.range(&grid);
    }

    let plot = render_plot(&grid, &config).context("Failed to render plot")?;
    let png = plot.to_png().context("Failed to encode PNG")?;
    std::fs::write(&args.output, &png)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        output = %args.output.display(),
        width = plot.width,
        height = plot.height,
        levels = plot.thresholds.len(),
        bytes = png.len(),
        "Wrote contour plot"
    );

    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(config: &mut PlotConfig, args: &Args) {
    if let Some(count) = args.levels {
        config.levels = LevelSpec::Ladder { count };
    } else if args.more {
        config.levels = LevelSpec::Ladder { count: MORE_LEVELS };
    }
    if args.contours {
        config.contours = true;
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
}
