//! Terrain tiler.
//!
//! Reads a height grid document, tiles it into overlapping slices and
//! writes a JSON report with the geography of every slice and the trails
//! that fall on the grid.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use map_data::TilingConfig;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use terrain_tiler::{build_report, colour_hex_map, default_regions, load_trails, GridDocument};

#[derive(Parser, Debug)]
#[command(name = "terrain-tiler")]
#[command(about = "Tile a height grid into display-ready slices")]
struct Args {
    /// Grid document (JSON with metadata and rows)
    grid: PathBuf,

    /// Trail and point-of-interest document to place on the grid
    #[arg(short, long)]
    trails: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the row-major colour map (hex strings) here
    #[arg(long)]
    colours: Option<PathBuf>,

    /// Slice side length in samples (default from TERRAIN_SLICE_SIZE)
    #[arg(long)]
    slice_size: Option<usize>,

    /// Level of detail, 0-6 (default from TERRAIN_LEVEL_OF_DETAIL)
    #[arg(long)]
    lod: Option<usize>,

    /// Tile without sharing edge samples between neighbours
    #[arg(long)]
    no_overlap: bool,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "TERRAIN_LOG_JSON")]
    log_json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing; stdout carries the report
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    let mut config = TilingConfig::from_env();
    if let Some(size) = args.slice_size {
        config.slice_size = size;
    }
    if let Some(lod) = args.lod {
        config.level_of_detail = lod;
    }
    if args.no_overlap {
        config.slice_overlap = false;
    }
    config.validate().context("Invalid tiling configuration")?;

    info!(?config, grid = %args.grid.display(), "Starting terrain tiler");

    let grid = GridDocument::load(&args.grid)
        .and_then(GridDocument::into_map_data)
        .with_context(|| format!("Failed to load grid {}", args.grid.display()))?;

    let trails = match &args.trails {
        Some(path) => Some(
            load_trails(path)
                .with_context(|| format!("Failed to load trails {}", path.display()))?,
        ),
        None => None,
    };

    let report = build_report(&grid, &config, trails.as_ref())?;
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote tiling report");
        }
        None => println!("{}", json),
    }

    if let Some(path) = &args.colours {
        let colours = colour_hex_map(&grid, &default_regions(), config.region_smoothing);
        fs::write(path, serde_json::to_string(&colours)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), cells = colours.len(), "Wrote colour map");
    }

    Ok(())
}
