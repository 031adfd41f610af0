//! geo2dxf - Convert extracted vector geometry to a DXF file
//!
//! Reads a JSON file of extracted primitives (as produced by an upstream
//! PDF extraction stage) and writes a DXF drawing.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use dxforge::{ConversionConfig, GeometryObject, Pipeline};
use std::fs;
use std::path::PathBuf;

/// Convert extracted vector geometry (JSON) into a DXF drawing.
#[derive(Parser, Debug)]
#[command(name = "geo2dxf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the extracted-geometry JSON file
    input: PathBuf,

    /// Path of the DXF file to write
    output: PathBuf,

    /// Optional configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fit the drawing's longest dimension to 1000 units
    #[arg(long, action = ArgAction::SetTrue)]
    auto_scale: bool,

    /// Route everything to layer "0" instead of per-category layers
    #[arg(long, action = ArgAction::SetTrue)]
    no_layers: bool,

    /// Use debug logging level
    #[arg(short, long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut config = match &args.config {
        Some(path) => ConversionConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ConversionConfig::default(),
    };
    if args.auto_scale {
        config.auto_scale = true;
    }
    if args.no_layers {
        config.create_layers = false;
    }

    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let geometries: Vec<GeometryObject> =
        serde_json::from_str(&data).context("failed to parse geometry JSON")?;

    let pipeline = Pipeline::new(config);
    let report = pipeline
        .run(&geometries, &args.output)
        .context("conversion failed")?;

    println!(
        "Wrote {} entities to {} ({} skipped)",
        report.converted,
        report.output_path.display(),
        report.skipped
    );
    for (entity_type, count) in &report.document.entity_counts {
        println!("  {:10} {}", entity_type, count);
    }
    if !report.diagnostics.is_empty() {
        println!("Diagnostics:");
        for diagnostic in &report.diagnostics {
            println!("  {}", diagnostic);
        }
    }

    Ok(())
}
