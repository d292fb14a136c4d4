// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: build floor, ceiling and wall meshes from a floor plan
//!
//! Reads a floor plan JSON document (or uses the built-in sample layout)
//! and writes one Wavefront OBJ file per generated asset.
//!
//! Usage:
//!   floorplan-to-mesh [--plan plan.json] [--output floorplan_assets] [options]

use anyhow::{Context, Result};
use clap::Parser;
use floorplan_builder::{
    build_structure, BuildConfig, FloorPlanSource, JsonFloorPlan, NamePolicy, ObjDirectorySink,
    SampleFloorPlan,
};
use floorplan_geometry::OpeningPlacement;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "floorplan-to-mesh")]
#[command(about = "Build floor, ceiling and wall meshes from a floor plan")]
#[command(version)]
struct Cli {
    /// Floor plan JSON file (built-in sample layout when omitted)
    #[arg(short, long)]
    plan: Option<PathBuf>,

    /// Output directory for OBJ assets
    #[arg(short, long, default_value = "floorplan_assets")]
    output: PathBuf,

    /// Wall height in centimetres
    #[arg(long)]
    wall_height: Option<f64>,

    /// Door cut height in centimetres
    #[arg(long)]
    door_height: Option<f64>,

    /// Window cut height in centimetres
    #[arg(long)]
    window_height: Option<f64>,

    /// Wall thickness in centimetres
    #[arg(long)]
    wall_thickness: Option<f64>,

    /// Drawing units to centimetres
    #[arg(long)]
    scale_factor: Option<f64>,

    /// Opening placement: centered or along-wall
    #[arg(long)]
    placement: Option<OpeningPlacement>,

    /// Replace existing assets instead of versioning repeated names
    #[arg(long)]
    overwrite: bool,

    /// Print the analysed floor plan as JSON and exit without building
    #[arg(long)]
    dump_plan: bool,
}

impl Cli {
    /// Environment configuration with command line overrides applied
    fn config(&self) -> BuildConfig {
        self.apply_overrides(BuildConfig::from_env())
    }

    fn apply_overrides(&self, mut config: BuildConfig) -> BuildConfig {
        if let Some(v) = self.wall_height {
            config.wall_height = v;
        }
        if let Some(v) = self.door_height {
            config.door_height = v;
        }
        if let Some(v) = self.window_height {
            config.window_height = v;
        }
        if let Some(v) = self.wall_thickness {
            config.wall_thickness = v;
        }
        if let Some(v) = self.scale_factor {
            config.scale_factor = v;
        }
        if let Some(v) = self.placement {
            config.placement = v;
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,floorplan_builder=info,floorplan_geometry=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate().context("invalid build configuration")?;

    tracing::info!(
        wall_height = config.wall_height,
        door_height = config.door_height,
        window_height = config.window_height,
        wall_thickness = config.wall_thickness,
        scale_factor = config.scale_factor,
        placement = ?config.placement,
        "Starting floor plan build"
    );

    let source: Box<dyn FloorPlanSource> = match &cli.plan {
        Some(path) => Box::new(JsonFloorPlan::new(path)),
        None => Box::new(SampleFloorPlan::new(1024, 768)),
    };
    let plan = source
        .analyze(&config)
        .context("failed to analyze floor plan")?;

    if cli.dump_plan {
        println!("{}", plan.to_json()?);
        return Ok(());
    }

    let policy = if cli.overwrite {
        NamePolicy::Overwrite
    } else {
        NamePolicy::Version
    };
    let mut sink = ObjDirectorySink::new(&cli.output, policy)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;

    let report = build_structure(&plan, &config, &mut sink).context("structure build failed")?;

    println!("=== Floor Plan Build ===");
    println!("  Rooms:    {}", plan.rooms.len());
    println!("  Floors:   {}", report.floors);
    println!("  Ceilings: {}", report.ceilings);
    println!("  Walls:    {}", report.walls);
    if report.skipped_rooms > 0 {
        println!("  Skipped:  {} room(s) with too few boundary points", report.skipped_rooms);
    }
    println!(
        "  Wrote {} asset(s) to {}",
        report.total_assets(),
        sink.dir().display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "floorplan-to-mesh",
            "--scale-factor",
            "2.54",
            "--wall-height",
            "280",
            "--placement",
            "along-wall",
        ]);
        let config = cli.apply_overrides(BuildConfig::default());

        assert_eq!(config.scale_factor, 2.54);
        assert_eq!(config.wall_height, 280.0);
        assert_eq!(config.placement, OpeningPlacement::AlongWall);
        assert_eq!(config.door_height, BuildConfig::default().door_height);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["floorplan-to-mesh"]);
        let base = BuildConfig {
            scale_factor: 12.0,
            ..Default::default()
        };
        assert_eq!(cli.apply_overrides(base.clone()), base);
        assert_eq!(cli.output, PathBuf::from("floorplan_assets"));
    }
}
