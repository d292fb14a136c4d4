// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Floor Plan Builder
//!
//! Turns an analysed floor plan into mesh assets.
//!
//! The pipeline has three seams:
//!
//! - a [`FloorPlanSource`] produces the [`FloorPlan`] model (rooms, plan
//!   openings, wall definitions)
//! - [`build_structure`] generates a floor and a ceiling per room and one
//!   mesh per wall with [`floorplan_geometry`]
//! - an [`AssetSink`] stores each mesh under a collision-free name
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use floorplan_builder::{process_floor_plan, BuildConfig, MemorySink, SampleFloorPlan};
//!
//! let mut sink = MemorySink::default();
//! let report = process_floor_plan(&SampleFloorPlan::default(), &BuildConfig::default(), &mut sink)?;
//! println!("{} walls, {} floors", report.walls, report.floors);
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod sink;
pub mod structure;
pub mod types;

pub use analyzer::{sample_wall_layout, FloorPlanSource, JsonFloorPlan, SampleFloorPlan};
pub use config::BuildConfig;
pub use error::{Error, Result};
pub use sink::{write_obj, AssetSink, MemorySink, NamePolicy, ObjDirectorySink};
pub use structure::{build_structure, BuildReport};
pub use types::{FloorPlan, PlanOpening, Point2D, Room, WallDefinition};

/// Analyse a floor plan and build its structure into `sink`
pub fn process_floor_plan(
    source: &dyn FloorPlanSource,
    config: &BuildConfig,
    sink: &mut dyn AssetSink,
) -> Result<BuildReport> {
    let plan = source.analyze(config)?;
    build_structure(&plan, config, sink)
}
