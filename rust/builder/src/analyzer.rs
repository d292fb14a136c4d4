// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan sources
//!
//! Image analysis is not implemented here. A source is anything that can
//! hand the builder a [`FloorPlan`]: the built-in sample layout or a JSON
//! document produced elsewhere.

use crate::config::BuildConfig;
use crate::error::Result;
use crate::types::{FloorPlan, PlanOpening, Point2D, Room, WallDefinition};
use floorplan_geometry::{Opening, OpeningKind};
use std::path::PathBuf;

/// Produces the floor plan model consumed by the structure builder
pub trait FloorPlanSource {
    fn analyze(&self, config: &BuildConfig) -> Result<FloorPlan>;
}

/// Fixed sample layout: kitchen, master bedroom, living and dining rooms
/// with their connecting walls, in centimetres
#[derive(Debug, Clone, Default)]
pub struct SampleFloorPlan {
    pub image_width: u32,
    pub image_height: u32,
}

impl SampleFloorPlan {
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
        }
    }
}

impl FloorPlanSource for SampleFloorPlan {
    fn analyze(&self, config: &BuildConfig) -> Result<FloorPlan> {
        tracing::info!(
            width = self.image_width,
            height = self.image_height,
            scale_factor = config.scale_factor,
            "analyzing floor plan from sample layout"
        );

        let plan = FloorPlan {
            rooms: sample_rooms(),
            openings: sample_openings(),
            wall_points: sample_wall_points(),
            walls: sample_wall_layout(),
            image_width: self.image_width,
            image_height: self.image_height,
        };

        tracing::info!(
            rooms = plan.rooms.len(),
            openings = plan.openings.len(),
            wall_points = plan.wall_points.len(),
            walls = plan.walls.len(),
            "floor plan analyzed"
        );
        Ok(plan)
    }
}

/// Floor plan read from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFloorPlan {
    pub path: PathBuf,
}

impl JsonFloorPlan {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FloorPlanSource for JsonFloorPlan {
    fn analyze(&self, _config: &BuildConfig) -> Result<FloorPlan> {
        let plan = FloorPlan::load(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            rooms = plan.rooms.len(),
            walls = plan.walls.len(),
            "loaded floor plan"
        );
        Ok(plan)
    }
}

fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<Point2D> {
    vec![
        Point2D::new(min_x, min_y),
        Point2D::new(max_x, min_y),
        Point2D::new(max_x, max_y),
        Point2D::new(min_x, max_y),
    ]
}

fn room(name: &str, center: (f64, f64), dimensions: (f64, f64), boundary: Vec<Point2D>) -> Room {
    Room {
        name: name.to_string(),
        boundary,
        center: Point2D::new(center.0, center.1),
        dimensions: Point2D::new(dimensions.0, dimensions.1),
    }
}

fn sample_rooms() -> Vec<Room> {
    vec![
        // 7'-5" x 8'-0"
        room("KITCHEN", (200.0, 150.0), (228.6, 243.84), rect(100.0, 50.0, 300.0, 250.0)),
        // 11'-0" x 12'-0"
        room("MASTER BEDROOM", (650.0, 200.0), (335.28, 365.76), rect(500.0, 50.0, 800.0, 350.0)),
        // 11'-7.5" x 10'-9"
        room("LIVING", (300.0, 600.0), (356.87, 327.66), rect(100.0, 450.0, 500.0, 750.0)),
        // 11'-7.5" x 8'-6"
        room("DINING", (300.0, 350.0), (356.87, 259.08), rect(100.0, 250.0, 500.0, 450.0)),
    ]
}

fn sample_openings() -> Vec<PlanOpening> {
    let opening = |kind, x, y, width, depth, rotation| PlanOpening {
        kind,
        position: Point2D::new(x, y),
        size: Point2D::new(width, depth),
        rotation,
    };
    vec![
        // Kitchen to dining
        opening(OpeningKind::Door, 200.0, 250.0, 90.0, 20.0, 0.0),
        // Into the master bedroom
        opening(OpeningKind::Door, 500.0, 200.0, 90.0, 20.0, 90.0),
        // Master bedroom window
        opening(OpeningKind::Window, 650.0, 50.0, 120.0, 15.0, 0.0),
    ]
}

fn sample_wall_points() -> Vec<Point2D> {
    vec![
        // Perimeter
        Point2D::new(100.0, 50.0),
        Point2D::new(800.0, 50.0),
        Point2D::new(800.0, 750.0),
        Point2D::new(100.0, 750.0),
        // Interior
        Point2D::new(300.0, 50.0),
        Point2D::new(500.0, 50.0),
        Point2D::new(500.0, 250.0),
        Point2D::new(100.0, 250.0),
        Point2D::new(500.0, 450.0),
    ]
}

/// Wall layout of the sample plan; offsets are measured from each wall's
/// start
pub fn sample_wall_layout() -> Vec<WallDefinition> {
    vec![
        WallDefinition::new("Kitchen_Dining_Wall", 356.87).with_opening(Opening::door(100.0, 90.0)),
        WallDefinition::new("MasterBedroom_Exterior_Wall", 365.76)
            .with_opening(Opening::window(180.0, 120.0)),
        // Wide cased opening, built like a door
        WallDefinition::new("Living_Dining_Wall", 356.87)
            .with_opening(Opening::door(150.0, 120.0)),
        WallDefinition::new("Toilet_Wall", 243.84).with_opening(Opening::door(80.0, 75.0)),
        WallDefinition::new("BedRoom_Exterior_Wall", 365.76)
            .with_opening(Opening::window(180.0, 100.0)),
        WallDefinition::new("Exterior_Wall_Front", 800.0),
        WallDefinition::new("Exterior_Wall_Back", 800.0),
        WallDefinition::new("Exterior_Wall_Left", 700.0),
        WallDefinition::new("Exterior_Wall_Right", 700.0),
    ]
}
