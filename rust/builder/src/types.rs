// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan model handed from analysis to the structure builder

use crate::error::{Error, Result};
use floorplan_geometry::{Opening, OpeningKind};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A 2D point (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Room footprint with its label and nominal size
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub name: String,
    /// Ordered boundary polygon, not necessarily convex
    pub boundary: Vec<Point2D>,
    pub center: Point2D,
    /// Nominal width and depth as written on the drawing
    pub dimensions: Point2D,
}

impl Room {
    pub fn boundary_points(&self) -> Vec<Point2<f64>> {
        self.boundary.iter().map(Point2D::to_nalgebra).collect()
    }
}

/// Door or window as located on the plan (not yet assigned to a wall)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanOpening {
    pub kind: OpeningKind,
    pub position: Point2D,
    /// Width and frame depth
    pub size: Point2D,
    /// Rotation in degrees
    pub rotation: f64,
}

/// One straight wall and the openings cut into it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WallDefinition {
    pub name: String,
    pub length: f64,
    /// Ordered as they should be walked along the wall
    #[serde(default)]
    pub openings: Vec<Opening>,
}

impl WallDefinition {
    pub fn new(name: &str, length: f64) -> Self {
        Self {
            name: name.to_string(),
            length,
            openings: Vec::new(),
        }
    }

    pub fn with_opening(mut self, opening: Opening) -> Self {
        self.openings.push(opening);
        self
    }
}

/// Complete analysis result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FloorPlan {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub openings: Vec<PlanOpening>,
    #[serde(default)]
    pub wall_points: Vec<Point2D>,
    #[serde(default)]
    pub walls: Vec<WallDefinition>,
    /// Source image width
    #[serde(default)]
    pub image_width: u32,
    /// Source image height
    #[serde(default)]
    pub image_height: u32,
}

impl FloorPlan {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::PlanFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Number of doors and windows across all wall definitions
    pub fn wall_opening_count(&self) -> usize {
        self.walls.iter().map(|w| w.openings.len()).sum()
    }
}
