// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Build parameters, loaded from defaults and environment variables.

use crate::error::{Error, Result};
use floorplan_geometry::{OpeningHeights, OpeningPlacement};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Structure build parameters, in centimetres.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildConfig {
    /// Floor-to-ceiling wall height.
    pub wall_height: f64,
    /// Door cut height, measured from the floor.
    pub door_height: f64,
    /// Window cut height, vertically centred on the wall.
    pub window_height: f64,
    /// Wall thickness.
    pub wall_thickness: f64,
    /// Drawing units to centimetres (feet by default).
    pub scale_factor: f64,
    /// Where openings sit along their wall.
    pub placement: OpeningPlacement,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            wall_height: 300.0,
            door_height: 244.0,
            window_height: 152.0,
            wall_thickness: 10.0,
            scale_factor: 30.48,
            placement: OpeningPlacement::Centered,
        }
    }
}

impl BuildConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            wall_height: env_or("FLOORPLAN_WALL_HEIGHT", defaults.wall_height),
            door_height: env_or("FLOORPLAN_DOOR_HEIGHT", defaults.door_height),
            window_height: env_or("FLOORPLAN_WINDOW_HEIGHT", defaults.window_height),
            wall_thickness: env_or("FLOORPLAN_WALL_THICKNESS", defaults.wall_thickness),
            scale_factor: env_or("FLOORPLAN_SCALE_FACTOR", defaults.scale_factor),
            placement: env_or("FLOORPLAN_PLACEMENT", defaults.placement),
        }
    }

    /// Reject non-positive or non-finite dimensions.
    pub fn validate(&self) -> Result<()> {
        let dimensions = [
            ("wall_height", self.wall_height),
            ("door_height", self.door_height),
            ("window_height", self.window_height),
            ("wall_thickness", self.wall_thickness),
            ("scale_factor", self.scale_factor),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn opening_heights(&self) -> OpeningHeights {
        OpeningHeights {
            door: self.door_height,
            window: self.window_height,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
