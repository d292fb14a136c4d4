// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for floor plan building.

use std::path::PathBuf;

/// Result type alias for building operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while analysing, building or materializing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A build parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A floor plan file could not be read or written.
    #[error("floor plan file {path}: {source}")]
    PlanFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A floor plan document is not valid JSON for the model.
    #[error("malformed floor plan: {0}")]
    MalformedPlan(#[from] serde_json::Error),

    /// Mesh generation rejected its input.
    #[error("geometry: {0}")]
    Geometry(#[from] floorplan_geometry::Error),

    /// The sink was handed a mesh with no vertices or triangles.
    #[error("no vertices or triangles to create mesh asset {0}")]
    EmptyMesh(String),

    /// Writing an asset failed.
    #[error("failed to write asset {name}: {source}")]
    AssetWrite {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
