// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan mesh generation
//!
//! Turns abstract wall, opening and room descriptions into closed box
//! meshes (positions, indices, UVs, normals):
//!
//! - walls are split into spans around door and window openings, one box
//!   per span
//! - floors and ceilings are one slab box sized from the room's bounding box
//!
//! Every entry point is a pure function of its arguments and owns the
//! buffers it returns, so independent calls can run on any thread.
//!
//! ```rust,ignore
//! use floorplan_geometry::{generate_wall_mesh, generate_floor_mesh, Opening, Point2};
//!
//! let wall = generate_wall_mesh(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(356.87, 0.0),
//!     300.0,
//!     10.0,
//!     &[Opening::door(100.0, 90.0)],
//!     244.0,
//!     152.0,
//! );
//! assert_eq!(wall.buffers.vertex_count(), 24);
//! ```

pub mod box_mesh;
pub mod error;
pub mod mesh;
pub mod slab;
pub mod types;
pub mod wall;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use error::{Error, Result};
pub use mesh::MeshBuffers;
pub use slab::{
    footprint_extent, generate_ceiling_mesh, generate_floor_mesh, CEILING_THICKNESS,
    FLOOR_THICKNESS,
};
pub use types::{MeshAsset, Opening, OpeningKind};
pub use wall::{
    generate_wall_mesh, generate_wall_mesh_with, segment_wall, OpeningHeights, OpeningPlacement,
    WallSpan, WallSpans,
};
