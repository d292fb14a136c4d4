// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor and ceiling slabs sized from a room's bounding box

use crate::box_mesh::{emit_box, BoxTopology, BOX_INDEX_COUNT, BOX_VERTEX_COUNT, CEILING, FLOOR};
use crate::error::{Error, Result};
use crate::mesh::MeshBuffers;
use crate::types::MeshAsset;
use nalgebra::{Point2, Point3, Vector3};

/// Floor slab thickness, extruded below z = 0
pub const FLOOR_THICKNESS: f64 = 20.0;
/// Ceiling slab thickness, extruded above z = 0
pub const CEILING_THICKNESS: f64 = 15.0;

/// Width (x extent) and length (y extent) of a boundary's bounding box.
///
/// Only the point count is validated; the polygon may be concave or even
/// self-intersecting.
pub fn footprint_extent(boundary: &[Point2<f64>]) -> Result<(f64, f64)> {
    if boundary.len() < 3 {
        return Err(Error::InsufficientBoundary(boundary.len()));
    }

    let (min_x, max_x, min_y, max_y) = boundary.iter().fold(
        (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
        |(min_x, max_x, min_y, max_y), p| {
            (min_x.min(p.x), max_x.max(p.x), min_y.min(p.y), max_y.max(p.y))
        },
    );

    Ok((max_x - min_x, max_y - min_y))
}

/// Generate a floor slab under a room. `z_height` is carried on the asset
/// for placement and does not move the vertices.
pub fn generate_floor_mesh(boundary: &[Point2<f64>], z_height: f64) -> Result<MeshAsset> {
    let (width, length) = footprint_extent(boundary)?;

    let buffers = slab_buffers(width, length, -FLOOR_THICKNESS, &FLOOR, Vector3::z());

    tracing::debug!(width, length, thickness = FLOOR_THICKNESS, "generated floor slab");

    Ok(MeshAsset::new(
        format!("Floor_{:.0}_x_{:.0}", width, length),
        z_height,
        buffers,
    ))
}

/// Generate a ceiling slab over a room; its underside at z = 0 is the
/// visible face.
pub fn generate_ceiling_mesh(boundary: &[Point2<f64>], z_height: f64) -> Result<MeshAsset> {
    let (width, length) = footprint_extent(boundary)?;

    let buffers = slab_buffers(width, length, CEILING_THICKNESS, &CEILING, -Vector3::z());

    tracing::debug!(width, length, thickness = CEILING_THICKNESS, "generated ceiling slab");

    Ok(MeshAsset::new(
        format!("Ceiling_{:.0}_x_{:.0}", width, length),
        z_height,
        buffers,
    ))
}

/// One slab box centred on the origin: corners 0-3 at z = 0 and 4-7 at
/// `far_z`, each quad counter-clockwise seen from +z
fn slab_buffers(
    width: f64,
    length: f64,
    far_z: f64,
    topology: &BoxTopology,
    normal: Vector3<f64>,
) -> MeshBuffers {
    let half_width = width * 0.5;
    let half_length = length * 0.5;

    let corners = [
        Point3::new(-half_width, -half_length, 0.0),
        Point3::new(half_width, -half_length, 0.0),
        Point3::new(half_width, half_length, 0.0),
        Point3::new(-half_width, half_length, 0.0),
        Point3::new(-half_width, -half_length, far_z),
        Point3::new(half_width, -half_length, far_z),
        Point3::new(half_width, half_length, far_z),
        Point3::new(-half_width, half_length, far_z),
    ];

    let mut buffers = MeshBuffers::with_capacity(BOX_VERTEX_COUNT, BOX_INDEX_COUNT);
    emit_box(&mut buffers, &corners, topology, normal);
    buffers
}
