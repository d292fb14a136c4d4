// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed 8-vertex box emission shared by walls and slabs
//!
//! Every box is 8 corners and 12 triangles. Triangles are wound for a
//! clockwise-front, left-handed Z-up host: taking the right-handed cross
//! product of a triangle's edges gives a vector pointing into the box.

use crate::mesh::MeshBuffers;
use nalgebra::{Point2, Point3, Vector3};

/// Vertices per emitted box
pub const BOX_VERTEX_COUNT: usize = 8;
/// Indices per emitted box (12 triangles)
pub const BOX_INDEX_COUNT: usize = 36;

/// How texture coordinates are assigned to the 8 corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvLayout {
    /// u alternates per corner, v splits front and back quads
    Elevation,
    /// u alternates per corner, v alternates per corner pair
    Plan,
}

impl UvLayout {
    #[inline]
    pub fn uv(self, corner: usize) -> Point2<f64> {
        let u = (corner % 2) as f64;
        let v = match self {
            UvLayout::Elevation => (corner / 4) as f64,
            UvLayout::Plan => ((corner / 2) % 2) as f64,
        };
        Point2::new(u, v)
    }
}

/// Corner ordering and triangle pattern for one kind of box
#[derive(Debug, Clone, Copy)]
pub struct BoxTopology {
    pub triangles: [u32; BOX_INDEX_COUNT],
    pub uv_layout: UvLayout,
}

/// Wall span: corners 0-3 on the front quad, 4-7 on the back quad, each
/// quad ordered (start, bottom), (end, bottom), (end, top), (start, top)
pub const WALL: BoxTopology = BoxTopology {
    triangles: [
        0, 2, 1, 0, 3, 2, // front
        4, 5, 6, 4, 6, 7, // back
        4, 7, 3, 4, 3, 0, // left
        1, 2, 6, 1, 6, 5, // right
        4, 0, 1, 4, 1, 5, // bottom
        3, 7, 6, 3, 6, 2, // top
    ],
    uv_layout: UvLayout::Elevation,
};

/// Floor slab: corners 0-3 on the walking surface at z = 0, 4-7 below
pub const FLOOR: BoxTopology = BoxTopology {
    triangles: [
        0, 2, 1, 0, 3, 2, // top
        4, 5, 6, 4, 6, 7, // bottom
        0, 1, 5, 0, 5, 4, // front
        2, 3, 7, 2, 7, 6, // back
        3, 0, 4, 3, 4, 7, // left
        1, 2, 6, 1, 6, 5, // right
    ],
    uv_layout: UvLayout::Plan,
};

/// Ceiling slab: corners 0-3 on the visible underside at z = 0, 4-7 above.
///
/// The z = 0 cap is wound opposite to [`FLOOR`]'s so it faces down.
pub const CEILING: BoxTopology = BoxTopology {
    triangles: [
        0, 1, 2, 0, 2, 3, // bottom
        4, 6, 5, 4, 7, 6, // top
        0, 5, 1, 0, 4, 5, // front
        2, 6, 3, 3, 6, 7, // back
        3, 7, 0, 0, 7, 4, // left
        1, 5, 2, 2, 5, 6, // right
    ],
    uv_layout: UvLayout::Plan,
};

/// Append one closed box to `buffers`.
///
/// All corners share `normal`. Local indices are rebased on the vertex count
/// before the call, so repeated calls build one multi-box mesh.
pub fn emit_box(
    buffers: &mut MeshBuffers,
    corners: &[Point3<f64>; BOX_VERTEX_COUNT],
    topology: &BoxTopology,
    normal: Vector3<f64>,
) {
    let start_index = buffers.vertex_count() as u32;

    for (i, corner) in corners.iter().enumerate() {
        buffers.add_vertex(*corner, normal, topology.uv_layout.uv(i));
    }

    for tri in topology.triangles.chunks_exact(3) {
        buffers.add_triangle(
            start_index + tri[0],
            start_index + tri[1],
            start_index + tri[2],
        );
    }
}
