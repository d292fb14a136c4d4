// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall segmentation around openings and wall mesh assembly
//!
//! A wall lives in its own local frame: x runs along the wall centred on
//! the midpoint, y through the thickness, z up from the floor.

use crate::box_mesh::{emit_box, BOX_INDEX_COUNT, BOX_VERTEX_COUNT, WALL};
use crate::mesh::MeshBuffers;
use crate::types::{MeshAsset, Opening};
use nalgebra::{Point2, Point3, Vector3};
use smallvec::SmallVec;

/// Rectangular piece of a wall elevation that becomes one solid box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSpan {
    pub start_x: f64,
    pub end_x: f64,
    pub start_z: f64,
    pub end_z: f64,
}

impl WallSpan {
    pub fn new(start_x: f64, end_x: f64, start_z: f64, end_z: f64) -> Self {
        Self {
            start_x,
            end_x,
            start_z,
            end_z,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.end_x - self.start_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.end_z - self.start_z
    }

    /// Box corners at +/- half thickness, in [`WALL`] order
    pub fn corners(&self, thickness: f64) -> [Point3<f64>; BOX_VERTEX_COUNT] {
        let half = thickness * 0.5;
        [
            Point3::new(self.start_x, -half, self.start_z),
            Point3::new(self.end_x, -half, self.start_z),
            Point3::new(self.end_x, -half, self.end_z),
            Point3::new(self.start_x, -half, self.end_z),
            Point3::new(self.start_x, half, self.start_z),
            Point3::new(self.end_x, half, self.start_z),
            Point3::new(self.end_x, half, self.end_z),
            Point3::new(self.start_x, half, self.end_z),
        ]
    }
}

/// Span list for one wall; most walls need no more than a handful
pub type WallSpans = SmallVec<[WallSpan; 8]>;

/// Where along the wall each opening is centred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OpeningPlacement {
    /// Every opening sits on the wall midpoint; openings are walked in the
    /// order given. Several openings on one wall will overlap.
    #[default]
    Centered,
    /// Each opening is centred at its own offset from the wall start, and
    /// openings are walked in ascending offset order.
    AlongWall,
}

impl std::str::FromStr for OpeningPlacement {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "centered" | "centred" => Ok(OpeningPlacement::Centered),
            "along-wall" | "along_wall" => Ok(OpeningPlacement::AlongWall),
            other => Err(format!("unknown opening placement: {}", other)),
        }
    }
}

/// Cut heights for doors and windows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningHeights {
    pub door: f64,
    pub window: f64,
}

/// Split a wall elevation into solid spans that leave the openings empty.
///
/// The wall covers `[-length/2, length/2] x [0, height]`. Doors reach the
/// floor and leave a lintel span above; windows are vertically centred and
/// leave a sill span below and a lintel span above. Spans of zero or
/// negative extent are never produced past the first opening: an opening
/// wider than what is left of the wall simply swallows the remainder.
///
/// With [`OpeningPlacement::AlongWall`] openings are walked by start
/// position and clipped to `[current_x, length/2]`, so spans never overlap
/// or leave the wall even when openings overlap each other or the wall ends.
pub fn segment_wall(
    length: f64,
    height: f64,
    openings: &[Opening],
    heights: OpeningHeights,
    placement: OpeningPlacement,
) -> WallSpans {
    let half_length = length * 0.5;
    let mut spans = WallSpans::new();

    if openings.is_empty() {
        spans.push(WallSpan::new(-half_length, half_length, 0.0, height));
        return spans;
    }

    let mut ordered: SmallVec<[&Opening; 8]> = openings.iter().collect();
    if placement == OpeningPlacement::AlongWall {
        ordered.sort_by(|a, b| {
            let a_start = a.offset - a.width * 0.5;
            let b_start = b.offset - b.width * 0.5;
            a_start.total_cmp(&b_start)
        });
    }

    let mut current_x = -half_length;

    for opening in ordered {
        let (opening_start, opening_end) = match placement {
            OpeningPlacement::Centered => (-opening.width * 0.5, opening.width * 0.5),
            OpeningPlacement::AlongWall => {
                // Clip to the wall and to what earlier openings left over
                let center_x = opening.offset - half_length;
                let start = (center_x - opening.width * 0.5).max(current_x);
                let end = (center_x + opening.width * 0.5).min(half_length);
                if end <= start {
                    continue;
                }
                (start, end)
            }
        };

        if opening_start > current_x {
            spans.push(WallSpan::new(current_x, opening_start, 0.0, height));
        }

        if opening.is_door() {
            if heights.door < height {
                spans.push(WallSpan::new(opening_start, opening_end, heights.door, height));
            }
        } else {
            let window_bottom = (height - heights.window) * 0.5;
            let window_top = window_bottom + heights.window;

            if window_bottom > 0.0 {
                spans.push(WallSpan::new(opening_start, opening_end, 0.0, window_bottom));
            }
            if window_top < height {
                spans.push(WallSpan::new(opening_start, opening_end, window_top, height));
            }
        }

        current_x = opening_end;
    }

    if current_x < half_length {
        spans.push(WallSpan::new(current_x, half_length, 0.0, height));
    }

    spans
}

/// Generate a wall between two plan points with openings centred on the
/// wall midpoint
pub fn generate_wall_mesh(
    start: Point2<f64>,
    end: Point2<f64>,
    height: f64,
    thickness: f64,
    openings: &[Opening],
    door_height: f64,
    window_height: f64,
) -> MeshAsset {
    generate_wall_mesh_with(
        start,
        end,
        height,
        thickness,
        openings,
        OpeningHeights {
            door: door_height,
            window: window_height,
        },
        OpeningPlacement::Centered,
    )
}

/// Generate a wall with an explicit opening placement policy.
///
/// Only the distance between `start` and `end` matters: the mesh is built
/// in the wall's local frame and placing it is up to the caller.
pub fn generate_wall_mesh_with(
    start: Point2<f64>,
    end: Point2<f64>,
    height: f64,
    thickness: f64,
    openings: &[Opening],
    heights: OpeningHeights,
    placement: OpeningPlacement,
) -> MeshAsset {
    let length = nalgebra::distance(&start, &end);
    let spans = segment_wall(length, height, openings, heights, placement);

    let mut buffers = MeshBuffers::with_capacity(
        spans.len() * BOX_VERTEX_COUNT,
        spans.len() * BOX_INDEX_COUNT,
    );
    // TODO: switch to per-face normals once sinks stop relying on 8-vertex boxes
    let normal = Vector3::z();
    for span in &spans {
        emit_box(&mut buffers, &span.corners(thickness), &WALL, normal);
    }

    tracing::debug!(
        length,
        height,
        thickness,
        openings = openings.len(),
        spans = spans.len(),
        "generated wall mesh"
    );

    MeshAsset::new(wall_name(length, height), 0.0, buffers)
}

/// Deterministic asset name for a wall
pub fn wall_name(length: f64, height: f64) -> String {
    format!("Wall_{:.0}_x_{:.0}", length, height)
}
