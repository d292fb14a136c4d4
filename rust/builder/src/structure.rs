// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structure builder: turns a floor plan into floor, ceiling and wall assets

use crate::config::BuildConfig;
use crate::error::Result;
use crate::sink::AssetSink;
use crate::types::{FloorPlan, Room, WallDefinition};
use floorplan_geometry::{
    generate_ceiling_mesh, generate_floor_mesh, generate_wall_mesh_with, MeshAsset, Point2,
};
use rayon::prelude::*;
use serde::Serialize;

/// What a build produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub floors: usize,
    pub ceilings: usize,
    pub walls: usize,
    /// Rooms whose boundary was too small to build slabs from
    pub skipped_rooms: usize,
    /// Final asset names, in materialization order
    pub assets: Vec<String>,
}

impl BuildReport {
    pub fn total_assets(&self) -> usize {
        self.assets.len()
    }
}

/// Floor and ceiling for one room, or nothing if the room was skipped
type RoomSlabs = Option<(MeshAsset, MeshAsset)>;

fn room_slabs(room: &Room, config: &BuildConfig) -> RoomSlabs {
    let boundary = room.boundary_points();
    let slabs = generate_floor_mesh(&boundary, 0.0).and_then(|floor| {
        generate_ceiling_mesh(&boundary, config.wall_height).map(|ceiling| (floor, ceiling))
    });

    match slabs {
        Ok(slabs) => Some(slabs),
        Err(e) => {
            tracing::warn!(room = %room.name, error = %e, "skipping room");
            None
        }
    }
}

fn wall_asset(wall: &WallDefinition, config: &BuildConfig) -> MeshAsset {
    generate_wall_mesh_with(
        Point2::origin(),
        Point2::new(wall.length, 0.0),
        config.wall_height,
        config.wall_thickness,
        &wall.openings,
        config.opening_heights(),
        config.placement,
    )
}

/// Build every room slab and wall of `plan` into `sink`.
///
/// Meshes are generated in parallel; the sink receives them one at a time in
/// plan order (each room's floor then ceiling, then the walls). The first
/// sink failure aborts the build.
pub fn build_structure(
    plan: &FloorPlan,
    config: &BuildConfig,
    sink: &mut dyn AssetSink,
) -> Result<BuildReport> {
    config.validate()?;

    let start = std::time::Instant::now();

    let (rooms, walls): (Vec<RoomSlabs>, Vec<MeshAsset>) = rayon::join(
        || plan.rooms.par_iter().map(|room| room_slabs(room, config)).collect(),
        || plan.walls.par_iter().map(|wall| wall_asset(wall, config)).collect(),
    );

    tracing::debug!(
        rooms = rooms.len(),
        walls = walls.len(),
        generate_ms = start.elapsed().as_millis(),
        "generated structure meshes"
    );

    let mut report = BuildReport::default();

    for slabs in rooms {
        let Some((floor, ceiling)) = slabs else {
            report.skipped_rooms += 1;
            continue;
        };
        report.assets.push(sink.materialize(floor)?);
        report.floors += 1;
        report.assets.push(sink.materialize(ceiling)?);
        report.ceilings += 1;
    }

    for (definition, wall) in plan.walls.iter().zip(walls) {
        let name = sink.materialize(wall)?;
        tracing::debug!(wall = %definition.name, asset = %name, "materialized wall");
        report.assets.push(name);
        report.walls += 1;
    }

    tracing::info!(
        floors = report.floors,
        ceilings = report.ceilings,
        walls = report.walls,
        skipped_rooms = report.skipped_rooms,
        total_ms = start.elapsed().as_millis(),
        "structure built"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sink::{MemorySink, NamePolicy};
    use crate::types::Point2D;
    use floorplan_geometry::Opening;

    fn square_room(name: &str, size: f64) -> Room {
        Room {
            name: name.into(),
            boundary: vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(size, 0.0),
                Point2D::new(size, size),
                Point2D::new(0.0, size),
            ],
            center: Point2D::new(size / 2.0, size / 2.0),
            dimensions: Point2D::new(size, size),
        }
    }

    #[test]
    fn test_room_order_and_elevations() {
        let plan = FloorPlan {
            rooms: vec![square_room("A", 200.0), square_room("B", 300.0)],
            ..Default::default()
        };
        let mut sink = MemorySink::default();
        let report = build_structure(&plan, &BuildConfig::default(), &mut sink).unwrap();

        assert_eq!(
            report.assets,
            vec!["Floor_200_x_200", "Ceiling_200_x_200", "Floor_300_x_300", "Ceiling_300_x_300"]
        );
        assert_eq!(sink.get("Floor_300_x_300").unwrap().elevation, 0.0);
        assert_eq!(sink.get("Ceiling_300_x_300").unwrap().elevation, 300.0);
    }

    #[test]
    fn test_degenerate_room_is_skipped() {
        let mut sliver = square_room("SLIVER", 100.0);
        sliver.boundary.truncate(2);
        let plan = FloorPlan {
            rooms: vec![sliver, square_room("A", 200.0)],
            ..Default::default()
        };
        let mut sink = MemorySink::default();
        let report = build_structure(&plan, &BuildConfig::default(), &mut sink).unwrap();

        assert_eq!(report.skipped_rooms, 1);
        assert_eq!(report.floors, 1);
        assert_eq!(report.ceilings, 1);
    }

    #[test]
    fn test_walls_use_config() {
        let plan = FloorPlan {
            walls: vec![WallDefinition::new("W", 400.0).with_opening(Opening::door(200.0, 90.0))],
            ..Default::default()
        };
        let config = BuildConfig {
            wall_height: 280.0,
            ..Default::default()
        };
        let mut sink = MemorySink::new(NamePolicy::Version);
        let report = build_structure(&plan, &config, &mut sink).unwrap();

        assert_eq!(report.walls, 1);
        assert_eq!(report.assets, vec!["Wall_400_x_280"]);
        let wall = &sink.assets()[0];
        // Left, right and above-door spans
        assert_eq!(wall.buffers.vertex_count(), 24);
        let (min, max) = wall.buffers.bounds();
        assert_eq!((min.x, max.x), (-200.0, 200.0));
        assert_eq!((min.y, max.y), (-5.0, 5.0));
        assert_eq!(max.z, 280.0);
    }

    #[test]
    fn test_invalid_config_fails_before_sink() {
        let plan = FloorPlan {
            rooms: vec![square_room("A", 200.0)],
            ..Default::default()
        };
        let config = BuildConfig {
            wall_height: -1.0,
            ..Default::default()
        };
        let mut sink = MemorySink::default();
        let err = build_structure(&plan, &config, &mut sink).unwrap_err();

        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(sink.assets().is_empty());
    }

    struct FailingSink;

    impl AssetSink for FailingSink {
        fn materialize(&mut self, asset: MeshAsset) -> Result<String> {
            Err(Error::EmptyMesh(asset.name))
        }
    }

    #[test]
    fn test_sink_failure_aborts() {
        let plan = FloorPlan {
            rooms: vec![square_room("A", 200.0)],
            ..Default::default()
        };
        let err = build_structure(&plan, &BuildConfig::default(), &mut FailingSink).unwrap_err();
        assert!(matches!(err, Error::EmptyMesh(ref name) if name == "Floor_200_x_200"));
    }
}
