// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end build of the sample floor plan

use floorplan_builder::{
    build_structure, process_floor_plan, BuildConfig, FloorPlanSource, MemorySink, NamePolicy,
    ObjDirectorySink, SampleFloorPlan,
};
use floorplan_geometry::OpeningPlacement;

#[test]
fn test_sample_build_counts_and_names() {
    let mut sink = MemorySink::new(NamePolicy::Version);
    let report =
        process_floor_plan(&SampleFloorPlan::default(), &BuildConfig::default(), &mut sink)
            .unwrap();

    assert_eq!(report.floors, 4);
    assert_eq!(report.ceilings, 4);
    assert_eq!(report.walls, 9);
    assert_eq!(report.skipped_rooms, 0);
    assert_eq!(report.total_assets(), 17);

    let expected = [
        "Floor_200_x_200",
        "Ceiling_200_x_200",
        "Floor_300_x_300",
        "Ceiling_300_x_300",
        "Floor_400_x_300",
        "Ceiling_400_x_300",
        "Floor_400_x_200",
        "Ceiling_400_x_200",
        "Wall_357_x_300",
        "Wall_366_x_300",
        "Wall_357_x_300_1",
        "Wall_244_x_300",
        "Wall_366_x_300_1",
        "Wall_800_x_300",
        "Wall_800_x_300_1",
        "Wall_700_x_300",
        "Wall_700_x_300_1",
    ];
    assert_eq!(report.assets, expected);

    let names: Vec<_> = sink.assets().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_sample_wall_geometry() {
    let mut sink = MemorySink::default();
    process_floor_plan(&SampleFloorPlan::default(), &BuildConfig::default(), &mut sink).unwrap();

    // Door: left, right and lintel spans
    let kitchen_dining = sink.get("Wall_357_x_300").unwrap();
    assert_eq!(kitchen_dining.buffers.vertex_count(), 24);
    assert_eq!(kitchen_dining.buffers.triangle_count(), 36);

    // Window: left, right, sill and lintel spans
    let bedroom = sink.get("Wall_366_x_300").unwrap();
    assert_eq!(bedroom.buffers.vertex_count(), 32);

    // No openings: one box
    let front = sink.get("Wall_800_x_300").unwrap();
    assert_eq!(front.buffers.vertex_count(), 8);
    assert_eq!(front.buffers.triangle_count(), 12);
}

#[test]
fn test_overwrite_policy_keeps_one_asset_per_name() {
    let mut sink = MemorySink::new(NamePolicy::Overwrite);
    let report =
        process_floor_plan(&SampleFloorPlan::default(), &BuildConfig::default(), &mut sink)
            .unwrap();

    // Every build step is still reported
    assert_eq!(report.total_assets(), 17);
    // 8 distinct slabs plus 5 distinct wall names
    assert_eq!(sink.assets().len(), 13);
}

#[test]
fn test_along_wall_placement_changes_spans() {
    let plan = SampleFloorPlan::default()
        .analyze(&BuildConfig::default())
        .unwrap();
    let config = BuildConfig {
        placement: OpeningPlacement::AlongWall,
        ..Default::default()
    };
    let mut sink = MemorySink::default();
    build_structure(&plan, &config, &mut sink).unwrap();

    // Door centred 100 from the start of a 356.87 wall
    let wall = sink.get("Wall_357_x_300").unwrap();
    let (min, max) = wall.buffers.bounds();
    assert!((min.x - (-178.435)).abs() < 1e-3);
    assert!((max.x - 178.435).abs() < 1e-3);

    let door_left = -178.435 + 100.0 - 45.0;
    let has_door_edge = (0..wall.buffers.vertex_count())
        .any(|i| (wall.buffers.position(i).x as f64 - door_left).abs() < 1e-3);
    assert!(has_door_edge);
}

#[test]
fn test_obj_directory_sink_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = ObjDirectorySink::new(dir.path().join("assets"), NamePolicy::Version).unwrap();
    let report =
        process_floor_plan(&SampleFloorPlan::default(), &BuildConfig::default(), &mut sink)
            .unwrap();

    for name in &report.assets {
        let path = sink.asset_path(name);
        assert!(path.exists(), "missing {}", path.display());
    }

    let obj = std::fs::read_to_string(sink.asset_path("Wall_800_x_300")).unwrap();
    assert!(obj.contains("o Wall_800_x_300"));
    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
    assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 12);

    let ceiling = std::fs::read_to_string(sink.asset_path("Ceiling_200_x_200")).unwrap();
    // Underside lifted to the wall height (OBJ Y)
    assert!(ceiling.contains("v -100.000000 300.000000 100.000000"));
}

#[test]
fn test_second_build_into_same_directory_keeps_first() {
    let dir = tempfile::tempdir().unwrap();
    let build = || {
        let mut sink = ObjDirectorySink::new(dir.path(), NamePolicy::Version).unwrap();
        process_floor_plan(&SampleFloorPlan::default(), &BuildConfig::default(), &mut sink)
            .unwrap()
    };

    let first = build();
    let second = build();

    assert_eq!(second.total_assets(), 17);
    assert!(second.assets.iter().all(|name| !first.assets.contains(name)));
    assert_eq!(second.assets[0], "Floor_200_x_200_1");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 34);
}
