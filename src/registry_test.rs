#![allow(clippy::float_cmp)]

use super::*;

fn builtin() -> Registry {
    Registry::builtin()
}

fn angle(kind: FixtureKind, wall: Wall) -> f64 {
    builtin().rotation_for_wall(kind, wall)
}

// =============================================================
// Wall
// =============================================================

#[test]
fn wall_order_is_north_south_east_west() {
    let expected = [Wall::North, Wall::South, Wall::East, Wall::West];
    assert_eq!(Wall::ALL, expected);
}

#[test]
fn wall_axis() {
    assert!(Wall::North.runs_along_x());
    assert!(Wall::South.runs_along_x());
    assert!(!Wall::East.runs_along_x());
    assert!(!Wall::West.runs_along_x());
}

#[test]
fn wall_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Wall::East).unwrap(), "\"east\"");
}

// =============================================================
// Dimensions
// =============================================================

#[test]
fn every_builtin_kind_has_dimensions() {
    let registry = builtin();
    for kind in FixtureKind::ALL {
        assert!(registry.dimensions(kind).is_some(), "{kind}");
    }
}

#[test]
fn toilet_footprint() {
    let dims = builtin().dimensions(FixtureKind::Toilet);
    assert_eq!(dims, Some(Dimensions::new(60.0, 80.0, 80.0)));
}

#[test]
fn dimensions_scaled() {
    let dims = Dimensions::new(60.0, 80.0, 80.0).scaled(0.5);
    assert_eq!(dims, Dimensions::new(30.0, 40.0, 40.0));
}

#[test]
fn missing_entry_has_no_dimensions() {
    assert_eq!(Registry::empty().dimensions(FixtureKind::Bath), None);
}

// =============================================================
// Wall buffer
// =============================================================

#[test]
fn buffer_from_footprint_is_half_larger_edge() {
    // Toilet 60x80 → 40.
    assert_eq!(builtin().wall_buffer(FixtureKind::Toilet, 1.0, 99.0), 40.0);
    assert_eq!(builtin().wall_buffer(FixtureKind::Bath, 1.0, 99.0), 85.0);
}

#[test]
fn buffer_from_footprint_scales() {
    assert_eq!(builtin().wall_buffer(FixtureKind::Sink, 2.0, 99.0), 60.0);
}

#[test]
fn explicit_buffer_overrides_footprint_and_scales() {
    let registry = builtin();
    assert_eq!(registry.wall_buffer(FixtureKind::Mirror, 1.0, 99.0), 5.0);
    assert_eq!(registry.wall_buffer(FixtureKind::Mirror, 2.0, 99.0), 10.0);
    assert_eq!(registry.wall_buffer(FixtureKind::Radiator, 1.0, 99.0), 10.0);
}

#[test]
fn buffer_falls_back_to_default_without_entry() {
    let registry = Registry::empty();
    assert_eq!(registry.wall_buffer(FixtureKind::Toilet, 1.0, 40.0), 40.0);
}

#[test]
fn buffer_falls_back_to_default_without_footprint() {
    let mut registry = Registry::empty();
    let mut entry = RegistryEntry::with_footprint(Dimensions::new(1.0, 1.0, 1.0));
    entry.dimensions = None;
    registry.insert(FixtureKind::Shower, entry);
    assert_eq!(registry.wall_buffer(FixtureKind::Shower, 3.0, 40.0), 40.0);
}

// =============================================================
// Rotation
// =============================================================

#[test]
fn face_into_room_table() {
    assert_eq!(angle(FixtureKind::Toilet, Wall::North), 0.0);
    assert_eq!(angle(FixtureKind::Toilet, Wall::South), PI);
    assert_eq!(angle(FixtureKind::Toilet, Wall::East), -FRAC_PI_2);
    assert_eq!(angle(FixtureKind::Toilet, Wall::West), FRAC_PI_2);
}

#[test]
fn flush_with_wall_table() {
    assert_eq!(angle(FixtureKind::Door, Wall::North), FRAC_PI_2);
    assert_eq!(angle(FixtureKind::Door, Wall::South), FRAC_PI_2);
    assert_eq!(angle(FixtureKind::Door, Wall::East), 0.0);
    assert_eq!(angle(FixtureKind::Door, Wall::West), 0.0);
}

#[test]
fn mirror_offset_flips_by_pi() {
    assert_eq!(angle(FixtureKind::Mirror, Wall::North), PI);
    assert_eq!(angle(FixtureKind::Mirror, Wall::West), FRAC_PI_2 + PI);
}

#[test]
fn custom_policy_uses_its_angles() {
    let mut registry = Registry::empty();
    let angles = WallAngles {
        north: 0.1,
        south: 0.2,
        east: 0.3,
        west: 0.4,
    };
    let entry = RegistryEntry::with_footprint(Dimensions::new(60.0, 60.0, 80.0))
        .policy(OrientationPolicy::Custom(angles));
    registry.insert(FixtureKind::Sink, entry);
    let east = registry.rotation_for_wall(FixtureKind::Sink, Wall::East);
    assert_eq!(east, 0.3);
}

#[test]
fn missing_entry_rotation_falls_back_to_face_into_room() {
    let registry = Registry::empty();
    let south = registry.rotation_for_wall(FixtureKind::Door, Wall::South);
    assert_eq!(south, PI);
}

#[test]
fn rotation_is_deterministic() {
    let registry = builtin();
    for kind in FixtureKind::ALL {
        for wall in Wall::ALL {
            let first = registry.rotation_for_wall(kind, wall);
            for _ in 0..3 {
                assert_eq!(registry.rotation_for_wall(kind, wall), first);
            }
        }
    }
}

// =============================================================
// Orientation info and vertical policy
// =============================================================

#[test]
fn orientation_info_reports_policy_and_offset() {
    let registry = builtin();
    let mirror = registry.orientation_info(FixtureKind::Mirror);
    assert_eq!(mirror.policy, "face_into_room");
    assert!(mirror.has_offset);
    let door = registry.orientation_info(FixtureKind::Door);
    assert_eq!(door.policy, "flush_with_wall");
    assert!(!door.has_offset);
}

#[test]
fn orientation_info_default_without_entry() {
    let info = Registry::empty().orientation_info(FixtureKind::Toilet);
    assert_eq!(info.policy, "face_into_room");
    assert_eq!(info.description, "Default orientation");
}

#[test]
fn mirror_vertical_policy() {
    let registry = builtin();
    assert_eq!(registry.vertical_anchor(FixtureKind::Mirror), 120.0);
    assert_eq!(registry.max_height(FixtureKind::Mirror, 150.0), 250.0);
}

#[test]
fn floor_fixtures_use_default_vertical_policy() {
    let registry = builtin();
    assert_eq!(registry.vertical_anchor(FixtureKind::Toilet), 0.0);
    assert_eq!(registry.max_height(FixtureKind::Toilet, 150.0), 150.0);
}

#[test]
fn free_rotation_flag() {
    let mut registry = builtin();
    assert!(!registry.allows_free_rotation(FixtureKind::Bath));
    registry.insert(
        FixtureKind::Bath,
        RegistryEntry::with_footprint(Dimensions::new(170.0, 80.0, 60.0)).free_rotation(true),
    );
    assert!(registry.allows_free_rotation(FixtureKind::Bath));
}
