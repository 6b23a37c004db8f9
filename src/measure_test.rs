#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{FixtureKind, ItemId};
use crate::geometry::Vec3;

fn item(id: ItemId, kind: FixtureKind, x: f64, y: f64, z: f64) -> PlacedItem {
    PlacedItem::new(id, kind, Vec3::new(x, y, z), 0.0)
}

fn measure_one(target: &PlacedItem, items: &[PlacedItem]) -> Measurements {
    let (registry, config) = (Registry::builtin(), EditorConfig::default());
    measure(&registry, &config, Room::default(), target, items).unwrap()
}

#[test]
fn lone_toilet_on_north_wall() {
    let toilet = item(1, FixtureKind::Toilet, 0.0, 0.0, -85.0);
    let m = measure_one(&toilet, &[toilet.clone()]);
    assert_eq!((m.width, m.depth, m.height), (60.0, 80.0, 80.0));
    assert_eq!(m.space_left, 120.0);
    assert_eq!(m.space_right, 120.0);
    // Centre 40 from the wall, half depth 40.
    assert_eq!(m.space_front, 0.0);
    assert_eq!(m.space_back, 170.0);
    assert_eq!(m.space_above, 170.0);
    assert_eq!(m.space_below, 0.0);
    assert_eq!(m.wall, Some(Wall::North));
    assert!(m.is_wall_bound());
}

#[test]
fn aligned_neighbour_limits_space() {
    let toilet = item(1, FixtureKind::Toilet, 0.0, 0.0, -85.0);
    let sink = item(2, FixtureKind::Sink, 100.0, 0.0, -95.0);
    let m = measure_one(&toilet, &[toilet.clone(), sink]);
    // Toilet right edge 30, sink left edge 70.
    assert_eq!(m.space_right, 40.0);
    assert_eq!(m.space_left, 120.0);
}

#[test]
fn misaligned_neighbour_is_ignored() {
    let toilet = item(1, FixtureKind::Toilet, 0.0, 0.0, -85.0);
    let sink = item(2, FixtureKind::Sink, 100.0, 0.0, 0.0);
    let m = measure_one(&toilet, &[toilet.clone(), sink]);
    assert_eq!(m.space_right, 120.0);
}

#[test]
fn overlapping_neighbour_reads_zero() {
    let toilet = item(1, FixtureKind::Toilet, 0.0, 0.0, -85.0);
    let other = item(2, FixtureKind::Toilet, 40.0, 0.0, -85.0);
    let m = measure_one(&toilet, &[toilet.clone(), other]);
    assert_eq!(m.space_right, 0.0);
}

#[test]
fn raised_mirror_space_above_and_below() {
    let mirror = item(1, FixtureKind::Mirror, 0.0, 120.0, -120.0);
    let m = measure_one(&mirror, &[]);
    assert_eq!(m.space_below, 120.0);
    assert_eq!(m.space_above, 30.0);
    assert_eq!(m.wall, Some(Wall::North));
}

#[test]
fn free_standing_item_is_not_wall_bound() {
    let bath = item(1, FixtureKind::Bath, 0.0, 0.0, 0.0);
    let m = measure_one(&bath, &[]);
    assert_eq!(m.wall, None);
}

#[test]
fn scale_grows_measured_size() {
    let mut sink = item(1, FixtureKind::Sink, 0.0, 0.0, -95.0);
    sink.scale = 2.0;
    let m = measure_one(&sink, &[]);
    assert_eq!(m.width, 120.0);
    assert_eq!(m.height, 160.0);
}

#[test]
fn missing_footprint_has_no_measurements() {
    let toilet = item(1, FixtureKind::Toilet, 0.0, 0.0, -85.0);
    let config = EditorConfig::default();
    let m = measure(&Registry::empty(), &config, Room::default(), &toilet, &[]);
    assert!(m.is_none());
}
