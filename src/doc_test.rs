#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn make_item(id: ItemId, kind: FixtureKind, x: f64, z: f64) -> PlacedItem {
    PlacedItem::new(id, kind, Vec3::new(x, 0.0, z), 0.0)
}

// =============================================================
// FixtureKind
// =============================================================

#[test]
fn kind_serializes_as_display_name() {
    let json = serde_json::to_string(&FixtureKind::Radiator).unwrap();
    assert_eq!(json, "\"Radiator\"");
}

#[test]
fn kind_from_name_is_case_insensitive() {
    assert_eq!(FixtureKind::from_name("toilet"), Some(FixtureKind::Toilet));
    assert_eq!(FixtureKind::from_name(" SINK "), Some(FixtureKind::Sink));
    assert_eq!(FixtureKind::from_name("Sofa"), None);
}

#[test]
fn kind_display_matches_name() {
    for kind in FixtureKind::ALL {
        assert_eq!(kind.to_string(), kind.name());
    }
}

// =============================================================
// PlacedItem serde
// =============================================================

#[test]
fn item_deserializes_with_defaults() {
    let item: PlacedItem = serde_json::from_value(json!({
        "id": 3,
        "type": "Sink",
        "position": { "x": 1.0, "y": 0.0, "z": -2.0 }
    }))
    .unwrap();
    assert_eq!(item.id, 3);
    assert_eq!(item.kind, FixtureKind::Sink);
    assert_eq!(item.rotation, 0.0);
    assert_eq!(item.scale, 1.0);
}

#[test]
fn item_serializes_kind_as_type() {
    let value = serde_json::to_value(make_item(1, FixtureKind::Bath, 0.0, 0.0)).unwrap();
    assert_eq!(value["type"], "Bath");
}

// =============================================================
// ItemPatch
// =============================================================

#[test]
fn patch_merge_is_last_write_wins_per_field() {
    let mut patch = ItemPatch::position(Vec3::new(1.0, 0.0, 1.0));
    patch.merge(&ItemPatch::rotation(0.5));
    patch.merge(&ItemPatch::position(Vec3::new(2.0, 0.0, 2.0)));
    assert_eq!(patch.position, Some(Vec3::new(2.0, 0.0, 2.0)));
    assert_eq!(patch.rotation, Some(0.5));
    assert_eq!(patch.scale, None);
}

#[test]
fn patch_merge_empty_keeps_fields() {
    let mut patch = ItemPatch::scale(1.5);
    patch.merge(&ItemPatch::default());
    assert_eq!(patch, ItemPatch::scale(1.5));
}

#[test]
fn patch_apply_touches_only_present_fields() {
    let item = make_item(1, FixtureKind::Toilet, 10.0, 20.0);
    let patched = item.patched(&ItemPatch::rotation(1.0));
    assert_eq!(patched.position, item.position);
    assert_eq!(patched.rotation, 1.0);
    assert_eq!(patched.scale, 1.0);
}

#[test]
fn patch_is_empty() {
    assert!(ItemPatch::default().is_empty());
    assert!(!ItemPatch::placement(Vec3::default(), 0.0).is_empty());
}

#[test]
fn patch_skips_absent_fields_in_json() {
    let value = serde_json::to_value(ItemPatch::scale(2.0)).unwrap();
    assert_eq!(value, json!({ "scale": 2.0 }));
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn store_set_items_is_functional_update() {
    let mut store = MemoryStore::with_items(vec![make_item(1, FixtureKind::Toilet, 0.0, 0.0)]);
    store.set_items(&mut |prev| {
        let mut next = prev.to_vec();
        next.push(make_item(2, FixtureKind::Sink, 50.0, 0.0));
        next
    });
    assert_eq!(store.len(), 2);
    assert_eq!(store.commits(), 1);
}

#[test]
fn store_delete_item() {
    let mut store = MemoryStore::with_items(vec![
        make_item(1, FixtureKind::Toilet, 0.0, 0.0),
        make_item(2, FixtureKind::Sink, 50.0, 0.0),
    ]);
    store.delete_item(1);
    assert!(store.item(1).is_none());
    assert!(store.item(2).is_some());
    assert_eq!(store.commits(), 1);
}

#[test]
fn store_delete_missing_is_noop_on_items() {
    let mut store = MemoryStore::with_items(vec![make_item(1, FixtureKind::Toilet, 0.0, 0.0)]);
    store.delete_item(99);
    assert_eq!(store.len(), 1);
}

#[test]
fn store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert!(store.items().is_empty());
    assert_eq!(store.commits(), 0);
}
