use super::*;

const MARGIN: f64 = 10.0;

fn body(kind: FixtureKind, x: f64, z: f64, scale: f64) -> Body {
    Body::new(Vec3::new(x, 0.0, z), kind, scale)
}

fn item(id: ItemId, kind: FixtureKind, x: f64, z: f64) -> PlacedItem {
    PlacedItem::new(id, kind, Vec3::new(x, 0.0, z), 0.0)
}

fn hits_existing(body: &Body, exclude: Option<ItemId>, items: &[PlacedItem]) -> bool {
    would_collide_with_existing(&Registry::builtin(), body, exclude, items, MARGIN)
}

// =============================================================
// check_collision
// =============================================================

#[test]
fn toilets_50cm_apart_collide() {
    let registry = Registry::builtin();
    let a = body(FixtureKind::Toilet, 0.0, 0.0, 1.0);
    let b = body(FixtureKind::Toilet, 50.0, 0.0, 1.0);
    assert!(check_collision(&registry, &a, &b, MARGIN));
}

#[test]
fn mirrors_200cm_apart_do_not_collide() {
    let registry = Registry::builtin();
    let a = body(FixtureKind::Mirror, 0.0, -120.0, 1.0);
    let b = body(FixtureKind::Mirror, 200.0, -120.0, 1.0);
    assert!(!check_collision(&registry, &a, &b, MARGIN));
}

#[test]
fn margin_makes_touching_footprints_collide() {
    let registry = Registry::builtin();
    // Toilets exactly edge to edge.
    let a = body(FixtureKind::Toilet, 0.0, 0.0, 1.0);
    let b = body(FixtureKind::Toilet, 60.0, 0.0, 1.0);
    assert!(check_collision(&registry, &a, &b, MARGIN));
    assert!(!check_collision(&registry, &a, &b, 0.0));
}

#[test]
fn separation_on_one_axis_is_enough() {
    let registry = Registry::builtin();
    let a = body(FixtureKind::Sink, 0.0, 0.0, 1.0);
    let b = body(FixtureKind::Sink, 10.0, 200.0, 1.0);
    assert!(!check_collision(&registry, &a, &b, MARGIN));
}

#[test]
fn missing_footprint_never_collides() {
    let registry = Registry::empty();
    let a = body(FixtureKind::Bath, 0.0, 0.0, 1.0);
    assert!(!check_collision(&registry, &a, &a, MARGIN));
}

#[test]
fn collision_is_symmetric() {
    let registry = Registry::builtin();
    for ka in FixtureKind::ALL {
        for kb in FixtureKind::ALL {
            for dx in [0.0, 35.0, 70.0, 95.0, 140.0] {
                for dz in [0.0, 25.0, 60.0, 120.0] {
                    let a = body(ka, 0.0, 0.0, 1.0);
                    let b = body(kb, dx, dz, 1.3);
                    assert_eq!(
                        check_collision(&registry, &a, &b, MARGIN),
                        check_collision(&registry, &b, &a, MARGIN),
                        "{ka} vs {kb} at ({dx}, {dz})"
                    );
                }
            }
        }
    }
}

#[test]
fn growing_scale_never_resolves_a_collision() {
    let registry = Registry::builtin();
    for kind in FixtureKind::ALL {
        for dx in [20.0, 60.0, 90.0, 130.0, 200.0] {
            let other = body(FixtureKind::Sink, dx, 10.0, 1.0);
            let mut was_colliding = false;
            for step in 2..=30 {
                let scale = f64::from(step) * 0.1;
                let grown = body(kind, 0.0, 0.0, scale);
                let colliding = check_collision(&registry, &grown, &other, MARGIN);
                assert!(!was_colliding || colliding, "{kind} at {scale} separated");
                was_colliding = colliding;
            }
        }
    }
}

// =============================================================
// would_collide_with_existing
// =============================================================

#[test]
fn would_collide_skips_excluded_id() {
    let items = vec![item(1, FixtureKind::Toilet, 0.0, 0.0)];
    let moving = body(FixtureKind::Toilet, 10.0, 0.0, 1.0);
    assert!(hits_existing(&moving, None, &items));
    assert!(!hits_existing(&moving, Some(1), &items));
}

#[test]
fn would_collide_with_empty_room_is_false() {
    let moving = body(FixtureKind::Bath, 0.0, 0.0, 1.0);
    assert!(!hits_existing(&moving, None, &[]));
}

#[test]
fn would_collide_uses_item_scale() {
    let mut big = item(1, FixtureKind::Sink, 100.0, 0.0);
    let moving = body(FixtureKind::Sink, 0.0, 0.0, 1.0);
    assert!(!hits_existing(&moving, None, &[big.clone()]));
    big.scale = 3.0;
    assert!(hits_existing(&moving, None, &[big]));
}

// =============================================================
// colliding_pairs
// =============================================================

#[test]
fn colliding_pairs_reports_each_pair_once() {
    let registry = Registry::builtin();
    let items = vec![
        item(5, FixtureKind::Toilet, 0.0, 0.0),
        item(2, FixtureKind::Toilet, 40.0, 0.0),
        item(9, FixtureKind::Sink, 500.0, 0.0),
    ];
    assert_eq!(colliding_pairs(&registry, &items, MARGIN), vec![(2, 5)]);
}

#[test]
fn colliding_pairs_empty_when_apart() {
    let registry = Registry::builtin();
    let items = vec![
        item(1, FixtureKind::Mirror, 0.0, 0.0),
        item(2, FixtureKind::Mirror, 200.0, 0.0),
    ];
    assert!(colliding_pairs(&registry, &items, MARGIN).is_empty());
}
