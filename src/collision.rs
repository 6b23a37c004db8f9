//! Axis-aligned footprint overlap with a clearance margin.

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;

use crate::doc::{FixtureKind, ItemId, PlacedItem};
use crate::geometry::Vec3;
use crate::registry::Registry;

/// The collision-relevant part of an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub kind: FixtureKind,
    pub scale: f64,
}

impl Body {
    #[must_use]
    pub fn new(position: Vec3, kind: FixtureKind, scale: f64) -> Self {
        Self {
            position,
            kind,
            scale,
        }
    }
}

impl From<&PlacedItem> for Body {
    fn from(item: &PlacedItem) -> Self {
        Self {
            position: item.position,
            kind: item.kind,
            scale: item.scale,
        }
    }
}

fn half_extents(registry: &Registry, body: &Body) -> Option<(f64, f64)> {
    let dims = registry.dimensions(body.kind)?;
    let scale = body.scale;
    Some((dims.width * scale / 2.0, dims.depth * scale / 2.0))
}

/// Whether two bodies overlap once `margin` is added to the gap on both axes.
///
/// Bodies whose kind has no footprint never collide.
#[must_use]
pub fn check_collision(registry: &Registry, a: &Body, b: &Body, margin: f64) -> bool {
    let a_half = half_extents(registry, a);
    let b_half = half_extents(registry, b);
    let (Some((aw, ad)), Some((bw, bd))) = (a_half, b_half) else {
        tracing::warn!(a = %a.kind, b = %b.kind, "missing footprint; treating as non-colliding");
        return false;
    };
    let dx = (a.position.x - b.position.x).abs();
    let dz = (a.position.z - b.position.z).abs();
    dx < aw + bw + margin && dz < ad + bd + margin
}

/// Whether `body` collides with any item other than `exclude`.
#[must_use]
pub fn would_collide_with_existing(
    registry: &Registry,
    body: &Body,
    exclude: Option<ItemId>,
    items: &[PlacedItem],
    margin: f64,
) -> bool {
    items
        .iter()
        .filter(|item| Some(item.id) != exclude)
        .any(|item| check_collision(registry, body, &Body::from(item), margin))
}

/// Every colliding pair of items, lower id first, sorted.
#[must_use]
pub fn colliding_pairs(
    registry: &Registry,
    items: &[PlacedItem],
    margin: f64,
) -> Vec<(ItemId, ItemId)> {
    let mut pairs = Vec::new();
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if check_collision(registry, &Body::from(a), &Body::from(b), margin) {
                pairs.push((a.id.min(b.id), a.id.max(b.id)));
            }
        }
    }
    pairs.sort_unstable();
    pairs
}
