//! Placement search: a collision-free wall position for a new fixture.
//!
//! Samples random points along the four wall lines. Placement never fails:
//! when every sample collides the item goes to the centre of the south wall
//! and the result is flagged as colliding.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use rand::Rng;
use serde::Serialize;

use crate::collision::{Body, would_collide_with_existing};
use crate::config::EditorConfig;
use crate::doc::{FixtureKind, PlacedItem};
use crate::geometry::Room;
use crate::registry::{Registry, Wall};
use crate::walls::{Snap, WallLines};

/// Where a new item should go.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    #[serde(flatten)]
    pub snap: Snap,
    /// The fallback was used and overlaps an existing item.
    pub colliding: bool,
}

/// A point on `wall` at fraction `t`, with the kind's wall rotation and
/// vertical anchor.
#[must_use]
pub fn wall_track(
    registry: &Registry,
    lines: &WallLines,
    kind: FixtureKind,
    wall: Wall,
    t: f64,
) -> Snap {
    let position = lines.along(wall, t, registry.vertical_anchor(kind));
    Snap {
        position,
        rotation: registry.rotation_for_wall(kind, wall),
        wall,
    }
}

/// Try up to `max_attempts` random wall positions for an item of `kind`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn find_free_wall_position<R: Rng>(
    registry: &Registry,
    config: &EditorConfig,
    room: Room,
    kind: FixtureKind,
    scale: f64,
    items: &[PlacedItem],
    max_attempts: usize,
    rng: &mut R,
) -> Placement {
    let buffer = registry.wall_buffer(kind, scale, config.object_buffer);
    let lines = WallLines::new(room, buffer);
    let margin = config.collision_margin;
    let collides = |snap: &Snap| {
        let body = Body::new(snap.position, kind, scale);
        would_collide_with_existing(registry, &body, None, items, margin)
    };

    for _ in 0..max_attempts {
        let wall = Wall::ALL[rng.random_range(0..Wall::ALL.len())];
        let candidate = wall_track(registry, &lines, kind, wall, rng.random::<f64>());
        if !collides(&candidate) {
            return Placement {
                snap: candidate,
                colliding: false,
            };
        }
    }

    let fallback = wall_track(registry, &lines, kind, Wall::South, 0.5);
    let colliding = collides(&fallback);
    tracing::warn!(
        kind = %kind,
        attempts = max_attempts,
        colliding,
        "no free wall position; using south wall centre"
    );
    Placement {
        snap: fallback,
        colliding,
    }
}

/// [`find_free_wall_position`] with the configured attempt budget and the
/// thread RNG.
#[must_use]
pub fn find_free_wall_position_default(
    registry: &Registry,
    config: &EditorConfig,
    room: Room,
    kind: FixtureKind,
    scale: f64,
    items: &[PlacedItem],
) -> Placement {
    let mut rng = rand::rng();
    find_free_wall_position(
        registry,
        config,
        room,
        kind,
        scale,
        items,
        config.placement_attempts,
        &mut rng,
    )
}
