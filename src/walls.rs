//! Wall constraint solver.
//!
//! Every placed item sits against one of the four walls. Given any point in
//! room space, the solver picks the nearest wall line (the wall surface pulled
//! inward by the item's wall buffer), snaps the point onto it, clamps the
//! tangential coordinate between the perpendicular wall lines, and returns the
//! rotation the item's orientation policy prescribes for that wall.
//!
//! The solver is idempotent: feeding a snapped position back in returns the
//! same position and rotation. Ties between equidistant walls resolve in the
//! order north, south, east, west, evaluated on the snapped position so that
//! corner snaps keep a stable rotation.

#[cfg(test)]
#[path = "walls_test.rs"]
mod walls_test;

use std::f64::consts::TAU;

use serde::Serialize;

use crate::collision::{Body, would_collide_with_existing};
use crate::config::EditorConfig;
use crate::doc::{FixtureKind, ItemId, PlacedItem};
use crate::geometry::{Room, Vec3, clamp_span, finite_or_zero};
use crate::registry::{Registry, Wall};

/// Wall surfaces pulled inward by a buffer. `north <= south`, `west <= east`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallLines {
    /// z of the north line.
    pub north: f64,
    /// z of the south line.
    pub south: f64,
    /// x of the east line.
    pub east: f64,
    /// x of the west line.
    pub west: f64,
}

impl WallLines {
    /// Lines for `room` at `buffer`. The inset never exceeds the half extent,
    /// so a room smaller than twice the buffer collapses onto its centre line.
    #[must_use]
    pub fn new(room: Room, buffer: f64) -> Self {
        let (half_w, half_d) = room.half_extents();
        let buffer = finite_or_zero(buffer).max(0.0);
        let inset_x = buffer.min(half_w);
        let inset_z = buffer.min(half_d);
        Self {
            north: -half_d + inset_z,
            south: half_d - inset_z,
            east: half_w - inset_x,
            west: -half_w + inset_x,
        }
    }

    /// Distance from `point` to the line of `wall`, along that wall's normal.
    #[must_use]
    pub fn distance(&self, wall: Wall, point: Vec3) -> f64 {
        match wall {
            Wall::North => (point.z - self.north).abs(),
            Wall::South => (point.z - self.south).abs(),
            Wall::East => (point.x - self.east).abs(),
            Wall::West => (point.x - self.west).abs(),
        }
    }

    /// Project `point` onto the line of `wall`, clamped to its span.
    #[must_use]
    pub fn project(&self, wall: Wall, point: Vec3) -> Vec3 {
        let x = clamp_span(point.x, self.west, self.east);
        let z = clamp_span(point.z, self.north, self.south);
        match wall {
            Wall::North => Vec3::new(x, point.y, self.north),
            Wall::South => Vec3::new(x, point.y, self.south),
            Wall::East => Vec3::new(self.east, point.y, z),
            Wall::West => Vec3::new(self.west, point.y, z),
        }
    }

    /// Point at fraction `t` along `wall`, west to east or north to south.
    #[must_use]
    pub fn along(&self, wall: Wall, t: f64, y: f64) -> Vec3 {
        let t = clamp_span(t, 0.0, 1.0);
        match wall {
            Wall::North => Vec3::new(self.west + t * (self.east - self.west), y, self.north),
            Wall::South => Vec3::new(self.west + t * (self.east - self.west), y, self.south),
            Wall::East => Vec3::new(self.east, y, self.north + t * (self.south - self.north)),
            Wall::West => Vec3::new(self.west, y, self.north + t * (self.south - self.north)),
        }
    }
}

/// Result of snapping a point to a wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snap {
    pub position: Vec3,
    pub rotation: f64,
    pub wall: Wall,
}

/// A snap that may still overlap another item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstrainedSnap {
    #[serde(flatten)]
    pub snap: Snap,
    /// The local search could not find a free spot; `snap` overlaps something.
    pub colliding: bool,
}

/// Nearest wall line to `point`; first in north, south, east, west order on ties.
#[must_use]
pub fn nearest_wall(lines: &WallLines, point: Vec3) -> Wall {
    let mut best = Wall::North;
    let mut best_distance = lines.distance(Wall::North, point);
    for wall in [Wall::South, Wall::East, Wall::West] {
        let distance = lines.distance(wall, point);
        if distance < best_distance {
            best = wall;
            best_distance = distance;
        }
    }
    best
}

/// Snap `point` onto the nearest wall for an item of `kind` at `scale`.
///
/// Elevation passes through unchanged. Non-finite coordinates read as zero.
#[must_use]
pub fn constrain_to_walls(
    registry: &Registry,
    config: &EditorConfig,
    room: Room,
    point: Vec3,
    kind: FixtureKind,
    scale: f64,
) -> Snap {
    let buffer = registry.wall_buffer(kind, scale, config.object_buffer);
    let lines = WallLines::new(room, buffer);
    let point = point.sanitized();
    let position = lines.project(nearest_wall(&lines, point), point);
    let wall = nearest_wall(&lines, position);
    Snap {
        position,
        rotation: registry.rotation_for_wall(kind, wall),
        wall,
    }
}

/// Alias of [`constrain_to_walls`].
#[must_use]
pub fn snap_to_nearest_wall(
    registry: &Registry,
    config: &EditorConfig,
    room: Room,
    point: Vec3,
    kind: FixtureKind,
    scale: f64,
) -> Snap {
    constrain_to_walls(registry, config, room, point, kind, scale)
}

/// Snap, then search a small ring around the snap for a collision-free spot.
///
/// Each sample is re-snapped to the walls before testing. When every sample
/// collides the plain snap is returned with `colliding` set.
#[must_use]
#[allow(clippy::too_many_arguments, clippy::cast_precision_loss)]
pub fn constrain_to_walls_with_collision(
    registry: &Registry,
    config: &EditorConfig,
    room: Room,
    point: Vec3,
    kind: FixtureKind,
    scale: f64,
    exclude: Option<ItemId>,
    items: &[PlacedItem],
) -> ConstrainedSnap {
    let margin = config.collision_margin;
    let collides = |position: Vec3| {
        let body = Body::new(position, kind, scale);
        would_collide_with_existing(registry, &body, exclude, items, margin)
    };

    let snap = constrain_to_walls(registry, config, room, point, kind, scale);
    if !collides(snap.position) {
        return ConstrainedSnap {
            snap,
            colliding: false,
        };
    }

    let steps = config.search_ring.angular_steps;
    for radius in config.search_ring.radii() {
        for step in 0..steps {
            let angle = step as f64 / steps as f64 * TAU;
            let offset = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
            let sample = snap.position + offset;
            let candidate = constrain_to_walls(registry, config, room, sample, kind, scale);
            if !collides(candidate.position) {
                return ConstrainedSnap {
                    snap: candidate,
                    colliding: false,
                };
            }
        }
    }

    tracing::warn!(
        kind = %kind,
        x = snap.position.x,
        z = snap.position.z,
        "no collision-free spot near wall snap"
    );
    ConstrainedSnap {
        snap,
        colliding: true,
    }
}

/// Re-snap every item to `room`, typically after a resize.
///
/// Items whose kind allows free rotation keep their own rotation. Applying
/// this twice gives the same result as applying it once.
#[must_use]
pub fn constrain_all_to_room(
    registry: &Registry,
    config: &EditorConfig,
    room: Room,
    items: &[PlacedItem],
) -> Vec<PlacedItem> {
    items
        .iter()
        .map(|item| resnap(registry, config, room, item))
        .collect()
}

fn resnap(registry: &Registry, config: &EditorConfig, room: Room, item: &PlacedItem) -> PlacedItem {
    let snap = constrain_to_walls(registry, config, room, item.position, item.kind, item.scale);
    let rotation = if registry.allows_free_rotation(item.kind) {
        item.rotation
    } else {
        snap.rotation
    };
    PlacedItem {
        position: snap.position,
        rotation,
        ..item.clone()
    }
}
