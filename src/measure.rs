//! Measurement readout for the selected item: its scaled size and the free
//! space around it.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::consts::{ALIGNMENT_TOLERANCE, CEILING_HEIGHT, WALL_BOUND_TOLERANCE};
use crate::doc::PlacedItem;
use crate::geometry::Room;
use crate::registry::{Registry, Wall};
use crate::walls::WallLines;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurements {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    /// Free space toward -x.
    pub space_left: f64,
    /// Free space toward +x.
    pub space_right: f64,
    /// Free space toward -z (north).
    pub space_front: f64,
    /// Free space toward +z (south).
    pub space_back: f64,
    pub space_above: f64,
    pub space_below: f64,
    /// Wall the item sits on, if its centre is on that wall's line.
    pub wall: Option<Wall>,
}

impl Measurements {
    #[must_use]
    pub fn is_wall_bound(&self) -> bool {
        self.wall.is_some()
    }
}

/// Measure `item` against the room and every other item.
///
/// Neighbours only count on an axis when they are aligned with the item on
/// the other axis. `None` when the item's kind has no footprint.
#[must_use]
pub fn measure(
    registry: &Registry,
    config: &EditorConfig,
    room: Room,
    item: &PlacedItem,
    items: &[PlacedItem],
) -> Option<Measurements> {
    let dims = registry.dimensions(item.kind)?.scaled(item.scale);
    let p = item.position;
    let (half_w, half_d) = room.half_extents();

    let mut left = (p.x + half_w) - dims.width / 2.0;
    let mut right = (half_w - p.x) - dims.width / 2.0;
    let mut front = (p.z + half_d) - dims.depth / 2.0;
    let mut back = (half_d - p.z) - dims.depth / 2.0;

    for other in items.iter().filter(|other| other.id != item.id) {
        let Some(od) = registry.entry(other.kind).and_then(|e| e.dimensions) else {
            continue;
        };
        let od = od.scaled(other.scale);
        let q = other.position;

        if (p.z - q.z).abs() < ALIGNMENT_TOLERANCE {
            if q.x < p.x {
                left = left.min((p.x - dims.width / 2.0) - (q.x + od.width / 2.0));
            } else if q.x > p.x {
                right = right.min((q.x - od.width / 2.0) - (p.x + dims.width / 2.0));
            }
        }
        if (p.x - q.x).abs() < ALIGNMENT_TOLERANCE {
            if q.z < p.z {
                front = front.min((p.z - dims.depth / 2.0) - (q.z + od.depth / 2.0));
            } else if q.z > p.z {
                back = back.min((q.z - od.depth / 2.0) - (p.z + dims.depth / 2.0));
            }
        }
    }

    let buffer = registry.wall_buffer(item.kind, item.scale, config.object_buffer);
    let lines = WallLines::new(room, buffer);
    let wall = Wall::ALL
        .into_iter()
        .find(|wall| lines.distance(*wall, p) < WALL_BOUND_TOLERANCE);

    Some(Measurements {
        width: dims.width,
        depth: dims.depth,
        height: dims.height,
        space_left: left.max(0.0),
        space_right: right.max(0.0),
        space_front: front.max(0.0),
        space_back: back.max(0.0),
        space_above: (CEILING_HEIGHT - (p.y + dims.height)).max(0.0),
        space_below: p.y.max(0.0),
        wall,
    })
}
