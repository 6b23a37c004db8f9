//! Scene picking: which placed item, if any, is under the pointer.
//!
//! The host owns the scene graph and the raycaster. It reports every
//! intersection as a `Candidate`, already resolved to the nearest ancestor
//! that is a placed item. Resolution here is closest-first, and a wall in
//! front of an item blocks it: dragging over a wall orbits the camera.

#[cfg(test)]
#[path = "pick_test.rs"]
mod pick_test;

use crate::camera::Point;
use crate::doc::ItemId;
use crate::geometry::Ray;

/// One raycast intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Distance from the ray origin.
    pub distance: f64,
    pub is_wall: bool,
    /// Placed item owning the hit mesh, if any.
    pub item: Option<ItemId>,
    pub visible: bool,
}

/// The item a pick resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub item: ItemId,
}

/// Raycasting against the host's scene.
pub trait ScenePicker {
    /// Ray through a point in normalized device coordinates, or `None` when
    /// the host has no camera yet.
    fn ray(&self, ndc: Point) -> Option<Ray>;

    /// All intersections of `ray` with collidable scene objects, in any order.
    fn intersect(&self, ray: &Ray) -> Vec<Candidate>;
}

/// Closest visible candidate wins; a wall wins by returning nothing.
#[must_use]
pub fn resolve(mut candidates: Vec<Candidate>) -> Option<Hit> {
    candidates.retain(|c| c.visible);
    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    for candidate in candidates {
        if candidate.is_wall {
            return None;
        }
        if let Some(item) = candidate.item {
            return Some(Hit { item });
        }
    }
    None
}

/// Cast through `ndc` and resolve.
#[must_use]
pub fn pick<P: ScenePicker + ?Sized>(picker: &P, ndc: Point) -> Option<Hit> {
    let ray = picker.ray(ndc)?;
    resolve(picker.intersect(&ray))
}
