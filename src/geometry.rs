//! Room-local geometry primitives.
//!
//! Coordinates follow the renderer: `x` and `z` span the floor, `y` is
//! elevation. The room is centred on the origin, so its walls sit at
//! `±width/2` on x and `±depth/2` on z.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{ROOM_DEFAULT_DEPTH, ROOM_DEFAULT_WIDTH, ROOM_MAX_SIZE, ROOM_MIN_SIZE};

/// A point or offset in room space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Replace any NaN or infinite component with zero.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            x: finite_or_zero(self.x),
            y: finite_or_zero(self.y),
            z: finite_or_zero(self.z),
        }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Same point with a different elevation.
    #[must_use]
    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// A half-line in room space, produced by the host's camera unprojection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Intersect with the horizontal plane `y = height`.
    ///
    /// Returns `None` when the ray runs parallel to the plane or points away
    /// from it.
    #[must_use]
    pub fn intersect_horizontal_plane(&self, height: f64) -> Option<Vec3> {
        let dy = self.direction.y;
        if dy.abs() < f64::EPSILON || !dy.is_finite() {
            return None;
        }
        let t = (height - self.origin.y) / dy;
        if !t.is_finite() || t < 0.0 {
            return None;
        }
        Some(Vec3 {
            x: self.origin.x + self.direction.x * t,
            y: height,
            z: self.origin.z + self.direction.z * t,
        })
    }
}

/// Interior floor dimensions of the room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Extent along x.
    pub width: f64,
    /// Extent along z.
    pub depth: f64,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width: ROOM_DEFAULT_WIDTH,
            depth: ROOM_DEFAULT_DEPTH,
        }
    }
}

impl Room {
    #[must_use]
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }

    /// Half extents, with degenerate (negative or non-finite) sizes read as zero.
    #[must_use]
    pub fn half_extents(&self) -> (f64, f64) {
        let width = finite_or_zero(self.width).max(0.0);
        let depth = finite_or_zero(self.depth).max(0.0);
        (width / 2.0, depth / 2.0)
    }

    /// Clamp both edges into the range the resize controls offer.
    #[must_use]
    pub fn clamped_to_limits(self) -> Self {
        Self {
            width: clamp_span(finite_or_zero(self.width), ROOM_MIN_SIZE, ROOM_MAX_SIZE),
            depth: clamp_span(finite_or_zero(self.depth), ROOM_MIN_SIZE, ROOM_MAX_SIZE),
        }
    }
}

/// Clamp `value` into `[lo, hi]` without panicking on an inverted range.
///
/// When `lo > hi` the result is `lo`. Non-finite values collapse to `lo`.
#[must_use]
pub fn clamp_span(value: f64, lo: f64, hi: f64) -> f64 {
    if !value.is_finite() {
        return lo;
    }
    value.min(hi).max(lo)
}

/// Zero for NaN and infinities, the value otherwise.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
