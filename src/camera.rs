#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{
    CAMERA_INITIAL_POSITION, CAMERA_MAX_DISTANCE, CAMERA_MAX_PHI, CAMERA_MIN_DISTANCE,
    CAMERA_MIN_HEIGHT, CAMERA_MIN_PHI, LOOK_AT, PINCH_STEP, PINCH_THRESHOLD, ZOOM_STEP,
};
use crate::geometry::{Vec3, clamp_span, finite_or_zero};

/// A point in screen space (CSS pixels, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Canvas size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen point to normalized device coordinates (`[-1, 1]`, y up).
    ///
    /// A zero-sized viewport maps everything to the centre.
    #[must_use]
    pub fn to_ndc(&self, screen: Point) -> Point {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Point::default();
        }
        Point {
            x: screen.x / self.width * 2.0 - 1.0,
            y: -(screen.y / self.height) * 2.0 + 1.0,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: finite_or_zero(self.width) / 2.0,
            y: finite_or_zero(self.height) / 2.0,
        }
    }
}

/// Orbit camera in spherical coordinates around a fixed target.
///
/// `phi` is the polar angle from straight up; `theta` the azimuth around y,
/// measured from +z toward +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f64,
    pub theta: f64,
    pub phi: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let (x, y, z) = CAMERA_INITIAL_POSITION;
        let (tx, ty, tz) = LOOK_AT;
        Self::looking_at(Vec3::new(x, y, z), Vec3::new(tx, ty, tz))
    }
}

impl OrbitCamera {
    /// Camera at `position` looking at `target`.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let offset = (position - target).sanitized();
        let radius = offset.length();
        if radius <= f64::EPSILON {
            return Self {
                target,
                radius: CAMERA_MIN_DISTANCE,
                theta: 0.0,
                phi: CAMERA_MAX_PHI,
            };
        }
        Self {
            target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: clamp_span(offset.y / radius, -1.0, 1.0).acos(),
        }
    }

    /// World position of the eye.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    /// Rotate by the given angle deltas, keeping the eye above the floor.
    pub fn orbit(&mut self, d_theta: f64, d_phi: f64) {
        self.theta += finite_or_zero(d_theta);
        self.phi = clamp_span(
            self.phi + finite_or_zero(d_phi),
            CAMERA_MIN_PHI,
            CAMERA_MAX_PHI,
        );

        if self.position().y < CAMERA_MIN_HEIGHT && self.radius > 0.0 {
            let cos_limit = (CAMERA_MIN_HEIGHT - self.target.y) / self.radius;
            if (-1.0..=1.0).contains(&cos_limit) {
                self.phi = self.phi.min(cos_limit.acos());
            }
        }
    }

    /// Scale the orbit radius, clamped to the distance limits.
    pub fn zoom_by(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        self.radius = clamp_span(
            self.radius * factor,
            CAMERA_MIN_DISTANCE,
            CAMERA_MAX_DISTANCE,
        );
    }

    /// One wheel notch: positive `delta_y` zooms out.
    pub fn zoom_wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.zoom_by(ZOOM_STEP);
        } else if delta_y < 0.0 {
            self.zoom_by(1.0 / ZOOM_STEP);
        }
    }

    /// Pinch step from the ratio of current to previous finger distance.
    ///
    /// Returns whether the camera moved; the caller then rebases its previous
    /// distance.
    pub fn pinch(&mut self, ratio: f64) -> bool {
        if ratio > 1.0 + PINCH_THRESHOLD {
            self.zoom_by(1.0 - PINCH_STEP);
            true
        } else if ratio < 1.0 - PINCH_THRESHOLD {
            self.zoom_by(1.0 + PINCH_STEP);
            true
        } else {
            false
        }
    }
}
