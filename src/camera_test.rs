#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// --- Point ---

#[test]
fn point_distance() {
    let distance = Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0));
    assert!(approx_eq(distance, 5.0));
}

// --- Viewport ---

#[test]
fn ndc_corners() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.to_ndc(Point::new(0.0, 0.0)), Point::new(-1.0, 1.0));
    assert_eq!(vp.to_ndc(Point::new(800.0, 600.0)), Point::new(1.0, -1.0));
    assert_eq!(vp.to_ndc(Point::new(400.0, 300.0)), Point::new(0.0, 0.0));
}

#[test]
fn ndc_zero_viewport_is_centre() {
    let ndc = Viewport::default().to_ndc(Point::new(10.0, 10.0));
    assert_eq!(ndc, Point::default());
}

#[test]
fn viewport_center() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.center(), Point::new(400.0, 300.0));
}

// --- OrbitCamera construction ---

#[test]
fn default_camera_reproduces_initial_position() {
    let cam = OrbitCamera::default();
    assert!(vec_approx_eq(cam.position(), Vec3::new(0.0, 150.0, 800.0)));
    assert_eq!(cam.target, Vec3::new(0.0, 80.0, 0.0));
}

#[test]
fn looking_at_round_trips_position() {
    let target = Vec3::new(0.0, 80.0, 0.0);
    let eye = Vec3::new(-300.0, 400.0, 250.0);
    let cam = OrbitCamera::looking_at(eye, target);
    assert!(vec_approx_eq(cam.position(), eye));
}

#[test]
fn looking_at_self_is_finite() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let cam = OrbitCamera::looking_at(p, p);
    assert!(cam.position().x.is_finite());
    assert_eq!(cam.radius, CAMERA_MIN_DISTANCE);
}

// --- orbit ---

#[test]
fn orbit_changes_azimuth_and_keeps_radius() {
    let mut cam = OrbitCamera::default();
    let radius = cam.radius;
    cam.orbit(0.5, 0.0);
    assert!(approx_eq(cam.theta, 0.5));
    assert!(approx_eq((cam.position() - cam.target).length(), radius));
}

#[test]
fn orbit_clamps_polar_angle() {
    let mut cam = OrbitCamera::default();
    cam.orbit(0.0, 10.0);
    assert!(approx_eq(cam.phi, CAMERA_MAX_PHI));
    cam.orbit(0.0, -10.0);
    assert!(approx_eq(cam.phi, CAMERA_MIN_PHI));
}

#[test]
fn orbit_keeps_eye_above_floor_limit() {
    let mut cam = OrbitCamera::default();
    for _ in 0..50 {
        cam.orbit(0.3, 0.2);
        assert!(cam.position().y >= CAMERA_MIN_HEIGHT - EPSILON);
    }
}

#[test]
fn orbit_ignores_nan() {
    let mut cam = OrbitCamera::default();
    let before = cam;
    cam.orbit(f64::NAN, f64::NAN);
    assert_eq!(cam.theta, before.theta);
    assert!(cam.phi.is_finite());
}

// --- zoom ---

#[test]
fn wheel_down_zooms_out() {
    let mut cam = OrbitCamera::default();
    let r = cam.radius;
    cam.zoom_wheel(100.0);
    assert!(approx_eq(cam.radius, r * ZOOM_STEP));
}

#[test]
fn wheel_up_zooms_in() {
    let mut cam = OrbitCamera::default();
    let r = cam.radius;
    cam.zoom_wheel(-100.0);
    assert!(approx_eq(cam.radius, r / ZOOM_STEP));
}

#[test]
fn zoom_is_clamped() {
    let mut cam = OrbitCamera::default();
    for _ in 0..100 {
        cam.zoom_wheel(1.0);
    }
    assert_eq!(cam.radius, CAMERA_MAX_DISTANCE);
    for _ in 0..200 {
        cam.zoom_wheel(-1.0);
    }
    assert_eq!(cam.radius, CAMERA_MIN_DISTANCE);
}

#[test]
fn zoom_by_rejects_bad_factor() {
    let mut cam = OrbitCamera::default();
    let r = cam.radius;
    cam.zoom_by(0.0);
    cam.zoom_by(f64::NAN);
    cam.zoom_by(-2.0);
    assert_eq!(cam.radius, r);
}

// --- pinch ---

#[test]
fn pinch_inside_dead_zone_does_nothing() {
    let mut cam = OrbitCamera::default();
    let r = cam.radius;
    assert!(!cam.pinch(1.01));
    assert!(!cam.pinch(0.99));
    assert_eq!(cam.radius, r);
}

#[test]
fn pinch_spread_zooms_in() {
    let mut cam = OrbitCamera::default();
    let r = cam.radius;
    assert!(cam.pinch(1.2));
    assert!(approx_eq(cam.radius, r * 0.98));
}

#[test]
fn pinch_squeeze_zooms_out() {
    let mut cam = OrbitCamera::default();
    let r = cam.radius;
    assert!(cam.pinch(0.5));
    assert!(approx_eq(cam.radius, r * 1.02));
}
