//! Shared numeric constants for the planner. All lengths are centimeters,
//! all angles radians.

use std::f64::consts::FRAC_PI_2;

// ── Room ────────────────────────────────────────────────────────

/// Default room width (x extent).
pub const ROOM_DEFAULT_WIDTH: f64 = 300.0;

/// Default room depth (z extent). The editor UI labels this "height".
pub const ROOM_DEFAULT_DEPTH: f64 = 250.0;

/// Smallest room edge the resize controls allow.
pub const ROOM_MIN_SIZE: f64 = 100.0;

/// Largest room edge the resize controls allow.
pub const ROOM_MAX_SIZE: f64 = 600.0;

/// Wall height, used as the ceiling for measurements.
pub const CEILING_HEIGHT: f64 = 250.0;

// ── Constraints ─────────────────────────────────────────────────

/// Wall buffer used when a type has neither an explicit buffer nor a footprint.
pub const OBJECT_BUFFER: f64 = 40.0;

/// Clearance added to both half-extents before two footprints count as apart.
pub const COLLISION_MARGIN: f64 = 10.0;

/// Scale factor bounds.
pub const SCALE_MIN: f64 = 0.2;
pub const SCALE_MAX: f64 = 3.0;

/// Elevation bounds. Types may raise the max through the registry.
pub const HEIGHT_MIN: f64 = 0.0;
pub const HEIGHT_MAX: f64 = 150.0;

/// Mirrors hang higher than anything else.
pub const MIRROR_HEIGHT_MAX: f64 = 250.0;

/// Default elevation of a freshly placed mirror.
pub const MIRROR_VERTICAL_ANCHOR: f64 = 120.0;

// ── Search ──────────────────────────────────────────────────────

/// Random wall samples tried before the placement fallback kicks in.
pub const PLACEMENT_ATTEMPTS: usize = 50;

/// Search ring around a colliding snap: radii from min to max in `step` increments.
pub const SEARCH_RADIUS_MIN: f64 = 20.0;
pub const SEARCH_RADIUS_MAX: f64 = 50.0;
pub const SEARCH_RADIUS_STEP: f64 = 10.0;

/// Angular samples per search ring.
pub const SEARCH_ANGULAR_STEPS: usize = 8;

// ── History ─────────────────────────────────────────────────────

pub const HISTORY_CAP: usize = 50;

// ── Gestures ────────────────────────────────────────────────────

/// Scale change per pixel of vertical pointer travel.
pub const SCALE_PER_PX: f64 = 0.001;

/// Elevation change (cm) per pixel of vertical pointer travel.
pub const HEIGHT_PER_PX: f64 = 1.0;

/// Two taps on the same item closer than this delete it.
pub const DOUBLE_TAP_MS: f64 = 300.0;

// ── Camera ──────────────────────────────────────────────────────

/// Fixed orbit target.
pub const LOOK_AT: (f64, f64, f64) = (0.0, 80.0, 0.0);

/// Initial camera offset from the origin.
pub const CAMERA_INITIAL_POSITION: (f64, f64, f64) = (0.0, 150.0, 800.0);

pub const CAMERA_MIN_DISTANCE: f64 = 100.0;
pub const CAMERA_MAX_DISTANCE: f64 = 1200.0;

/// Floor clamp applied after every orbit step.
pub const CAMERA_MIN_HEIGHT: f64 = 50.0;

/// Polar angle bounds; 0 looks straight down.
pub const CAMERA_MIN_PHI: f64 = 0.1;
pub const CAMERA_MAX_PHI: f64 = FRAC_PI_2 - 0.1;

/// Orbit radians per pixel of pointer travel.
pub const ORBIT_SPEED: f64 = 0.01;

/// Damping applied to single-finger orbit deltas.
pub const TOUCH_ORBIT_SMOOTHING: f64 = 0.8;

/// Wheel zoom multiplier per notch.
pub const ZOOM_STEP: f64 = 1.08;

/// Pinch dead zone and per-step radius factor.
pub const PINCH_THRESHOLD: f64 = 0.02;
pub const PINCH_STEP: f64 = 0.02;

// ── Measurements ────────────────────────────────────────────────

/// Max distance between a centre and its wall line to count as wall-bound.
pub const WALL_BOUND_TOLERANCE: f64 = 5.0;

/// Off-axis tolerance for two items to be measured against each other.
pub const ALIGNMENT_TOLERANCE: f64 = 20.0;
