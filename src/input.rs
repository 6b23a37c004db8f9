//! Input model: modifier keys, buttons, keys, cursors, and the gesture state
//! machine.
//!
//! `InputState` is the single source of truth for which gesture is active.
//! Each variant carries the context captured at pointer-down (start position,
//! start angle, start scale) so moves compute absolute values from the gesture
//! start rather than accumulating per-event deltas, and so a translate can be
//! rolled back to where it began.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::ItemId;
use crate::geometry::Vec3;

/// Keyboard modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    /// Command on macOS.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl or Cmd.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button that changed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

/// Bitmask of buttons currently held, as reported on move events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons(pub u16);

impl Buttons {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);
    pub const SECONDARY: Self = Self(2);
    pub const MIDDLE: Self = Self(4);

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A keyboard key, named as the browser reports it (`"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.0 == "Delete" || self.0 == "Backspace"
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Grab,
    Grabbing,
    Crosshair,
    RowResize,
    NwResize,
}

impl Cursor {
    /// CSS cursor keyword.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Crosshair => "crosshair",
            Self::RowResize => "row-resize",
            Self::NwResize => "nw-resize",
        }
    }
}

/// UI state that outlives a single gesture.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub selected_id: Option<ItemId>,
    /// Timestamp of the previous single-finger tap, for double-tap delete.
    pub last_tap_ms: Option<f64>,
    /// Finger distance at the last pinch step.
    pub pinch_distance: Option<f64>,
}

/// The active gesture. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture; pointer moves only update the hover cursor.
    #[default]
    Idle,
    /// Dragging an item along the walls.
    Translating {
        id: ItemId,
        /// Position and rotation at pointer-down; restored on a colliding drop.
        start_position: Vec3,
        start_rotation: f64,
        /// Elevation of the horizontal drag plane.
        plane_y: f64,
        /// Item centre minus the plane hit under the pointer at pointer-down.
        offset: Vec3,
    },
    /// Free rotation around the vertical axis.
    RotatingObject {
        id: ItemId,
        /// Pointer angle around the viewport centre at pointer-down.
        start_angle: f64,
        start_rotation: f64,
    },
    /// Uniform scale from vertical pointer travel.
    ScalingObject {
        id: ItemId,
        start_y: f64,
        start_scale: f64,
    },
    /// Elevation from vertical pointer travel.
    AdjustingHeight {
        id: ItemId,
        start_y: f64,
        start_height: f64,
    },
    /// Orbiting the camera around its target.
    OrbitingCamera {
        last_screen: Point,
        /// Started by a touch; uses smoothed deltas and inverted pitch.
        touch: bool,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The item the gesture manipulates, if any.
    #[must_use]
    pub fn item(&self) -> Option<ItemId> {
        match *self {
            Self::Translating { id, .. }
            | Self::RotatingObject { id, .. }
            | Self::ScalingObject { id, .. }
            | Self::AdjustingHeight { id, .. } => Some(id),
            Self::Idle | Self::OrbitingCamera { .. } => None,
        }
    }

    /// Short mode name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Translating { .. } => "translating",
            Self::RotatingObject { .. } => "rotating",
            Self::ScalingObject { .. } => "scaling",
            Self::AdjustingHeight { .. } => "height",
            Self::OrbitingCamera { .. } => "orbit",
        }
    }
}
