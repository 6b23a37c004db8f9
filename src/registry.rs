//! Static per-type fixture data: footprints, wall orientation policy, wall
//! buffers, and vertical placement rules.
//!
//! Every lookup is total. A kind without an entry logs a warning and falls
//! back to face-into-room orientation and the configured generic buffer, so a
//! placement request never fails on missing data.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::consts::{MIRROR_HEIGHT_MAX, MIRROR_VERTICAL_ANCHOR};
use crate::doc::FixtureKind;

/// One of the four room walls. North is `-z`, east is `+x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    North,
    South,
    East,
    West,
}

impl Wall {
    /// Evaluation order; also the tie-break priority.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Whether the wall runs along x (so snapping moves `z`).
    #[must_use]
    pub fn runs_along_x(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

/// Footprint in centimeters at scale 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along x before rotation.
    pub width: f64,
    /// Extent along z before rotation.
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    #[must_use]
    pub fn scaled(self, scale: f64) -> Self {
        Self {
            width: self.width * scale,
            depth: self.depth * scale,
            height: self.height * scale,
        }
    }
}

/// Base rotation per wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallAngles {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl WallAngles {
    #[must_use]
    pub fn for_wall(&self, wall: Wall) -> f64 {
        match wall {
            Wall::North => self.north,
            Wall::South => self.south,
            Wall::East => self.east,
            Wall::West => self.west,
        }
    }
}

const FACE_INTO_ROOM: WallAngles = WallAngles {
    north: 0.0,
    south: PI,
    east: -FRAC_PI_2,
    west: FRAC_PI_2,
};

const FLUSH_WITH_WALL: WallAngles = WallAngles {
    north: FRAC_PI_2,
    south: FRAC_PI_2,
    east: 0.0,
    west: 0.0,
};

/// How a fixture turns when it meets a wall.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationPolicy {
    /// Front faces the room centre.
    #[default]
    FaceIntoRoom,
    /// Long side lies along the wall.
    FlushWithWall,
    /// Explicit per-wall angles.
    Custom(WallAngles),
}

impl OrientationPolicy {
    #[must_use]
    pub fn angles(&self) -> WallAngles {
        match self {
            Self::FaceIntoRoom => FACE_INTO_ROOM,
            Self::FlushWithWall => FLUSH_WITH_WALL,
            Self::Custom(angles) => *angles,
        }
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::FaceIntoRoom => "face_into_room",
            Self::FlushWithWall => "flush_with_wall",
            Self::Custom(_) => "custom",
        }
    }
}

/// Everything the planner knows about one fixture kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Footprint, if the kind has one.
    pub dimensions: Option<Dimensions>,
    pub policy: OrientationPolicy,
    /// Added to the policy angle (a mirror is flipped by π).
    #[serde(default)]
    pub rotation_offset: f64,
    /// Explicit wall buffer at scale 1; overrides the footprint-derived one.
    #[serde(default)]
    pub wall_buffer: Option<f64>,
    /// Default elevation for a fresh placement.
    #[serde(default)]
    pub vertical_anchor: f64,
    /// Replaces the configured elevation cap for this kind.
    #[serde(default)]
    pub max_height_override: Option<f64>,
    /// Rotation gestures and room re-snaps keep the item's own angle.
    #[serde(default)]
    pub allow_free_rotation: bool,
    #[serde(default)]
    pub description: String,
}

impl RegistryEntry {
    /// Floor-standing entry with face-into-room orientation.
    #[must_use]
    pub fn with_footprint(dimensions: Dimensions) -> Self {
        Self {
            dimensions: Some(dimensions),
            policy: OrientationPolicy::FaceIntoRoom,
            rotation_offset: 0.0,
            wall_buffer: None,
            vertical_anchor: 0.0,
            max_height_override: None,
            allow_free_rotation: false,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn policy(mut self, policy: OrientationPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn rotation_offset(mut self, offset: f64) -> Self {
        self.rotation_offset = offset;
        self
    }

    #[must_use]
    pub fn wall_buffer(mut self, buffer: f64) -> Self {
        self.wall_buffer = Some(buffer);
        self
    }

    #[must_use]
    pub fn vertical_anchor(mut self, anchor: f64) -> Self {
        self.vertical_anchor = anchor;
        self
    }

    #[must_use]
    pub fn max_height(mut self, max: f64) -> Self {
        self.max_height_override = Some(max);
        self
    }

    #[must_use]
    pub fn free_rotation(mut self, allow: bool) -> Self {
        self.allow_free_rotation = allow;
        self
    }

    #[must_use]
    pub fn describe(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }
}

/// Descriptive orientation metadata for UI surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrientationInfo {
    pub policy: &'static str,
    pub description: String,
    pub has_offset: bool,
}

/// Lookup table from fixture kind to its entry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<FixtureKind, RegistryEntry>,
}

impl Registry {
    /// Registry with no entries; every lookup takes the fallback path.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock bathroom fixtures.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.insert(
            FixtureKind::Toilet,
            RegistryEntry::with_footprint(Dimensions::new(60.0, 80.0, 80.0))
                .describe("Faces into the room; cistern against the wall"),
        );
        registry.insert(
            FixtureKind::Sink,
            RegistryEntry::with_footprint(Dimensions::new(60.0, 60.0, 80.0))
                .describe("Faces into the room; basin against the wall"),
        );
        registry.insert(
            FixtureKind::Bath,
            RegistryEntry::with_footprint(Dimensions::new(170.0, 80.0, 60.0))
                .describe("Faces into the room; long side along the wall"),
        );
        registry.insert(
            FixtureKind::Shower,
            RegistryEntry::with_footprint(Dimensions::new(80.0, 80.0, 200.0))
                .describe("Faces into the room; tray against the wall"),
        );
        registry.insert(
            FixtureKind::Radiator,
            RegistryEntry::with_footprint(Dimensions::new(80.0, 10.0, 60.0))
                .wall_buffer(10.0)
                .describe("Mounted flat on the wall"),
        );
        registry.insert(
            FixtureKind::Mirror,
            RegistryEntry::with_footprint(Dimensions::new(80.0, 5.0, 100.0))
                .rotation_offset(PI)
                .wall_buffer(5.0)
                .vertical_anchor(MIRROR_VERTICAL_ANCHOR)
                .max_height(MIRROR_HEIGHT_MAX)
                .describe("Hung on the wall, reflective side into the room"),
        );
        registry.insert(
            FixtureKind::Door,
            RegistryEntry::with_footprint(Dimensions::new(10.0, 80.0, 200.0))
                .policy(OrientationPolicy::FlushWithWall)
                .describe("Set into the wall, leaf flush with its surface"),
        );
        registry
    }

    pub fn insert(&mut self, kind: FixtureKind, entry: RegistryEntry) {
        self.entries.insert(kind, entry);
    }

    #[must_use]
    pub fn entry(&self, kind: FixtureKind) -> Option<&RegistryEntry> {
        self.entries.get(&kind)
    }

    fn entry_or_warn(&self, kind: FixtureKind) -> Option<&RegistryEntry> {
        let entry = self.entries.get(&kind);
        if entry.is_none() {
            tracing::warn!(kind = %kind, "no registry entry; using face-into-room defaults");
        }
        entry
    }

    /// Footprint at scale 1, if known.
    #[must_use]
    pub fn dimensions(&self, kind: FixtureKind) -> Option<Dimensions> {
        self.entry_or_warn(kind).and_then(|entry| entry.dimensions)
    }

    /// Perpendicular distance kept between the item's centre and a wall.
    ///
    /// Explicit buffer times scale, else half the larger footprint edge times
    /// scale, else `default`.
    #[must_use]
    pub fn wall_buffer(&self, kind: FixtureKind, scale: f64, default: f64) -> f64 {
        let Some(entry) = self.entry_or_warn(kind) else {
            return default;
        };
        if let Some(buffer) = entry.wall_buffer {
            return buffer * scale;
        }
        match entry.dimensions {
            Some(dims) => dims.width.max(dims.depth) * scale / 2.0,
            None => default,
        }
    }

    /// Policy angle for `wall` plus the kind's rotation offset.
    #[must_use]
    pub fn rotation_for_wall(&self, kind: FixtureKind, wall: Wall) -> f64 {
        match self.entry_or_warn(kind) {
            Some(entry) => entry.policy.angles().for_wall(wall) + entry.rotation_offset,
            None => FACE_INTO_ROOM.for_wall(wall),
        }
    }

    #[must_use]
    pub fn orientation_info(&self, kind: FixtureKind) -> OrientationInfo {
        match self.entry_or_warn(kind) {
            Some(entry) => OrientationInfo {
                policy: entry.policy.tag(),
                description: if entry.description.is_empty() {
                    "Default orientation".to_owned()
                } else {
                    entry.description.clone()
                },
                has_offset: entry.rotation_offset != 0.0,
            },
            None => OrientationInfo {
                policy: OrientationPolicy::FaceIntoRoom.tag(),
                description: "Default orientation".to_owned(),
                has_offset: false,
            },
        }
    }

    /// Default elevation for a fresh placement.
    #[must_use]
    pub fn vertical_anchor(&self, kind: FixtureKind) -> f64 {
        self.entry(kind).map_or(0.0, |entry| entry.vertical_anchor)
    }

    /// Elevation cap: the kind's override, else `default`.
    #[must_use]
    pub fn max_height(&self, kind: FixtureKind, default: f64) -> f64 {
        self.entry(kind)
            .and_then(|entry| entry.max_height_override)
            .unwrap_or(default)
    }

    #[must_use]
    pub fn allows_free_rotation(&self, kind: FixtureKind) -> bool {
        self.entry(kind)
            .is_some_and(|entry| entry.allow_free_rotation)
    }
}
