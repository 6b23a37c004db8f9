//! Document model: placed fixtures, sparse patches, and the item store.
//!
//! `PlacedItem` is the persistent unit of room content. Gestures never touch
//! it directly; they produce `ItemPatch`es that the batching layer merges and
//! hands to an `ItemStore` as a single functional update. The host owns the
//! real store (and re-materializes the scene from it); `MemoryStore` is the
//! in-process implementation used by the CLI and the tests.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Vec3;

/// Identifier for a placed item, assigned by the host and stable across edits.
pub type ItemId = u64;

/// The closed set of fixtures the planner knows how to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub enum FixtureKind {
    Toilet,
    Sink,
    Bath,
    Shower,
    Radiator,
    Mirror,
    Door,
}

impl FixtureKind {
    pub const ALL: [Self; 7] = [
        Self::Toilet,
        Self::Sink,
        Self::Bath,
        Self::Shower,
        Self::Radiator,
        Self::Mirror,
        Self::Door,
    ];

    /// Display name, matching the serialized form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Toilet => "Toilet",
            Self::Sink => "Sink",
            Self::Bath => "Bath",
            Self::Shower => "Shower",
            Self::Radiator => "Radiator",
            Self::Mirror => "Mirror",
            Self::Door => "Door",
        }
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn default_scale() -> f64 {
    1.0
}

/// A fixture placed in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: FixtureKind,
    /// Centre of the footprint; `y` is elevation off the floor.
    pub position: Vec3,
    /// Radians around the vertical axis.
    #[serde(default)]
    pub rotation: f64,
    /// Uniform scale factor.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl PlacedItem {
    #[must_use]
    pub fn new(id: ItemId, kind: FixtureKind, position: Vec3, rotation: f64) -> Self {
        Self {
            id,
            kind,
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Copy of this item with `patch` applied.
    #[must_use]
    pub fn patched(&self, patch: &ItemPatch) -> Self {
        let mut item = self.clone();
        patch.apply_to(&mut item);
        item
    }
}

/// Sparse update for a placed item. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl ItemPatch {
    #[must_use]
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rotation(rotation: f64) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn scale(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn placement(position: Vec3, rotation: f64) -> Self {
        Self {
            position: Some(position),
            rotation: Some(rotation),
            scale: None,
        }
    }

    /// Fold a later patch into this one, field by field.
    pub fn merge(&mut self, later: &ItemPatch) {
        if later.position.is_some() {
            self.position = later.position;
        }
        if later.rotation.is_some() {
            self.rotation = later.rotation;
        }
        if later.scale.is_some() {
            self.scale = later.scale;
        }
    }

    pub fn apply_to(&self, item: &mut PlacedItem) {
        if let Some(position) = self.position {
            item.position = position;
        }
        if let Some(rotation) = self.rotation {
            item.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            item.scale = scale;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}

/// The host-owned item collection.
///
/// `set_items` is a functional update: the updater receives the current list
/// and returns the next one. Between two `set_items` calls the collection is
/// immutable as far as the planner is concerned.
pub trait ItemStore {
    /// Snapshot of the current items.
    fn items(&self) -> Vec<PlacedItem>;

    /// Replace the collection with `updater(current)`.
    fn set_items(&mut self, updater: &mut dyn FnMut(&[PlacedItem]) -> Vec<PlacedItem>);

    /// Remove an item by id.
    fn delete_item(&mut self, id: ItemId);

    /// Look up a single item.
    fn item(&self, id: ItemId) -> Option<PlacedItem> {
        self.items().into_iter().find(|item| item.id == id)
    }
}

/// Plain in-memory store. Counts commits so callers can observe batching.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<PlacedItem>,
    commits: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_items(items: Vec<PlacedItem>) -> Self {
        Self { items, commits: 0 }
    }

    /// Number of `set_items` / `delete_item` calls so far.
    #[must_use]
    pub fn commits(&self) -> usize {
        self.commits
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PlacedItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemStore for MemoryStore {
    fn items(&self) -> Vec<PlacedItem> {
        self.items.clone()
    }

    fn set_items(&mut self, updater: &mut dyn FnMut(&[PlacedItem]) -> Vec<PlacedItem>) {
        self.items = updater(&self.items);
        self.commits += 1;
    }

    fn delete_item(&mut self, id: ItemId) {
        self.items.retain(|item| item.id != id);
        self.commits += 1;
    }

    fn item(&self, id: ItemId) -> Option<PlacedItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }
}
