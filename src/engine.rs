//! Interaction controller.
//!
//! `EditorCore` turns raw pointer, touch, wheel, and keyboard events into
//! constrained item updates. It owns no rendering: the host forwards events,
//! applies the returned [`Action`]s, and re-materializes the scene from the
//! item store. Picking goes through [`ScenePicker`], highlight and outline
//! colour through [`FeedbackSink`].
//!
//! Every handler is total. A missing item, an empty pick, or a degenerate room
//! turns into a no-op, never an error.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::Rng;

use crate::batch::UpdateBatch;
use crate::camera::{OrbitCamera, Point, Viewport};
use crate::collision::{Body, colliding_pairs, would_collide_with_existing};
use crate::config::EditorConfig;
use crate::doc::{FixtureKind, ItemId, ItemPatch, ItemStore, PlacedItem};
use crate::feedback::{FeedbackSink, report};
use crate::geometry::{Room, Vec3, clamp_span};
use crate::input::{Button, Buttons, Cursor, InputState, Key, Modifiers, UiState};
use crate::measure::{Measurements, measure};
use crate::pick::{Hit, ScenePicker, pick};
use crate::placement::find_free_wall_position;
use crate::registry::Registry;
use crate::walls::{constrain_all_to_room, constrain_to_walls};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCursor(Cursor),
    SelectionChanged(Option<ItemId>),
    ItemDeleted(ItemId),
    CameraMoved,
    RenderNeeded,
}

/// Result of [`EditorCore::place_item`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceOutcome {
    pub item: PlacedItem,
    /// No free wall spot was found; the item overlaps another.
    pub colliding: bool,
}

pub struct EditorCore<S, F, P> {
    pub store: S,
    pub feedback: F,
    pub picker: P,
    pub registry: Registry,
    pub config: EditorConfig,
    pub room: Room,
    pub viewport: Viewport,
    pub camera: OrbitCamera,
    pub ui: UiState,
    pub input: InputState,
    batch: UpdateBatch,
}

impl<S: ItemStore, F: FeedbackSink, P: ScenePicker> EditorCore<S, F, P> {
    #[must_use]
    pub fn new(store: S, feedback: F, picker: P) -> Self {
        Self {
            store,
            feedback,
            picker,
            registry: Registry::builtin(),
            config: EditorConfig::default(),
            room: Room::default(),
            viewport: Viewport::default(),
            camera: OrbitCamera::default(),
            ui: UiState::default(),
            input: InputState::Idle,
            batch: UpdateBatch::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn camera(&self) -> OrbitCamera {
        self.camera
    }

    /// Number of items with buffered, uncommitted updates.
    #[must_use]
    pub fn pending_updates(&self) -> usize {
        self.batch.pending_len()
    }

    /// The item as the user currently sees it: store state plus pending patch.
    #[must_use]
    pub fn live_item(&self, id: ItemId) -> Option<PlacedItem> {
        let item = self.store.item(id)?;
        Some(match self.batch.pending_for(id) {
            Some(patch) => item.patched(patch),
            None => item,
        })
    }

    /// Size and free space around an item.
    #[must_use]
    pub fn measurements(&self, id: ItemId) -> Option<Measurements> {
        let item = self.live_item(id)?;
        measure(
            &self.registry,
            &self.config,
            self.room,
            &item,
            &self.store.items(),
        )
    }

    /// Every pair of overlapping items.
    #[must_use]
    pub fn conflicts(&self) -> Vec<(ItemId, ItemId)> {
        colliding_pairs(
            &self.registry,
            &self.store.items(),
            self.config.collision_margin,
        )
    }

    // --- Room / placement ---

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    /// Resize the room and re-snap every item to the new walls.
    pub fn set_room(&mut self, room: Room) -> Vec<Action> {
        let mut actions = self.finish_gesture();
        self.room = room;
        let (registry, config) = (&self.registry, &self.config);
        let mut resnap = |all: &[PlacedItem]| constrain_all_to_room(registry, config, room, all);
        self.store.set_items(&mut resnap);
        tracing::debug!(
            width = room.width,
            depth = room.depth,
            "room resized; items re-snapped"
        );
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Find a wall spot for a new item and add it to the store.
    pub fn place_item(&mut self, id: ItemId, kind: FixtureKind, scale: f64) -> PlaceOutcome {
        let mut rng = rand::rng();
        self.place_item_with_rng(id, kind, scale, &mut rng)
    }

    /// [`EditorCore::place_item`] with a caller-supplied RNG.
    pub fn place_item_with_rng<R: Rng>(
        &mut self,
        id: ItemId,
        kind: FixtureKind,
        scale: f64,
        rng: &mut R,
    ) -> PlaceOutcome {
        let scale = clamp_span(scale, self.config.scale_min, self.config.scale_max);
        let items = self.store.items();
        let placement = find_free_wall_position(
            &self.registry,
            &self.config,
            self.room,
            kind,
            scale,
            &items,
            self.config.placement_attempts,
            rng,
        );
        let item = PlacedItem {
            id,
            kind,
            position: placement.snap.position,
            rotation: placement.snap.rotation,
            scale,
        };
        let inserted = item.clone();
        self.store.set_items(&mut |items: &[PlacedItem]| {
            let mut next: Vec<PlacedItem> = items
                .iter()
                .filter(|existing| existing.id != id)
                .cloned()
                .collect();
            next.push(inserted.clone());
            next
        });
        tracing::debug!(id, kind = %kind, colliding = placement.colliding, "item placed");
        PlaceOutcome {
            item,
            colliding: placement.colliding,
        }
    }

    // --- Selection ---

    /// Drop the selection, ending any active gesture first.
    pub fn clear_selection(&mut self) -> Vec<Action> {
        let mut actions = self.finish_gesture();
        if let Some(id) = self.ui.selected_id.take() {
            report(self.feedback.highlight(id, false), "highlight");
            actions.push(Action::SelectionChanged(None));
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn deselect_unless(&mut self, keep: Option<ItemId>, actions: &mut Vec<Action>) {
        let Some(current) = self.ui.selected_id.filter(|current| Some(*current) != keep) else {
            return;
        };
        report(self.feedback.highlight(current, false), "highlight");
        self.ui.selected_id = None;
        if keep.is_none() {
            actions.push(Action::SelectionChanged(None));
        }
    }

    fn select(&mut self, id: ItemId, actions: &mut Vec<Action>) {
        if self.ui.selected_id != Some(id) {
            self.ui.selected_id = Some(id);
            actions.push(Action::SelectionChanged(Some(id)));
        }
        report(self.feedback.highlight(id, true), "highlight");
        let colliding = self.live_item(id).is_some_and(|item| self.collides(&item));
        report(self.feedback.set_outline_color(colliding), "outline");
    }

    fn delete_selected(&mut self, actions: &mut Vec<Action>) {
        let Some(id) = self.ui.selected_id.take() else {
            return;
        };
        report(self.feedback.highlight(id, false), "highlight");
        self.store.delete_item(id);
        tracing::debug!(id, "item deleted");
        actions.push(Action::ItemDeleted(id));
        actions.push(Action::SelectionChanged(None));
        actions.push(Action::RenderNeeded);
    }

    // --- Pointer input ---

    pub fn on_pointer_down(
        &mut self,
        screen: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        let mut actions = self.finish_gesture();
        let hit = self.pick_at(screen);
        self.deselect_unless(hit.map(|h| h.item), &mut actions);

        let Some(hit) = hit else {
            if button == Button::Primary {
                self.input = InputState::OrbitingCamera {
                    last_screen: screen,
                    touch: false,
                };
                actions.push(Action::SetCursor(Cursor::Grabbing));
            }
            actions.push(Action::RenderNeeded);
            return actions;
        };

        self.select(hit.item, &mut actions);
        let Some(item) = self.live_item(hit.item) else {
            actions.push(Action::RenderNeeded);
            return actions;
        };

        let cursor = match button {
            Button::Secondary => {
                let center = self.viewport.center();
                self.input = InputState::RotatingObject {
                    id: item.id,
                    start_angle: (screen.y - center.y).atan2(screen.x - center.x),
                    start_rotation: item.rotation,
                };
                Some(Cursor::Crosshair)
            }
            Button::Primary if modifiers.command() => {
                self.input = InputState::AdjustingHeight {
                    id: item.id,
                    start_y: screen.y,
                    start_height: item.position.y,
                };
                Some(Cursor::RowResize)
            }
            Button::Primary if modifiers.alt => {
                self.input = InputState::ScalingObject {
                    id: item.id,
                    start_y: screen.y,
                    start_scale: item.scale,
                };
                Some(Cursor::NwResize)
            }
            Button::Primary => {
                self.start_translate(&item, screen);
                Some(Cursor::Grabbing)
            }
            Button::Middle => None,
        };

        if let Some(cursor) = cursor {
            self.batch.begin();
            tracing::debug!(id = item.id, mode = self.input.name(), "gesture started");
            actions.push(Action::SetCursor(cursor));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_move(&mut self, screen: Point, buttons: Buttons) -> Vec<Action> {
        if !self.input.is_idle() && buttons.is_empty() {
            tracing::debug!(
                mode = self.input.name(),
                "no buttons held; ending stale gesture"
            );
            return self.finish_gesture();
        }

        match self.input {
            InputState::Idle => {
                let cursor = if self.pick_at(screen).is_some() {
                    Cursor::Grab
                } else {
                    Cursor::Default
                };
                vec![Action::SetCursor(cursor)]
            }
            InputState::Translating { .. } => {
                self.drag_to(screen);
                vec![Action::RenderNeeded]
            }
            InputState::RotatingObject {
                id,
                start_angle,
                start_rotation,
            } => {
                let center = self.viewport.center();
                let angle = (screen.y - center.y).atan2(screen.x - center.x);
                let rotation = start_rotation + angle - start_angle;
                let patch = ItemPatch::rotation(rotation);
                self.batch.queue_update(&mut self.store, id, patch);
                vec![Action::RenderNeeded]
            }
            InputState::ScalingObject {
                id,
                start_y,
                start_scale,
            } => {
                let scale = clamp_span(
                    start_scale + (start_y - screen.y) * self.config.scale_per_px,
                    self.config.scale_min,
                    self.config.scale_max,
                );
                let patch = ItemPatch::scale(scale);
                self.batch.queue_update(&mut self.store, id, patch);
                vec![Action::RenderNeeded]
            }
            InputState::AdjustingHeight {
                id,
                start_y,
                start_height,
            } => {
                if let Some(item) = self.live_item(id) {
                    let max = self.registry.max_height(item.kind, self.config.height_max);
                    let y = clamp_span(
                        start_height + (start_y - screen.y) * self.config.height_per_px,
                        self.config.height_min,
                        max,
                    );
                    let patch = ItemPatch::position(item.position.with_y(y));
                    self.batch.queue_update(&mut self.store, id, patch);
                }
                vec![Action::RenderNeeded]
            }
            InputState::OrbitingCamera { last_screen, touch } => {
                self.orbit(last_screen, screen, touch);
                vec![Action::CameraMoved, Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen: Point, _button: Button) -> Vec<Action> {
        self.finish_gesture()
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> Vec<Action> {
        self.camera.zoom_wheel(delta_y);
        vec![Action::CameraMoved, Action::RenderNeeded]
    }

    /// Tab hidden, pointer left the canvas, or a document-level release.
    pub fn on_focus_lost(&mut self) -> Vec<Action> {
        self.finish_gesture()
    }

    // --- Touch input ---

    /// `touches` are the fingers currently down; `now_ms` is the event time.
    pub fn on_touch_start(&mut self, touches: &[Point], now_ms: f64) -> Vec<Action> {
        match touches {
            [one] => self.single_touch_start(*one, now_ms),
            [a, b] => {
                self.ui.pinch_distance = Some(a.distance(*b));
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        match touches {
            [one] => self.on_pointer_move(*one, Buttons::PRIMARY),
            [a, b] => {
                let distance = a.distance(*b);
                let Some(last) = self.ui.pinch_distance.filter(|d| *d > 0.0) else {
                    self.ui.pinch_distance = Some(distance);
                    return Vec::new();
                };
                if self.camera.pinch(distance / last) {
                    self.ui.pinch_distance = Some(distance);
                    vec![Action::CameraMoved, Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.ui.pinch_distance = None;
        self.finish_gesture()
    }

    fn single_touch_start(&mut self, screen: Point, now_ms: f64) -> Vec<Action> {
        let mut actions = self.finish_gesture();
        let hit = self.pick_at(screen);

        let tapped_selected = hit.is_some_and(|h| Some(h.item) == self.ui.selected_id);
        let previous_tap = self.ui.last_tap_ms.replace(now_ms);
        let window = self.config.double_tap_ms;
        let quick = previous_tap.is_some_and(|last| now_ms - last < window);
        if tapped_selected && quick {
            self.ui.last_tap_ms = None;
            self.delete_selected(&mut actions);
            return actions;
        }

        self.deselect_unless(hit.map(|h| h.item), &mut actions);
        match hit.and_then(|h| self.live_item(h.item)) {
            Some(item) => {
                self.select(item.id, &mut actions);
                self.start_translate(&item, screen);
                self.batch.begin();
                tracing::debug!(id = item.id, "touch drag started");
            }
            None => {
                self.input = InputState::OrbitingCamera {
                    last_screen: screen,
                    touch: true,
                };
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_delete() {
            let mut actions = self.finish_gesture();
            self.delete_selected(&mut actions);
            return actions;
        }
        if key.is_escape() {
            return self.clear_selection();
        }
        Vec::new()
    }

    // --- Gesture internals ---

    fn pick_at(&self, screen: Point) -> Option<Hit> {
        pick(&self.picker, self.viewport.to_ndc(screen))
    }

    fn collides(&self, item: &PlacedItem) -> bool {
        would_collide_with_existing(
            &self.registry,
            &Body::from(item),
            Some(item.id),
            &self.store.items(),
            self.config.collision_margin,
        )
    }

    /// Where the pointer's ray meets the horizontal plane at `plane_y`.
    fn plane_point(&self, screen: Point, plane_y: f64) -> Option<Vec3> {
        let ray = self.picker.ray(self.viewport.to_ndc(screen))?;
        ray.intersect_horizontal_plane(plane_y)
    }

    fn start_translate(&mut self, item: &PlacedItem, screen: Point) {
        let plane_y = item.position.y;
        let offset = match self.plane_point(screen, plane_y) {
            Some(hit) => (item.position - hit).with_y(0.0),
            None => Vec3::default(),
        };
        self.input = InputState::Translating {
            id: item.id,
            start_position: item.position,
            start_rotation: item.rotation,
            plane_y,
            offset,
        };
    }

    fn drag_to(&mut self, screen: Point) {
        let (id, plane_y, offset) = match self.input {
            InputState::Translating {
                id,
                plane_y,
                offset,
                ..
            } => (id, plane_y, offset),
            _ => return,
        };
        let Some(item) = self.live_item(id) else {
            return;
        };
        let Some(point) = self.plane_point(screen, plane_y) else {
            return;
        };

        let snap = constrain_to_walls(
            &self.registry,
            &self.config,
            self.room,
            point + offset,
            item.kind,
            item.scale,
        );
        let moved = PlacedItem {
            position: snap.position,
            rotation: snap.rotation,
            ..item.clone()
        };
        let colliding = self.collides(&moved);
        report(self.feedback.set_outline_color(colliding), "outline");

        let patch = if self.registry.allows_free_rotation(item.kind) {
            ItemPatch::position(snap.position)
        } else {
            ItemPatch::placement(snap.position, snap.rotation)
        };
        self.batch.queue_update(&mut self.store, id, patch);
    }

    fn orbit(&mut self, last: Point, screen: Point, touch: bool) {
        let speed = self.config.orbit_speed;
        let (dx, dy) = (screen.x - last.x, screen.y - last.y);
        if touch {
            let step = self.config.touch_orbit_smoothing * speed;
            self.camera.orbit(-dx * step, dy * step);
        } else {
            self.camera.orbit(-dx * speed, -dy * speed);
        }
        self.input = InputState::OrbitingCamera {
            last_screen: screen,
            touch,
        };
    }

    /// End the active gesture: flush buffered updates, roll a colliding drop
    /// back to its start when collision prevention is on, return to idle.
    fn finish_gesture(&mut self) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        if state.is_idle() {
            return Vec::new();
        }
        let flushed = self.batch.apply_pending(&mut self.store);
        tracing::debug!(mode = state.name(), flushed, "gesture ended");

        if let InputState::Translating {
            id,
            start_position,
            start_rotation,
            ..
        } = state
        {
            self.settle_drop(id, start_position, start_rotation);
        }
        vec![Action::SetCursor(Cursor::Default), Action::RenderNeeded]
    }

    /// Outline the dropped item; with collision prevention on, a colliding
    /// drop goes back to its start and the outline reflects that spot.
    fn settle_drop(&mut self, id: ItemId, start_position: Vec3, start_rotation: f64) {
        let Some(item) = self.store.item(id) else {
            return;
        };
        let colliding = self.collides(&item);
        if !(colliding && self.config.prevent_collision) {
            report(self.feedback.set_outline_color(colliding), "outline");
            return;
        }
        let restore = ItemPatch::placement(start_position, start_rotation);
        self.batch.queue_update(&mut self.store, id, restore);
        let still_colliding = self.store.item(id).is_some_and(|back| self.collides(&back));
        report(self.feedback.set_outline_color(still_colliding), "outline");
        tracing::debug!(id, still_colliding, "colliding drop rolled back");
    }
}
