//! Per-gesture update batching.
//!
//! While a gesture is active, patches are merged per item (last write wins per
//! field) instead of hitting the store on every pointer move. Gesture end
//! flushes everything as one `set_items` call. Outside a gesture a patch is
//! committed immediately.

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;

use std::collections::BTreeMap;

use crate::doc::{ItemId, ItemPatch, ItemStore, PlacedItem};

#[derive(Debug, Clone, Default)]
pub struct UpdateBatch {
    active: bool,
    pending: BTreeMap<ItemId, ItemPatch>,
}

impl UpdateBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start buffering.
    pub fn begin(&mut self) {
        self.active = true;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Buffer `patch` during a gesture, otherwise commit it now.
    pub fn queue_update<S: ItemStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: ItemId,
        patch: ItemPatch,
    ) {
        if patch.is_empty() {
            return;
        }
        if self.active {
            self.pending.entry(id).or_default().merge(&patch);
        } else {
            commit(store, &BTreeMap::from([(id, patch)]));
        }
    }

    /// Commit every buffered patch in one store update and stop buffering.
    ///
    /// Returns how many items were patched.
    pub fn apply_pending<S: ItemStore + ?Sized>(&mut self, store: &mut S) -> usize {
        self.active = false;
        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            commit(store, &pending);
            tracing::debug!(items = pending.len(), "flushed pending updates");
        }
        pending.len()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn pending_for(&self, id: ItemId) -> Option<&ItemPatch> {
        self.pending.get(&id)
    }
}

fn commit<S: ItemStore + ?Sized>(store: &mut S, patches: &BTreeMap<ItemId, ItemPatch>) {
    store.set_items(&mut |items: &[PlacedItem]| {
        items
            .iter()
            .map(|item| match patches.get(&item.id) {
                Some(patch) => item.patched(patch),
                None => item.clone(),
            })
            .collect()
    });
}
