//! Selection overlay for batch delete.
//!
//! A plain set of item ids kept next to the store, never inside it. The
//! overlay can lag behind the store between operations; reconciliation calls
//! `retain_present` so it never ends up pointing at deleted items.

use std::collections::BTreeSet;

use crate::store::ItemStore;

#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: BTreeSet<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one id, returning whether it is selected afterwards.
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    /// "Select all" toggle: if every item in the store is already selected,
    /// clear the selection; otherwise select every item.
    pub fn toggle_all(&mut self, store: &ItemStore) {
        let ids = store.ids();
        if !ids.is_empty() && ids.iter().all(|id| self.selected.contains(id)) {
            self.selected.clear();
        } else {
            self.selected = ids.into_iter().collect();
        }
    }

    /// Drop ids that no longer exist in the store.
    pub fn retain_present(&mut self, store: &ItemStore) {
        self.selected.retain(|id| store.contains(*id));
    }

    pub fn contains(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
