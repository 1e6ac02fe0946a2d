//! In-memory collection of server-confirmed items.
//!
//! The store is mutated only with data the server has acknowledged: a list
//! response, a created item, an updated item, or a confirmed delete. Failed
//! operations never touch it, so it cannot hold speculative entries.

use crate::types::Item;

/// Ordered collection of items, insertion order preserved.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a fresh list response.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Append a newly created item. If the id is somehow already present the
    /// existing entry is replaced in place rather than duplicated.
    pub fn append(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => *slot = item,
            None => self.items.push(item),
        }
    }

    /// Replace the item with the same id. Returns false when the id is not
    /// in the store, in which case nothing changes.
    pub fn apply_update(&mut self, item: Item) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Remove the item with this id, returning it when present.
    pub fn remove(&mut self, id: i64) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
