//! Merge batch results into local state.
//!
//! # Design
//! Reconciliation is pure: it mutates the store and selection it is handed
//! and returns the notifications to show, without performing any I/O. A
//! separate dispatcher (the CLI, or a test) decides what to do with the
//! notifications. There is no rollback — each entry's outcome is
//! independent, so a partially successful batch leaves the mixed state.

use std::fmt;

use crate::selection::Selection;
use crate::store::ItemStore;
use crate::types::{CreateBatchResult, DeleteBatchResult};

/// One user-facing warning produced while reconciling a batch result.
///
/// Create failures are identified by title (the item never got an id);
/// delete failures by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    CreateRejected { title: String, error: String },
    DeleteRejected { item_id: i64, error: String },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::CreateRejected { title, error } => {
                write!(f, "could not create \"{title}\": {error}")
            }
            Notification::DeleteRejected { item_id, error } => {
                write!(f, "could not delete item {item_id}: {error}")
            }
        }
    }
}

/// Apply a batch create result: append each confirmed item in response
/// order, emit one warning per failed entry. Failed entries never touch the
/// store.
pub fn apply_create_batch(store: &mut ItemStore, result: CreateBatchResult) -> Vec<Notification> {
    for item in result.success {
        store.append(item);
    }
    result
        .failed
        .into_iter()
        .map(|failure| Notification::CreateRejected {
            title: failure.item.title,
            error: failure.error,
        })
        .collect()
}

/// Apply a batch delete result: remove each confirmed id, emit one warning
/// per failed entry, then prune the selection so it references only items
/// that still exist.
pub fn apply_delete_batch(
    store: &mut ItemStore,
    selection: &mut Selection,
    result: DeleteBatchResult,
) -> Vec<Notification> {
    for id in result.success {
        store.remove(id);
    }
    let notifications = result
        .failed
        .into_iter()
        .map(|failure| Notification::DeleteRejected {
            item_id: failure.item_id,
            error: failure.error,
        })
        .collect();
    selection.retain_present(store);
    notifications
}
