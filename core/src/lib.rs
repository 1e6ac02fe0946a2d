//! Client core for the items service.
//!
//! # Overview
//! Everything a front-end needs short of the actual I/O: request building
//! and response parsing (`client`), the ordered in-memory collection of
//! server-confirmed items (`store`), form state and validation (`form`),
//! batch reconciliation with notification events (`reconcile`), and the
//! selection overlay for batch delete (`selection`).
//!
//! # Design
//! - Host-does-IO: `ItemClient` builds `HttpRequest` values and parses
//!   `HttpResponse` values; the host executes the round trip, so the core
//!   is deterministic and testable without a network.
//! - The store holds only items the server has confirmed; failed operations
//!   are no-ops on local state.
//! - Batch endpoints succeed at the transport level even when entries fail;
//!   reconciliation applies the successes and turns each failure into a
//!   `Notification` for a separate dispatcher.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod reconcile;
pub mod selection;
pub mod store;
pub mod types;

pub use client::ItemClient;
pub use error::ApiError;
pub use form::{FormError, FormState, ItemForm, PendingBatch};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use reconcile::{apply_create_batch, apply_delete_batch, Notification};
pub use selection::Selection;
pub use store::ItemStore;
pub use types::{
    CreateBatchFailure, CreateBatchResult, CreateItem, DeleteBatchFailure, DeleteBatchResult,
    Item, UpdateItem,
};
