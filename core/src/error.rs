//! Error types for the items API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because callers handle
//! them differently: a missing id is surfaced per-item, while a 4xx carries a
//! server-supplied detail message worth showing verbatim. Other non-2xx
//! statuses land in `HttpError` with the raw status and body. `Transport` is
//! reported by the host executor when the round trip itself fails; no
//! response body is trusted in that case. Per-entry batch failures are data
//! inside `CreateBatchResult` / `DeleteBatchResult`, never an `ApiError`.

use std::fmt;

/// Errors returned by `ItemClient` parse methods and the host executor.
#[derive(Debug)]
pub enum ApiError {
    /// The round trip itself failed (connection refused, DNS, I/O).
    Transport(String),

    /// The server returned 404 — the requested item does not exist.
    NotFound,

    /// The server rejected the request with a 4xx other than 404 and a
    /// detail message describing why.
    Validation { status: u16, detail: String },

    /// The server returned an unexpected non-4xx status.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::NotFound => write!(f, "item not found"),
            ApiError::Validation { status, detail } => {
                write!(f, "rejected ({status}): {detail}")
            }
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
