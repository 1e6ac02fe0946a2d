//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`; the
//! host executes the round trip in between. Batch endpoints follow the
//! partial-failure contract: the call returns 200 even when entries fail,
//! and per-entry outcomes ride inside the body.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateBatchResult, CreateItem, DeleteBatchResult, Item, UpdateItem};

/// Wire shape of a batch create request.
#[derive(Serialize)]
struct CreateBatchBody<'a> {
    items: &'a [CreateItem],
}

/// Wire shape of a batch delete request.
#[derive(Serialize)]
struct DeleteBatchBody<'a> {
    item_ids: &'a [i64],
}

/// Synchronous, stateless client for the items API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round trip between `build_*` and `parse_*`. No retry, no backoff: every
/// operation is exactly one round trip.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Collection path. The backend routes the collection under a trailing
    /// slash, so the slash is part of the contract.
    fn collection(&self) -> String {
        format!("{}/api/items/", self.base_url)
    }

    fn member(&self, id: i64) -> String {
        format!("{}/api/items/{id}", self.base_url)
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.collection())
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.member(id))
    }

    pub fn build_create_item(&self, input: &CreateItem) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection(), body))
    }

    pub fn build_create_batch(&self, items: &[CreateItem]) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&CreateBatchBody { items })
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let path = format!("{}/api/items/batch", self.base_url);
        Ok(HttpRequest::json(HttpMethod::Post, path, body))
    }

    pub fn build_update_item(&self, id: i64, input: &UpdateItem) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Put, self.member(id), body))
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, self.member(id))
    }

    pub fn build_delete_batch(&self, item_ids: &[i64]) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&DeleteBatchBody { item_ids })
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let path = format!("{}/api/items/batch/delete", self.base_url);
        Ok(HttpRequest::json(HttpMethod::Post, path, body))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_create_batch(
        &self,
        response: HttpResponse,
    ) -> Result<CreateBatchResult, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    pub fn parse_delete_batch(
        &self,
        response: HttpResponse,
    ) -> Result<DeleteBatchResult, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        status @ 400..=499 => Err(ApiError::Validation {
            status,
            detail: error_detail(&response.body),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

/// Pull the `detail` field out of a FastAPI-style error body, falling back
/// to the raw body when the shape does not match.
fn error_detail(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string())
}
