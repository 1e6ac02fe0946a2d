//! Domain DTOs for the items API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; integration tests catch any drift between the two.
//! Batch responses carry per-entry failures as plain data — a failed entry is
//! never an error at this layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single persisted item returned by the API.
///
/// `id` and `created_at` are server-assigned and never change; every other
/// field may change on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating a new item. Client-only: it has no `id`
/// until the server confirms the create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Request payload for updating an existing item. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Outcome of a batch create. The request itself succeeds even when entries
/// fail; each failed entry echoes the submitted item and the server's reason.
///
/// Both fields must be present in the response body — absence is a
/// deserialization error, anything deeper goes unvalidated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBatchResult {
    pub success: Vec<Item>,
    pub failed: Vec<CreateBatchFailure>,
}

/// One rejected entry of a batch create.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBatchFailure {
    pub item: CreateItem,
    pub error: String,
}

/// Outcome of a batch delete. `success` carries the ids the server removed,
/// in request order.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteBatchResult {
    pub success: Vec<i64>,
    pub failed: Vec<DeleteBatchFailure>,
}

/// One rejected entry of a batch delete.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteBatchFailure {
    pub item_id: i64,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_item_defaults_is_active_to_true() {
        let input: CreateItem = serde_json::from_str(r#"{"title":"No flag"}"#).unwrap();
        assert_eq!(input.title, "No flag");
        assert!(input.description.is_none());
        assert!(input.is_active);
    }

    #[test]
    fn create_item_omits_absent_description() {
        let input = CreateItem {
            title: "Bare".to_string(),
            description: None,
            is_active: true,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn update_item_serializes_only_set_fields() {
        let input = UpdateItem {
            title: Some("New".to_string()),
            ..UpdateItem::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["title"], "New");
        assert!(json.get("description").is_none());
        assert!(json.get("is_active").is_none());
    }

    #[test]
    fn item_roundtrips_through_json() {
        let raw = r#"{"id":7,"title":"Desk","description":null,"is_active":false,"created_at":"2024-05-01T12:00:00Z"}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, 7);
        assert!(item.description.is_none());
        assert!(!item.is_active);
        let back = serde_json::to_string(&item).unwrap();
        let again: Item = serde_json::from_str(&back).unwrap();
        assert_eq!(again, item);
    }

    #[test]
    fn create_batch_result_requires_both_fields() {
        let missing: Result<CreateBatchResult, _> = serde_json::from_str(r#"{"success":[]}"#);
        assert!(missing.is_err());

        let ok: CreateBatchResult = serde_json::from_str(r#"{"success":[],"failed":[]}"#).unwrap();
        assert!(ok.success.is_empty());
        assert!(ok.failed.is_empty());
    }

    #[test]
    fn delete_batch_result_deserializes_failures() {
        let raw = r#"{"success":[1,3],"failed":[{"item_id":2,"error":"Item not found"}]}"#;
        let result: DeleteBatchResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.success, vec![1, 3]);
        assert_eq!(result.failed.len(), 1);
        assert_eq!(result.failed[0].item_id, 2);
        assert_eq!(result.failed[0].error, "Item not found");
    }
}
