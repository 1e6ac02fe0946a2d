//! In-process implementation of the items backend contract.
//!
//! Serves the same routes and bodies as the real service so the client can
//! be exercised over actual HTTP in tests. Single-item routes fail whole
//! (404 or 422 with a `{"detail": ...}` body); batch routes always return
//! 200 and report per-entry failures inside the body.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateItem {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateBatchRequest {
    pub items: Vec<CreateItem>,
}

#[derive(Serialize)]
pub struct CreateBatchResponse {
    pub success: Vec<Item>,
    pub failed: Vec<CreateFailure>,
}

#[derive(Serialize)]
pub struct CreateFailure {
    pub item: CreateItem,
    pub error: String,
}

#[derive(Deserialize)]
pub struct DeleteBatchRequest {
    pub item_ids: Vec<i64>,
}

#[derive(Serialize)]
pub struct DeleteBatchResponse {
    pub success: Vec<i64>,
    pub failed: Vec<DeleteFailure>,
}

#[derive(Serialize)]
pub struct DeleteFailure {
    pub item_id: i64,
    pub error: String,
}

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

type Rejection = (StatusCode, Json<ErrorDetail>);

fn not_found() -> Rejection {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDetail {
            detail: "Item not found".to_string(),
        }),
    )
}

fn unprocessable(detail: &str) -> Rejection {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorDetail {
            detail: detail.to_string(),
        }),
    )
}

#[derive(Default)]
pub struct Store {
    items: BTreeMap<i64, Item>,
    next_id: i64,
}

impl Store {
    /// Validate and insert one item, assigning the next id. Returns the
    /// server-side reason on rejection.
    fn create(&mut self, input: CreateItem) -> Result<Item, String> {
        if input.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.items.values().any(|item| item.title == input.title) {
            return Err("duplicate title".to_string());
        }
        self.next_id += 1;
        let item = Item {
            id: self.next_id,
            title: input.title,
            description: input.description,
            is_active: input.is_active,
            created_at: Utc::now(),
        };
        self.items.insert(item.id, item.clone());
        Ok(item)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/items/", get(list_items).post(create_item))
        .route("/api/items/batch", post(create_batch))
        .route("/api/items/batch/delete", post(delete_batch))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> Result<(StatusCode, Json<Item>), Rejection> {
    let mut store = db.write().await;
    match store.create(input) {
        Ok(item) => Ok((StatusCode::CREATED, Json(item))),
        Err(reason) => Err(unprocessable(&reason)),
    }
}

async fn create_batch(
    State(db): State<Db>,
    Json(request): Json<CreateBatchRequest>,
) -> Json<CreateBatchResponse> {
    let mut store = db.write().await;
    let mut response = CreateBatchResponse {
        success: Vec::new(),
        failed: Vec::new(),
    };
    for input in request.items {
        match store.create(input.clone()) {
            Ok(item) => response.success.push(item),
            Err(error) => response.failed.push(CreateFailure { item: input, error }),
        }
    }
    Json(response)
}

async fn get_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Item>, Rejection> {
    let store = db.read().await;
    store.items.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateItem>,
) -> Result<Json<Item>, Rejection> {
    let mut store = db.write().await;
    let item = store.items.get_mut(&id).ok_or_else(not_found)?;
    if let Some(title) = input.title {
        item.title = title;
    }
    if let Some(description) = input.description {
        item.description = Some(description);
    }
    if let Some(is_active) = input.is_active {
        item.is_active = is_active;
    }
    Ok(Json(item.clone()))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, Rejection> {
    let mut store = db.write().await;
    store
        .items
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}

async fn delete_batch(
    State(db): State<Db>,
    Json(request): Json<DeleteBatchRequest>,
) -> Json<DeleteBatchResponse> {
    let mut store = db.write().await;
    let mut response = DeleteBatchResponse {
        success: Vec::new(),
        failed: Vec::new(),
    };
    for id in request.item_ids {
        if store.items.remove(&id).is_some() {
            response.success.push(id);
        } else {
            response.failed.push(DeleteFailure {
                item_id: id,
                error: "Item not found".to_string(),
            });
        }
    }
    Json(response)
}
