use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Item};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_items_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/api/items/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert!(items.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_item_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/items/",
            r#"{"title":"Desk","description":"standing"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Item = body_json(resp).await;
    assert_eq!(item.id, 1);
    assert_eq!(item.title, "Desk");
    assert_eq!(item.description.as_deref(), Some("standing"));
    assert!(item.is_active);
}

#[tokio::test]
async fn create_item_blank_title_returns_422_with_detail() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/items/", r#"{"title":"   "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "title must not be empty");
}

#[tokio::test]
async fn create_item_malformed_json_is_rejected() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/api/items/", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_item_not_found() {
    let app = app();
    let resp = app.oneshot(get_request("/api/items/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "Item not found");
}

#[tokio::test]
async fn get_item_bad_id_returns_400() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/items/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_item_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request("PUT", "/api/items/99", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- delete ---

#[tokio::test]
async fn delete_item_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/items/99")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- batch create ---

#[tokio::test]
async fn create_batch_reports_per_entry_outcomes() {
    use tower::Service;

    let mut app = app().into_service();

    // Seed one item so the batch can collide with it.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/items/", r#"{"title":"Taken"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/items/batch",
            r#"{"items":[{"title":"Fresh"},{"title":"Taken"},{"title":"  "}]}"#,
        ))
        .await
        .unwrap();

    // Partial failure still answers 200; outcomes ride in the body.
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;

    let success = body["success"].as_array().unwrap();
    assert_eq!(success.len(), 1);
    assert_eq!(success[0]["title"], "Fresh");
    assert_eq!(success[0]["id"], 2);

    let failed = body["failed"].as_array().unwrap();
    assert_eq!(failed.len(), 2);
    assert_eq!(failed[0]["item"]["title"], "Taken");
    assert_eq!(failed[0]["error"], "duplicate title");
    assert_eq!(failed[1]["error"], "title must not be empty");
}

#[tokio::test]
async fn create_batch_duplicate_within_same_batch_fails_second_entry() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/items/batch",
            r#"{"items":[{"title":"Twin"},{"title":"Twin"}]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["success"].as_array().unwrap().len(), 1);
    assert_eq!(body["failed"].as_array().unwrap().len(), 1);
    assert_eq!(body["failed"][0]["error"], "duplicate title");
}

// --- batch delete ---

#[tokio::test]
async fn delete_batch_reports_missing_ids() {
    use tower::Service;

    let mut app = app().into_service();

    for title in ["one", "two", "three"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/api/items/",
                &format!(r#"{{"title":"{title}"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // Delete id 2 up front so the batch hits a gone id.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri("/api/items/2")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/items/batch/delete",
            r#"{"item_ids":[1,2,3]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["success"], serde_json::json!([1, 3]));
    assert_eq!(body["failed"].as_array().unwrap().len(), 1);
    assert_eq!(body["failed"][0]["item_id"], 2);
    assert_eq!(body["failed"][0]["error"], "Item not found");

    // The store is left in the mixed state the batch implies.
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/items/"))
        .await
        .unwrap();
    let items: Vec<Item> = body_json(resp).await;
    assert!(items.is_empty());
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/items/", r#"{"title":"Walk dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Item = body_json(resp).await;
    assert_eq!(created.title, "Walk dog");
    assert!(created.is_active);
    let id = created.id;

    // list — should contain the one item
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/items/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, id);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/api/items/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Item = body_json(resp).await;
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.created_at, created.created_at);

    // update — partial: only is_active
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/items/{id}"),
            r#"{"is_active":false}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.title, "Walk dog"); // unchanged
    assert!(!updated.is_active);

    // update — partial: only title
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/api/items/{id}"),
            r#"{"title":"Walk cat"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.title, "Walk cat");
    assert!(!updated.is_active); // unchanged from previous update

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/api/items/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    // delete again — 404, not a crash
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(&format!("/api/items/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete — empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/api/items/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Item> = body_json(resp).await;
    assert!(items.is_empty());
}
