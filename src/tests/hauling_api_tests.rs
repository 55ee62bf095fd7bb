use axum::http::StatusCode;
use serde_json::json;

use super::support::{body_json, create_listing, delete, get, send_json, setup_test_app};

#[tokio::test]
async fn post_creates_listing_with_defaults() {
    let (app, _, _db) = setup_test_app().await;

    let entry = create_listing(&app, "/api/hauling", json!({ "name": "Dump Truck Hauling" })).await;

    assert!(entry.get("_id").is_some());
    assert_eq!(entry["name"], "Dump Truck Hauling");
    assert_eq!(entry["urlEnd"], "dump-truck-hauling");
    // Omitted fields get the configured defaults
    assert_eq!(entry["description"], "");
    assert_eq!(entry["price"], 0.0);
    assert_eq!(entry["isActive"], true);
    assert_eq!(entry["imageUrl"], "/images/placeholder.png");
}

#[tokio::test]
async fn post_without_name_is_rejected() {
    let (app, _, _db) = setup_test_app().await;

    let response = send_json(&app, "POST", "/api/hauling", json!({ "price": 50.0 })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body.get("message").is_some());

    let response = send_json(&app, "POST", "/api/hauling", json!({ "name": "   " })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_honors_client_supplied_url_end() {
    let (app, _, _db) = setup_test_app().await;

    let entry =
        create_listing(&app, "/api/hauling", json!({ "name": "Gravel Delivery", "urlEnd": "Cheap Gravel" }))
            .await;
    assert_eq!(entry["urlEnd"], "cheap-gravel");
}

#[tokio::test]
async fn get_selects_by_id_slug_or_lists_all() {
    let (app, _, _db) = setup_test_app().await;

    let a = create_listing(&app, "/api/hauling", json!({ "name": "Gravel", "price": 40.0 })).await;
    let _b = create_listing(&app, "/api/hauling", json!({ "name": "Sand" })).await;

    // list all
    let response = get(&app, "/api/hauling").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 2);

    // by _id
    let response = get(&app, &format!("/api/hauling?_id={}", a["_id"].as_str().unwrap())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let entry = body_json(response).await;
    assert_eq!(entry["name"], "Gravel");
    assert_eq!(entry["price"], 40.0);

    // by urlEnd
    let response = get(&app, "/api/hauling?urlEnd=sand").await;
    assert_eq!(response.status(), StatusCode::OK);
    let entry = body_json(response).await;
    assert_eq!(entry["name"], "Sand");
}

#[tokio::test]
async fn get_unknown_id_or_slug_is_404() {
    let (app, _, _db) = setup_test_app().await;

    let response = get(&app, &format!("/api/hauling?_id={}", uuid::Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("not found"));

    let response = get(&app, "/api/hauling?urlEnd=does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_requires_id_and_reports_not_found() {
    let (app, _, _db) = setup_test_app().await;

    let response = delete(&app, "/api/hauling").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete(&app, &format!("/api/hauling?_id={}", uuid::Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_listing_from_retrieval() {
    let (app, _, _db) = setup_test_app().await;

    let entry = create_listing(&app, "/api/hauling", json!({ "name": "Topsoil" })).await;
    let id = entry["_id"].as_str().unwrap().to_string();

    let response = delete(&app, &format!("/api/hauling?_id={}", id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body.get("message").is_some());

    let response = get(&app, &format!("/api/hauling?_id={}", id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = get(&app, "/api/hauling?urlEnd=topsoil").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_requires_id_and_known_listing() {
    let (app, _, _db) = setup_test_app().await;

    let response = send_json(&app, "PUT", "/api/hauling", json!({ "name": "Gravel" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/hauling?_id={}", uuid::Uuid::new_v4()),
        json!({ "name": "Gravel" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_replaces_whole_document_with_defaults() {
    let (app, _, _db) = setup_test_app().await;

    let entry = create_listing(
        &app,
        "/api/hauling",
        json!({ "name": "Gravel", "description": "Pea gravel", "price": 45.0, "isActive": false }),
    )
    .await;
    let id = entry["_id"].as_str().unwrap().to_string();

    // Full-document semantics: omitted fields fall back to defaults,
    // not to the previously stored values.
    let response =
        send_json(&app, "PUT", &format!("/api/hauling?_id={}", id), json!({ "name": "Gravel" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["description"], "");
    assert_eq!(updated["price"], 0.0);
    assert_eq!(updated["isActive"], true);
    // Slug untouched when urlEnd is omitted
    assert_eq!(updated["urlEnd"], "gravel");
}

#[tokio::test]
async fn put_with_unchanged_url_end_keeps_slug() {
    let (app, _, _db) = setup_test_app().await;

    let entry = create_listing(&app, "/api/hauling", json!({ "name": "Gravel" })).await;
    let id = entry["_id"].as_str().unwrap().to_string();

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/hauling?_id={}", id),
        json!({ "name": "Gravel", "urlEnd": "Gravel" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    // Sanitized submitted slug equals the stored one: no suffixing
    assert_eq!(updated["urlEnd"], "gravel");
}

#[tokio::test]
async fn put_with_colliding_url_end_regenerates() {
    let (app, _, _db) = setup_test_app().await;

    let _gravel = create_listing(&app, "/api/hauling", json!({ "name": "Gravel" })).await;
    let sand = create_listing(&app, "/api/hauling", json!({ "name": "Sand" })).await;
    let sand_id = sand["_id"].as_str().unwrap().to_string();

    let response = send_json(
        &app,
        "PUT",
        &format!("/api/hauling?_id={}", sand_id),
        json!({ "name": "Sand", "urlEnd": "gravel" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["urlEnd"], "gravel-2");

    // The original listing still owns its slug
    let response = get(&app, "/api/hauling?urlEnd=gravel").await;
    assert_eq!(response.status(), StatusCode::OK);
    let entry = body_json(response).await;
    assert_eq!(entry["name"], "Gravel");
}

#[tokio::test]
async fn properties_and_equipment_share_the_listing_shape() {
    let (app, _, _db) = setup_test_app().await;

    for uri in ["/api/properties", "/api/equipment"] {
        let entry = create_listing(&app, uri, json!({ "name": "Back Lot", "price": 1200.0 })).await;
        assert_eq!(entry["price"], 1200.0);

        let response = get(&app, &format!("{}?_id={}", uri, entry["_id"].as_str().unwrap())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
