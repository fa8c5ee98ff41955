// Integration tests for the wishlist CRUD handlers behind the access gate.

mod support;

use std::time::Duration;

use actix_web::middleware::NormalizePath;
use actix_web::{test, web, App};
use backend::routes;
use serde_json::json;

macro_rules! build_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .wrap(NormalizePath::trim())
                .configure(routes::configure),
        )
        .await
    };
}

async fn admin_state() -> (backend::AppState, String) {
    let state = support::state_with_db(support::verifier_failing(), None).await;
    let admin = support::seed_user(&state, "admin-sub", "admin@example.com", "Admin", true).await;
    let token = support::mint_for(&admin, &state);
    (state, token)
}

#[actix_web::test]
async fn test_create_item_with_defaults() {
    let (state, token) = admin_state().await;
    let app = build_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/wishlist")
        .insert_header(support::bearer(&token))
        .set_json(json!({ "title": "Telescope" }))
        .to_request();
    let (status, body) = support::send(&app, req).await;

    assert_eq!(status, 201);
    assert_eq!(body["title"], "Telescope");
    assert_eq!(body["description"], serde_json::Value::Null);
    assert_eq!(body["category"], 0);
    assert_eq!(body["active"], false);
    assert!(body["id"].as_i64().is_some());
    assert!(body["createdAt"].as_str().is_some());
}

#[actix_web::test]
async fn test_create_requires_title() {
    let (state, token) = admin_state().await;
    let app = build_app!(state);

    for payload in [json!({}), json!({ "title": "" }), json!({ "description": "x" })] {
        let req = test::TestRequest::post()
            .uri("/api/wishlist")
            .insert_header(support::bearer(&token))
            .set_json(payload)
            .to_request();
        let (status, body) = support::send(&app, req).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], "Title is required");
    }
}

#[actix_web::test]
async fn test_duplicate_title_conflicts() {
    let (state, token) = admin_state().await;
    let app = build_app!(state);

    let create = || {
        test::TestRequest::post()
            .uri("/api/wishlist")
            .insert_header(support::bearer(&token))
            .set_json(json!({ "title": "Same Title" }))
            .to_request()
    };

    let (first, _) = support::send(&app, create()).await;
    assert_eq!(first, 201);

    let (second, body) = support::send(&app, create()).await;
    assert_eq!(second, 409);
    assert_eq!(
        body["error"],
        "A wishlist item with this title already exists."
    );
}

#[actix_web::test]
async fn test_list_newest_first() {
    let (state, token) = admin_state().await;
    let app = build_app!(state);

    for title in ["First", "Second"] {
        let req = test::TestRequest::post()
            .uri("/api/wishlist")
            .insert_header(support::bearer(&token))
            .set_json(json!({ "title": title }))
            .to_request();
        let (status, _) = support::send(&app, req).await;
        assert_eq!(status, 201);
        // keep created_at strictly increasing
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/wishlist")
        .insert_header(support::bearer(&token))
        .to_request();
    let (status, body) = support::send(&app, req).await;

    assert_eq!(status, 200);
    let items = body["items"].as_array().expect("items array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Second");
    assert_eq!(items[1]["title"], "First");
}

#[actix_web::test]
async fn test_update_item() {
    let (state, token) = admin_state().await;
    let app = build_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/wishlist")
        .insert_header(support::bearer(&token))
        .set_json(json!({ "title": "Original", "category": 1 }))
        .to_request();
    let (status, created) = support::send(&app, req).await;
    assert_eq!(status, 201);
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/wishlist/{id}"))
        .insert_header(support::bearer(&token))
        .set_json(json!({
            "title": "Renamed",
            "description": "now described",
            "category": 2,
            "active": true
        }))
        .to_request();
    let (status, body) = support::send(&app, req).await;

    assert_eq!(status, 200);
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["description"], "now described");
    assert_eq!(body["category"], 2);
    assert_eq!(body["active"], true);
}

#[actix_web::test]
async fn test_update_unknown_item_is_404() {
    let (state, token) = admin_state().await;
    let app = build_app!(state);

    let req = test::TestRequest::put()
        .uri("/api/wishlist/9999")
        .insert_header(support::bearer(&token))
        .set_json(json!({ "title": "Ghost" }))
        .to_request();
    let (status, body) = support::send(&app, req).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "Wishlist item not found.");
}

#[actix_web::test]
async fn test_update_requires_title() {
    let (state, token) = admin_state().await;
    let app = build_app!(state);

    let req = test::TestRequest::put()
        .uri("/api/wishlist/1")
        .insert_header(support::bearer(&token))
        .set_json(json!({ "description": "no title" }))
        .to_request();
    let (status, body) = support::send(&app, req).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Title is required");
}

#[actix_web::test]
async fn test_delete_item_and_missing_id() {
    let (state, token) = admin_state().await;
    let app = build_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/wishlist")
        .insert_header(support::bearer(&token))
        .set_json(json!({ "title": "Doomed" }))
        .to_request();
    let (status, created) = support::send(&app, req).await;
    assert_eq!(status, 201);
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/wishlist/{id}"))
        .insert_header(support::bearer(&token))
        .to_request();
    let (status, body) = support::send(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Wishlist item deleted");

    let req = test::TestRequest::get()
        .uri("/api/wishlist")
        .insert_header(support::bearer(&token))
        .to_request();
    let (_, body) = support::send(&app, req).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);

    // Deleting an id that no longer exists still reports success
    let req = test::TestRequest::delete()
        .uri(&format!("/api/wishlist/{id}"))
        .insert_header(support::bearer(&token))
        .to_request();
    let (status, _) = support::send(&app, req).await;
    assert_eq!(status, 200);
}
