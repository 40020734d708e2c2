//! HTTP-level tests for the `/dev` tools.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_movie, create_user, delete, get, post_empty, post_json};
use serde_json::json;

#[tokio::test]
async fn dev_routes_absent_unless_enabled() {
    let mut config = common::test_config();
    config.dev_tools_enabled = false;
    let (app, _store) = common::build_test_app_with(config).await;

    let response = get(app.clone(), "/api/v1/dev").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_empty(app, "/api/v1/dev/reinitialize").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn banner_answers_with_message() {
    let app = common::build_test_app().await;

    let response = get(app, "/api/v1/dev").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["message"].is_string());
}

#[tokio::test]
async fn add_example_inserts_fixed_review() {
    let app = common::build_test_app().await;

    let response = post_empty(app.clone(), "/api/v1/dev/add-example").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["review"]["userId"], 1);
    assert_eq!(json["review"]["movieId"], 1);
    assert_eq!(json["review"]["rating"], 5);

    // No pair check: a second call adds another review.
    post_empty(app.clone(), "/api/v1/dev/add-example").await;
    let reviews = body_json(get(app, "/api/v1/reviews").await).await;
    assert_eq!(reviews.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn clear_removes_only_reviews() {
    let app = common::build_test_app().await;
    let user = create_user(&app, "Ann").await;
    let movie = create_movie(&app, json!({ "title": "Up" })).await;
    post_json(
        app.clone(),
        "/api/v1/reviews",
        json!({ "userId": user, "movieId": movie, "rating": 7 }),
    )
    .await;

    let response = post_empty(app.clone(), "/api/v1/dev/clear").await;
    assert_eq!(response.status(), StatusCode::OK);

    let reviews = body_json(get(app.clone(), "/api/v1/reviews").await).await;
    assert!(reviews.as_array().unwrap().is_empty());
    let movies = body_json(get(app, "/api/v1/movies").await).await;
    assert_eq!(movies.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_by_id_removes_review() {
    let app = common::build_test_app().await;
    let created = body_json(post_empty(app.clone(), "/api/v1/dev/add-example").await).await;
    let id = created["review"]["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/dev/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app.clone(), &format!("/api/v1/reviews/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, &format!("/api/v1/dev/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reinitialize_wipes_data_and_restarts_ids() {
    let app = common::build_test_app().await;
    create_movie(&app, json!({ "title": "One" })).await;
    create_movie(&app, json!({ "title": "Two" })).await;

    let response = post_empty(app.clone(), "/api/v1/dev/reinitialize").await;
    assert_eq!(response.status(), StatusCode::OK);

    let movies = body_json(get(app.clone(), "/api/v1/movies").await).await;
    assert!(movies.as_array().unwrap().is_empty());

    let id = create_movie(&app, json!({ "title": "Three" })).await;
    assert_eq!(id, 1);
}
