//! HTTP-level tests for the `/reviews` endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, create_movie, create_user, delete, get, post_json, put_json};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// An app with one user and one movie; returns `(app, user_id, movie_id)`.
async fn seeded_app() -> (Router, i64, i64) {
    let app = common::build_test_app().await;
    let user = create_user(&app, "Ann").await;
    let movie = create_movie(&app, json!({ "title": "Arrival" })).await;
    (app, user, movie)
}

async fn submit(app: &Router, body: Value) -> (StatusCode, Value) {
    let response = post_json(app.clone(), "/api/v1/reviews", body).await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Upsert
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_submission_creates_review() {
    let (app, user, movie) = seeded_app().await;

    let (status, json) = submit(
        &app,
        json!({ "userId": user, "movieId": movie, "rating": 8, "comment": "Loved it" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["id"], 1);
    assert_eq!(json["userId"], user);
    assert_eq!(json["movieId"], movie);
    assert_eq!(json["rating"], 8);
    assert_eq!(json["comment"], "Loved it");
    assert!(json["date"].is_string());
}

#[tokio::test]
async fn resubmission_updates_in_place() {
    let (app, user, movie) = seeded_app().await;

    let (_, first) = submit(
        &app,
        json!({ "userId": user, "movieId": movie, "rating": 4, "comment": "Slow" }),
    )
    .await;
    let (status, second) = submit(
        &app,
        json!({ "userId": user, "movieId": movie, "rating": 9, "comment": "Rewatched, great" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["id"], first["id"]);
    assert_eq!(second["date"], first["date"]);
    assert_eq!(second["rating"], 9);

    let response = get(app, &format!("/api/v1/movies/reviews/{movie}")).await;
    let reviews = body_json(response).await;
    assert_eq!(reviews.as_array().unwrap().len(), 1);
    assert_eq!(reviews[0]["comment"], "Rewatched, great");
}

#[tokio::test]
async fn profane_comment_is_stored_masked() {
    let (app, user, movie) = seeded_app().await;

    let (_, json) = submit(
        &app,
        json!({ "userId": user, "movieId": movie, "rating": 2, "comment": "Total crap" }),
    )
    .await;
    assert_eq!(json["comment"], "Total ****");

    let id = json["id"].as_i64().unwrap();
    let stored = body_json(get(app, &format!("/api/v1/reviews/{id}")).await).await;
    assert_eq!(stored["comment"], "Total ****");
}

#[tokio::test]
async fn submission_validates_rating_and_references() {
    let (app, user, movie) = seeded_app().await;

    let (status, json) = submit(
        &app,
        json!({ "userId": user, "movieId": movie, "rating": 11 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].is_string());

    let (status, json) = submit(&app, json!({ "userId": 99, "movieId": movie, "rating": 5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "User with id 99 does not exist");

    let (status, _) = submit(&app, json!({ "userId": user, "movieId": 99, "rating": 5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = submit(&app, json!({ "userId": user, "rating": 5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = body_json(get(app, "/api/v1/reviews").await).await;
    assert!(body.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// CRUD by id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_review_by_id() {
    let (app, user, movie) = seeded_app().await;
    let (_, created) = submit(
        &app,
        json!({ "userId": user, "movieId": movie, "rating": 6, "comment": "Fine" }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/reviews/{id}"),
        json!({ "comment": "Damn good" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["rating"], 6);
    assert_eq!(json["comment"], "**** good");

    let response = put_json(app, "/api/v1/reviews/500", json!({ "rating": 3 })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_review_then_fetch_returns_404() {
    let (app, user, movie) = seeded_app().await;
    let (_, created) = submit(&app, json!({ "userId": user, "movieId": movie, "rating": 7 })).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/reviews/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/reviews/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        format!("Review with id {id} not found")
    );

    let response = delete(app, &format!("/api/v1/reviews/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_reviews_by_user_and_keywords() {
    let (app, ann, arrival) = seeded_app().await;
    let ben = create_user(&app, "Ben").await;
    let dune = create_movie(&app, json!({ "title": "Dune" })).await;

    submit(&app, json!({ "userId": ann, "movieId": arrival, "rating": 9, "comment": "Beautiful score" })).await;
    submit(&app, json!({ "userId": ann, "movieId": dune, "rating": 8, "comment": "Huge sound" })).await;
    submit(&app, json!({ "userId": ben, "movieId": dune, "rating": 6, "comment": "Beautiful but long" })).await;

    let json = body_json(get(app.clone(), &format!("/api/v1/reviews/search/user?userId={ann}")).await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let json = body_json(get(app.clone(), "/api/v1/reviews/search/keywords?keywords=beautiful").await).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let response = get(app, "/api/v1/reviews/search/user").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
