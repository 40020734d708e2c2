//! Destructive maintenance endpoints, mounted only with `DEV_TOOLS_ENABLED`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::types::DbId;
use marquee_db::models::review::{CreateReview, Review};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extractors::AppPath;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/v1/dev
pub async fn banner() -> Json<MessageResponse> {
    Json(MessageResponse::new("Dev tools enabled"))
}

/// POST /api/v1/dev/reinitialize
///
/// Drops and recreates every index. All data is lost.
pub async fn reinitialize(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state.repos.reinitialize_all().await?;
    Ok(Json(MessageResponse::new("Indices reinitialized successfully")))
}

/// POST /api/v1/dev/clear
pub async fn clear(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    let deleted = state.repos.reviews.clear().await?;
    Ok(Json(MessageResponse::new(format!(
        "Cleared {deleted} reviews"
    ))))
}

/// DELETE /api/v1/dev/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !state.repos.reviews.delete(id).await? {
        return Err(AppError::not_found("Review", id));
    }
    Ok(Json(MessageResponse::new(format!(
        "Document with id {id} deleted successfully"
    ))))
}

#[derive(Debug, Serialize)]
pub struct ExampleReviewResponse {
    pub message: &'static str,
    pub review: Review,
}

/// POST /api/v1/dev/add-example
///
/// Inserts a fixed review from user 1 for movie 1, skipping the
/// one-review-per-pair check.
pub async fn add_example_review(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<ExampleReviewResponse>)> {
    let review = state
        .repos
        .reviews
        .create(CreateReview {
            user_id: 1,
            movie_id: 1,
            rating: 5,
            comment: "This is an example review added via dev tools.".to_string(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ExampleReviewResponse {
            message: "Example review added successfully",
            review,
        }),
    ))
}
