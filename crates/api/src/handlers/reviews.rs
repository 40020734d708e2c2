//! Handlers for the `/reviews` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::types::DbId;
use marquee_db::models::review::{
    CreateReview, KeywordSearchParams, Review, UpdateReview, UpsertOutcome, UserReviewParams,
};

use super::required_param;
use crate::error::{AppError, AppResult};
use crate::extractors::{AppJson, AppPath};
use crate::state::AppState;

/// GET /api/v1/reviews
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.repos.reviews.list().await?;
    Ok(Json(reviews))
}

/// GET /api/v1/reviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Review>> {
    let review = state
        .repos
        .reviews
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("Review", id))?;
    Ok(Json(review))
}

/// POST /api/v1/reviews
///
/// Creates the user's review of the movie (201), or overwrites the rating
/// and comment of the review they already wrote (200).
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    input.validate()?;

    if state.repos.users.find_by_id(input.user_id).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "User with id {} does not exist",
            input.user_id
        )));
    }
    if state.repos.movies.find_by_id(input.movie_id).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "Movie with id {} does not exist",
            input.movie_id
        )));
    }

    let response = match state.repos.reviews.upsert(input).await? {
        UpsertOutcome::Created(review) => (StatusCode::CREATED, Json(review)),
        UpsertOutcome::Updated(review) => (StatusCode::OK, Json(review)),
    };
    Ok(response)
}

/// PUT /api/v1/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateReview>,
) -> AppResult<Json<Review>> {
    input.validate()?;
    let review = state
        .repos
        .reviews
        .update(id, input)
        .await?
        .ok_or(AppError::not_found("Review", id))?;
    Ok(Json(review))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if state.repos.reviews.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Review", id))
    }
}

/// GET /api/v1/movies/reviews/{movie_id}
pub async fn list_by_movie(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.repos.reviews.find_by_movie(movie_id).await?;
    Ok(Json(reviews))
}

/// GET /api/v1/reviews/search/user?userId=
pub async fn search_by_user(
    State(state): State<AppState>,
    Query(params): Query<UserReviewParams>,
) -> AppResult<Json<Vec<Review>>> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::BadRequest("userId query parameter is required".into()))?;
    let reviews = state.repos.reviews.find_by_user(user_id).await?;
    Ok(Json(reviews))
}

/// GET /api/v1/reviews/search/keywords?keywords=
pub async fn search_by_keywords(
    State(state): State<AppState>,
    Query(params): Query<KeywordSearchParams>,
) -> AppResult<Json<Vec<Review>>> {
    let keywords = required_param(params.keywords, "Keywords")?;
    let reviews = state.repos.reviews.search_by_keywords(&keywords).await?;
    Ok(Json(reviews))
}
