//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::types::DbId;
use marquee_db::models::user::{CreateUser, LoginRequest, UpdateUser, User};

use crate::error::{AppError, AppResult};
use crate::extractors::{AppJson, AppPath};
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.repos.users.list().await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<User>> {
    let user = state
        .repos
        .users
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    input.validate()?;
    let user = state.repos.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateUser>,
) -> AppResult<Json<User>> {
    input.validate()?;
    let user = state
        .repos
        .users
        .update(id, input)
        .await?
        .ok_or(AppError::not_found("User", id))?;
    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if state.repos.users.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("User", id))
    }
}

/// POST /api/v1/users/login
///
/// Returns the user with this name (200) or creates one (201).
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".into()));
    }

    let outcome = state.repos.users.login_or_create(&input.name).await?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.user)))
}
