//! Handlers for the `/movies` resource.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::ranking::{rank_movies, MovieRanking};
use marquee_core::stats::{is_bad, is_good, ReviewStats};
use marquee_core::types::DbId;
use marquee_db::models::movie::{
    CreateMovie, DirectorSearchParams, Movie, TitleSearchParams, UpdateMovie,
};
use marquee_db::models::review::Review;
use serde::Serialize;

use super::required_param;
use crate::error::{AppError, AppResult};
use crate::extractors::{AppJson, AppPath};
use crate::state::AppState;

/// GET /api/v1/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.repos.movies.list().await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .repos
        .movies
        .find_by_id(id)
        .await?
        .ok_or(AppError::not_found("Movie", id))?;
    Ok(Json(movie))
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    input.validate()?;
    let movie = state.repos.movies.create(input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/v1/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    input.validate()?;
    let movie = state
        .repos
        .movies
        .update(id, input)
        .await?
        .ok_or(AppError::not_found("Movie", id))?;
    Ok(Json(movie))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if state.repos.movies.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Movie", id))
    }
}

/// GET /api/v1/movies/search/title?title=
pub async fn search_by_title(
    State(state): State<AppState>,
    Query(params): Query<TitleSearchParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let title = required_param(params.title, "Title")?;
    let movies = state.repos.movies.search_by_title(&title).await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/search/director?director=
pub async fn search_by_director(
    State(state): State<AppState>,
    Query(params): Query<DirectorSearchParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let director = required_param(params.director, "Director")?;
    let movies = state.repos.movies.search_by_director(&director).await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/rankings
///
/// Every reviewed movie, highest average rating first.
pub async fn rankings(State(state): State<AppState>) -> AppResult<Json<Vec<MovieRanking>>> {
    let reviews = state.repos.reviews.list().await?;
    let recommenders: HashMap<DbId, String> = state
        .repos
        .movies
        .list()
        .await?
        .into_iter()
        .filter_map(|movie| movie.recommended_by.map(|by| (movie.id, by)))
        .collect();

    let rankings = rank_movies(&reviews, |movie_id| recommenders.get(&movie_id).cloned());
    Ok(Json(rankings))
}

/// Like/dislike summary for one movie plus its good and bad reviews.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieStatsResponse {
    pub movie_id: DbId,
    #[serde(flatten)]
    pub stats: ReviewStats,
    pub good: Vec<Review>,
    pub bad: Vec<Review>,
}

/// GET /api/v1/movies/stats/{movie_id}
pub async fn stats(
    State(state): State<AppState>,
    AppPath(movie_id): AppPath<DbId>,
) -> AppResult<Json<MovieStatsResponse>> {
    state
        .repos
        .movies
        .find_by_id(movie_id)
        .await?
        .ok_or(AppError::not_found("Movie", movie_id))?;

    let reviews = state.repos.reviews.find_by_movie(movie_id).await?;
    let stats = ReviewStats::from_ratings(reviews.iter().map(|r| r.rating));
    let (good, rest): (Vec<Review>, Vec<Review>) =
        reviews.into_iter().partition(|r| is_good(r.rating));
    let bad = rest.into_iter().filter(|r| is_bad(r.rating)).collect();

    Ok(Json(MovieStatsResponse {
        movie_id,
        stats,
        good,
        bad,
    }))
}
