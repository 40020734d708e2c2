//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{movies, reviews};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// GET    /search/title?title=    -> search_by_title
/// GET    /search/director?director= -> search_by_director
/// GET    /reviews/{movie_id}     -> reviews::list_by_movie
/// GET    /rankings               -> rankings
/// GET    /stats/{movie_id}       -> stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route("/rankings", get(movies::rankings))
        .route("/search/title", get(movies::search_by_title))
        .route("/search/director", get(movies::search_by_director))
        .route("/reviews/{movie_id}", get(reviews::list_by_movie))
        .route("/stats/{movie_id}", get(movies::stats))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
}
