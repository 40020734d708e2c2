//! Route definitions for the `/reviews` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> submit (upsert on userId + movieId)
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /search/user?userId=       -> search_by_user
/// GET    /search/keywords?keywords= -> search_by_keywords
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list).post(reviews::submit))
        .route("/search/user", get(reviews::search_by_user))
        .route("/search/keywords", get(reviews::search_by_keywords))
        .route(
            "/{id}",
            get(reviews::get_by_id)
                .put(reviews::update)
                .delete(reviews::delete),
        )
}
