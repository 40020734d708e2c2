//! Route definitions for the `/dev` tools.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::dev;
use crate::state::AppState;

/// Routes mounted at `/dev`.
///
/// ```text
/// GET    /               -> banner
/// POST   /reinitialize   -> reinitialize (drop and recreate every index)
/// POST   /clear          -> clear (delete all reviews)
/// DELETE /{id}           -> delete_review
/// POST   /add-example    -> add_example_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dev::banner))
        .route("/reinitialize", post(dev::reinitialize))
        .route("/clear", post(dev::clear))
        .route("/add-example", post(dev::add_example_review))
        .route("/{id}", delete(dev::delete_review))
}
