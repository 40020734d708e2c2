pub mod dev;
pub mod health;
pub mod movies;
pub mod reviews;
pub mod users;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /movies      movie CRUD, search, per-movie reviews, rankings, stats
/// /reviews     review upsert, CRUD, search
/// /users       user CRUD, login-or-create
/// /dev         destructive dev tools (only when DEV_TOOLS_ENABLED=true)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    let routes = Router::new()
        .nest("/movies", movies::router())
        .nest("/reviews", reviews::router())
        .nest("/users", users::router());

    if config.dev_tools_enabled {
        tracing::warn!("Dev tools routes mounted at /api/v1/dev");
        routes.nest("/dev", dev::router())
    } else {
        routes
    }
}
