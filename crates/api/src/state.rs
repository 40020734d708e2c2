use std::sync::Arc;

use marquee_db::Repositories;
use marquee_store::DocumentStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Movie, user and review repositories.
    pub repos: Arc<Repositories>,
    /// The store the repositories write to; used directly for health checks.
    pub store: Arc<dyn DocumentStore>,
}
