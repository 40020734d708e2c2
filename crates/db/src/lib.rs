//! Persistence for movies, users and reviews on top of a document store.

pub mod models;
pub mod repositories;

use std::sync::Arc;

use marquee_core::error::CoreError;
use marquee_store::{DocumentStore, StoreError};

use repositories::{MovieRepo, ReviewRepo, UserRepo};

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Malformed document in index '{index}': {source}")]
    Malformed {
        index: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Check that the document store is reachable.
pub async fn health_check(store: &dyn DocumentStore) -> Result<(), DbError> {
    store.ping().await?;
    Ok(())
}

/// The three repositories sharing one store handle.
pub struct Repositories {
    pub movies: MovieRepo,
    pub users: UserRepo,
    pub reviews: ReviewRepo,
}

impl Repositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            movies: MovieRepo::new(Arc::clone(&store)),
            users: UserRepo::new(Arc::clone(&store)),
            reviews: ReviewRepo::new(store),
        }
    }

    /// Build the repositories, creating any missing index and seeding every
    /// id counter from the stored documents.
    pub async fn bootstrap(store: Arc<dyn DocumentStore>) -> Result<Self, DbError> {
        let repos = Self::new(store);
        repos.movies.bootstrap().await?;
        repos.users.bootstrap().await?;
        repos.reviews.bootstrap().await?;
        Ok(repos)
    }

    /// Drop and recreate every index. All data is lost and the id counters
    /// restart at 1.
    pub async fn reinitialize_all(&self) -> Result<(), DbError> {
        self.movies.reinitialize().await?;
        self.users.reinitialize().await?;
        self.reviews.reinitialize().await?;
        tracing::warn!("All indices reinitialized");
        Ok(())
    }
}
