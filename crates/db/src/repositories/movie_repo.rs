//! Repository for the `movies` index.

use std::sync::Arc;

use marquee_core::types::DbId;
use marquee_store::{DocumentStore, Query};
use serde_json::{json, Value};

use super::collection::Collection;
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::DbError;

/// Index holding movie documents.
pub const MOVIE_INDEX: &str = "movies";

fn mappings() -> Value {
    json!({
        "properties": {
            "id": { "type": "integer" },
            "title": { "type": "text" },
            "director": { "type": "keyword" },
            "releaseDate": { "type": "date" },
            "genre": { "type": "keyword" },
            "description": { "type": "text" },
            "tags": { "type": "keyword" },
            "rating": { "type": "float" },
            "recommended_by": { "type": "keyword" }
        }
    })
}

/// CRUD and search over movies.
pub struct MovieRepo {
    docs: Collection,
}

impl MovieRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            docs: Collection::new(store, MOVIE_INDEX, mappings()),
        }
    }

    pub async fn bootstrap(&self) -> Result<(), DbError> {
        self.docs.bootstrap().await
    }

    pub async fn reinitialize(&self) -> Result<(), DbError> {
        self.docs.reinitialize().await
    }

    pub async fn list(&self) -> Result<Vec<Movie>, DbError> {
        tracing::debug!(index = self.docs.index(), "Fetching all movies");
        self.docs.all().await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, DbError> {
        self.docs.find(id).await
    }

    /// Insert a movie under the next sequential id.
    pub async fn create(&self, input: CreateMovie) -> Result<Movie, DbError> {
        let movie = input.into_movie(self.docs.next_id());
        self.docs.put(movie.id, &movie).await?;
        tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Merge `input` onto the stored movie. Returns `None` if it does not exist.
    pub async fn update(&self, id: DbId, input: UpdateMovie) -> Result<Option<Movie>, DbError> {
        let Some(mut movie) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        movie.apply(input);
        self.docs.put(id, &movie).await?;
        tracing::info!(movie_id = id, "Movie updated");
        Ok(Some(movie))
    }

    /// Returns `false` if the movie did not exist.
    pub async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        let deleted = self.docs.delete(id).await?;
        if deleted {
            tracing::info!(movie_id = id, "Movie deleted");
        }
        Ok(deleted)
    }

    /// Full-text match on the title.
    pub async fn search_by_title(&self, title: &str) -> Result<Vec<Movie>, DbError> {
        tracing::debug!(title, "Searching movies by title");
        self.docs.search(&Query::matching("title", title)).await
    }

    /// Exact match on the director keyword.
    pub async fn search_by_director(&self, director: &str) -> Result<Vec<Movie>, DbError> {
        tracing::debug!(director, "Searching movies by director");
        self.docs.search(&Query::term("director", director)).await
    }
}
