//! Repository for the `reviews` index.
//!
//! A user has at most one review per movie: [`ReviewRepo::upsert`] looks up
//! the review for the exact (movie, user) pair and overwrites it in place
//! when one exists. Every comment is passed through the profanity filter
//! before it is written.

use std::sync::Arc;

use chrono::Utc;
use marquee_core::profanity;
use marquee_core::types::DbId;
use marquee_store::{DocumentStore, Query};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use super::collection::Collection;
use crate::models::review::{CreateReview, Review, UpdateReview, UpsertOutcome};
use crate::DbError;

/// Index holding review documents.
pub const REVIEW_INDEX: &str = "reviews";

/// Fields searched by [`ReviewRepo::search_by_keywords`].
const KEYWORD_FIELDS: &[&str] = &["comment"];

fn mappings() -> Value {
    json!({
        "properties": {
            "id": { "type": "integer" },
            "movieId": { "type": "integer" },
            "userId": { "type": "integer" },
            "comment": { "type": "text" },
            "rating": { "type": "integer" },
            "date": { "type": "date" }
        }
    })
}

fn masked(comment: &str, user_id: DbId) -> String {
    let censored = profanity::censor(comment);
    if censored != comment {
        tracing::debug!(user_id, "Masked profanity in review comment");
    }
    censored
}

pub struct ReviewRepo {
    docs: Collection,
    /// Serializes read-then-write sequences within this process.
    write_lock: Mutex<()>,
}

impl ReviewRepo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            docs: Collection::new(store, REVIEW_INDEX, mappings()),
            write_lock: Mutex::new(()),
        }
    }

    pub async fn bootstrap(&self) -> Result<(), DbError> {
        self.docs.bootstrap().await
    }

    pub async fn reinitialize(&self) -> Result<(), DbError> {
        self.docs.reinitialize().await
    }

    pub async fn list(&self) -> Result<Vec<Review>, DbError> {
        self.docs.all().await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Review>, DbError> {
        self.docs.find(id).await
    }

    pub async fn find_by_movie(&self, movie_id: DbId) -> Result<Vec<Review>, DbError> {
        self.docs.search(&Query::term("movieId", movie_id)).await
    }

    pub async fn find_by_user(&self, user_id: DbId) -> Result<Vec<Review>, DbError> {
        self.docs.search(&Query::term("userId", user_id)).await
    }

    /// The review `user_id` wrote for `movie_id`, if any.
    pub async fn find_for_pair(
        &self,
        movie_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Review>, DbError> {
        let query = Query::all([
            Query::term("movieId", movie_id),
            Query::term("userId", user_id),
        ]);
        let matches: Vec<Review> = self.docs.search(&query).await?;
        if matches.len() > 1 {
            tracing::warn!(movie_id, user_id, count = matches.len(), "Duplicate reviews for pair");
        }
        Ok(matches.into_iter().next())
    }

    pub async fn search_by_keywords(&self, keywords: &str) -> Result<Vec<Review>, DbError> {
        let reviews: Vec<Review> = self
            .docs
            .search(&Query::multi_match(keywords, KEYWORD_FIELDS.iter().copied()))
            .await?;
        tracing::debug!(keywords, count = reviews.len(), "Keyword search finished");
        Ok(reviews)
    }

    /// Insert a new review unconditionally, bypassing the one-per-pair check.
    pub async fn create(&self, input: CreateReview) -> Result<Review, DbError> {
        let review = Review {
            id: self.docs.next_id(),
            user_id: input.user_id,
            movie_id: input.movie_id,
            rating: input.rating,
            comment: masked(&input.comment, input.user_id),
            date: Utc::now(),
        };
        self.docs.put(review.id, &review).await?;
        tracing::info!(
            review_id = review.id,
            movie_id = review.movie_id,
            user_id = review.user_id,
            "Review created",
        );
        Ok(review)
    }

    /// Create the user's review of the movie, or overwrite the rating and
    /// comment of the one they already wrote (id and date are preserved).
    pub async fn upsert(&self, input: CreateReview) -> Result<UpsertOutcome, DbError> {
        let _guard = self.write_lock.lock().await;

        match self.find_for_pair(input.movie_id, input.user_id).await? {
            Some(mut review) => {
                review.comment = masked(&input.comment, input.user_id);
                review.rating = input.rating;
                self.docs.put(review.id, &review).await?;
                tracing::info!(
                    review_id = review.id,
                    movie_id = review.movie_id,
                    user_id = review.user_id,
                    "Existing review overwritten",
                );
                Ok(UpsertOutcome::Updated(review))
            }
            None => {
                let review = self.create(input).await?;
                Ok(UpsertOutcome::Created(review))
            }
        }
    }

    /// Edit a review by id. Returns `None` if it does not exist.
    pub async fn update(&self, id: DbId, input: UpdateReview) -> Result<Option<Review>, DbError> {
        let _guard = self.write_lock.lock().await;

        let Some(mut review) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(rating) = input.rating {
            review.rating = rating;
        }
        if let Some(comment) = input.comment {
            review.comment = masked(&comment, review.user_id);
        }

        self.docs.put(id, &review).await?;
        tracing::info!(review_id = id, "Review updated");
        Ok(Some(review))
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, DbError> {
        let deleted = self.docs.delete(id).await?;
        if deleted {
            tracing::info!(review_id = id, "Review deleted");
        }
        Ok(deleted)
    }

    /// Remove every review, keeping the index.
    pub async fn clear(&self) -> Result<u64, DbError> {
        let deleted = self.docs.clear().await?;
        tracing::info!(deleted, "Reviews cleared");
        Ok(deleted)
    }
}
