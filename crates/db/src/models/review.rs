use marquee_core::error::CoreError;
use marquee_core::ranking::RatedReview;
use marquee_core::types::{DbId, Rating, Timestamp};
use marquee_core::validation::validate_rating;
use serde::{Deserialize, Serialize};

/// A document in the `reviews` index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub rating: Rating,
    #[serde(default)]
    pub comment: String,
    /// Creation time; unchanged by later edits.
    pub date: Timestamp,
}

impl RatedReview for Review {
    fn movie_id(&self) -> DbId {
        self.movie_id
    }

    fn rating(&self) -> Rating {
        self.rating
    }
}

/// DTO for submitting a review. Upserted on `(user_id, movie_id)`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub user_id: DbId,
    pub movie_id: DbId,
    pub rating: Rating,
    #[serde(default)]
    pub comment: String,
}

impl CreateReview {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_rating(self.rating)
    }
}

/// DTO for editing a review by id. Only the rating and comment change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReview {
    pub rating: Option<Rating>,
    pub comment: Option<String>,
}

impl UpdateReview {
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.rating {
            Some(rating) => validate_rating(rating),
            None => Ok(()),
        }
    }
}

/// Result of a review submission.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    /// No review existed for the pair; a new one was inserted.
    Created(Review),
    /// The pair's existing review was overwritten in place.
    Updated(Review),
}

impl UpsertOutcome {
    pub fn into_review(self) -> Review {
        match self {
            UpsertOutcome::Created(review) | UpsertOutcome::Updated(review) => review,
        }
    }
}

/// Query string for `GET /reviews/search/user`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReviewParams {
    pub user_id: Option<DbId>,
}

/// Query string for `GET /reviews/search/keywords`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordSearchParams {
    pub keywords: Option<String>,
}
