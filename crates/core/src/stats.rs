//! Per-movie like/dislike statistics.
//!
//! A review counts as a "like" when its rating is at least
//! [`LIKE_THRESHOLD`]. The review list views use slightly different cut-offs:
//! "good" reviews are strictly above the threshold and "bad" reviews strictly
//! below it, so a rating of exactly 5 is a like but appears in neither list.

use serde::Serialize;

use crate::types::Rating;

/// Ratings at or above this value count as likes.
pub const LIKE_THRESHOLD: Rating = 5;

/// Aggregate counts for one movie's reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub likes: usize,
    pub dislikes: usize,
    pub total: usize,
    /// `likes / total`, or 0 when there are no reviews.
    pub like_ratio: f64,
    pub average_rating: Option<f64>,
}

impl ReviewStats {
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = Rating>,
    {
        let mut likes = 0;
        let mut dislikes = 0;
        let mut sum: i64 = 0;

        for rating in ratings {
            if is_like(rating) {
                likes += 1;
            } else {
                dislikes += 1;
            }
            sum += i64::from(rating);
        }

        let total = likes + dislikes;
        let (like_ratio, average_rating) = if total == 0 {
            (0.0, None)
        } else {
            (likes as f64 / total as f64, Some(sum as f64 / total as f64))
        };

        Self {
            likes,
            dislikes,
            total,
            like_ratio,
            average_rating,
        }
    }
}

pub fn is_like(rating: Rating) -> bool {
    rating >= LIKE_THRESHOLD
}

/// Whether a review belongs in the "good reviews" list.
pub fn is_good(rating: Rating) -> bool {
    rating > LIKE_THRESHOLD
}

/// Whether a review belongs in the "bad reviews" list.
pub fn is_bad(rating: Rating) -> bool {
    rating < LIKE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ratings_produce_zeroes() {
        let stats = ReviewStats::from_ratings(Vec::<Rating>::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.like_ratio, 0.0);
        assert_eq!(stats.average_rating, None);
    }

    #[test]
    fn threshold_rating_is_a_like() {
        let stats = ReviewStats::from_ratings([5, 4]);
        assert_eq!(stats.likes, 1);
        assert_eq!(stats.dislikes, 1);
        assert_eq!(stats.like_ratio, 0.5);
        assert_eq!(stats.average_rating, Some(4.5));
    }

    #[test]
    fn threshold_rating_is_neither_good_nor_bad() {
        assert!(!is_good(5));
        assert!(!is_bad(5));
        assert!(is_good(6));
        assert!(is_bad(4));
    }

    #[test]
    fn all_likes_gives_full_ratio() {
        let stats = ReviewStats::from_ratings([10, 8, 7]);
        assert_eq!(stats.like_ratio, 1.0);
        assert_eq!(stats.dislikes, 0);
    }
}
