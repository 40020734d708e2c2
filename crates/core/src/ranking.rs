//! Cross-movie rankings by average review rating.
//!
//! Reviews are grouped by movie, averaged, and sorted highest first. The
//! average is not weighted by review count: a single 10/10 outranks a hundred
//! 9/10s. Movies with equal averages keep ascending movie-id order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{DbId, Rating};

/// Label used when a movie has no `recommended_by` value.
pub const UNKNOWN_RECOMMENDER: &str = "Unknown";

/// Anything that carries a movie reference and a rating.
pub trait RatedReview {
    fn movie_id(&self) -> DbId;
    fn rating(&self) -> Rating;
}

/// One row of the rankings table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRanking {
    pub movie_id: DbId,
    /// Average rating across all reviews of the movie.
    pub rating: f64,
    pub review_count: usize,
    #[serde(rename = "recommended_by")]
    pub recommended_by: String,
}

/// Rank movies by the average rating of their reviews.
///
/// `recommended_by` resolves a movie id to its recommender; movies it cannot
/// resolve are labelled [`UNKNOWN_RECOMMENDER`]. Movies without reviews do
/// not appear.
pub fn rank_movies<R, F>(reviews: &[R], recommended_by: F) -> Vec<MovieRanking>
where
    R: RatedReview,
    F: Fn(DbId) -> Option<String>,
{
    let mut totals: BTreeMap<DbId, (i64, usize)> = BTreeMap::new();
    for review in reviews {
        let entry = totals.entry(review.movie_id()).or_insert((0, 0));
        entry.0 += i64::from(review.rating());
        entry.1 += 1;
    }

    let mut rankings: Vec<MovieRanking> = totals
        .into_iter()
        .map(|(movie_id, (sum, count))| MovieRanking {
            movie_id,
            rating: sum as f64 / count as f64,
            review_count: count,
            recommended_by: recommended_by(movie_id)
                .unwrap_or_else(|| UNKNOWN_RECOMMENDER.to_string()),
        })
        .collect();

    // Stable sort keeps the BTreeMap's ascending-id order for ties.
    rankings.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rankings
}

#[cfg(test)]
mod tests {
    use super::*;

    struct R(DbId, Rating);

    impl RatedReview for R {
        fn movie_id(&self) -> DbId {
            self.0
        }
        fn rating(&self) -> Rating {
            self.1
        }
    }

    fn no_recommenders(_: DbId) -> Option<String> {
        None
    }

    #[test]
    fn higher_average_ranks_first_regardless_of_count() {
        let reviews = [R(2, 9), R(1, 10), R(2, 9)];
        let rankings = rank_movies(&reviews, no_recommenders);

        assert_eq!(rankings.len(), 2);
        assert_eq!(rankings[0].movie_id, 1);
        assert_eq!(rankings[0].rating, 10.0);
        assert_eq!(rankings[0].review_count, 1);
        assert_eq!(rankings[1].movie_id, 2);
        assert_eq!(rankings[1].rating, 9.0);
        assert_eq!(rankings[1].review_count, 2);
    }

    #[test]
    fn averages_are_fractional() {
        let rankings = rank_movies(&[R(7, 8), R(7, 5)], no_recommenders);
        assert_eq!(rankings[0].rating, 6.5);
    }

    #[test]
    fn ties_keep_ascending_movie_id() {
        let rankings = rank_movies(&[R(9, 6), R(3, 6), R(5, 6)], no_recommenders);
        let ids: Vec<DbId> = rankings.iter().map(|r| r.movie_id).collect();
        assert_eq!(ids, vec![3, 5, 9]);
    }

    #[test]
    fn recommender_resolved_or_unknown() {
        let rankings = rank_movies(&[R(1, 4), R(2, 3)], |id| {
            (id == 1).then(|| "Dana".to_string())
        });
        assert_eq!(rankings[0].recommended_by, "Dana");
        assert_eq!(rankings[1].recommended_by, UNKNOWN_RECOMMENDER);
    }

    #[test]
    fn no_reviews_yields_empty_rankings() {
        let reviews: [R; 0] = [];
        assert!(rank_movies(&reviews, no_recommenders).is_empty());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let rankings = rank_movies(&[R(4, 7)], no_recommenders);
        let json = serde_json::to_value(&rankings[0]).unwrap();
        assert_eq!(json["movieId"], 4);
        assert_eq!(json["reviewCount"], 1);
        assert_eq!(json["recommended_by"], "Unknown");
    }
}
