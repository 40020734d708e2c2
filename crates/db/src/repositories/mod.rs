//! Repository layer.
//!
//! Each repository owns one index on a shared [`DocumentStore`] handle plus
//! the id counter for that index.
//!
//! [`DocumentStore`]: marquee_store::DocumentStore

mod collection;
pub mod movie_repo;
pub mod review_repo;
pub mod user_repo;

pub use movie_repo::MovieRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::{LoginOutcome, UserRepo};
