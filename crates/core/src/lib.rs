//! Domain logic shared by the repository and API layers.
//!
//! Nothing in this crate performs I/O: it holds the id/timestamp aliases,
//! the domain error type, and the pure functions behind review upserts,
//! login-or-create, rankings and per-movie statistics.

pub mod error;
pub mod ids;
pub mod login;
pub mod profanity;
pub mod ranking;
pub mod stats;
pub mod types;
pub mod validation;
