//! Shared response body types for API handlers.
//!
//! Resources are returned as bare JSON. Status-only outcomes (dev tools,
//! not-found, validation failures) use a `{ "message": ... }` body.

use serde::Serialize;

/// `{ "message": "..." }` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
