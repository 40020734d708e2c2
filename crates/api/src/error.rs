use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use marquee_db::DbError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Not-found and validation failures answer with `{ "message" }`. Anything
/// else is a 500 with `{ "error", "details" }`, where `details` carries the
/// underlying error text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository or document store failure.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: marquee_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) | AppError::Db(DbError::Core(core)) => core_response(core),
            AppError::BadRequest(msg) => message_response(StatusCode::BAD_REQUEST, msg),
            AppError::Db(err) => {
                tracing::error!(error = %err, "Document store failure");
                internal_response("Document store operation failed", err.to_string())
            }
        }
    }
}

fn core_response(core: CoreError) -> Response {
    match core {
        CoreError::NotFound { entity, id } => message_response(
            StatusCode::NOT_FOUND,
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => message_response(StatusCode::BAD_REQUEST, msg),
    }
}

fn message_response(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "message": message }))).into_response()
}

fn internal_response(error: &str, details: String) -> Response {
    let body = json!({
        "error": error,
        "details": details,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
