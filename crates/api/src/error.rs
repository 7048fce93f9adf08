use avion_core::error::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::Envelope;

/// Message sent for any failure whose details must not reach the client.
pub const INTERNAL_ERROR_MESSAGE: &str = "Ocurrió un error interno";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard [`Envelope`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `avion_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let envelope = match self {
            AppError::Core(CoreError::Validation(errors)) => {
                tracing::debug!(%errors, "Request validation failed");
                Envelope::failure(StatusCode::UNPROCESSABLE_ENTITY).errors(errors)
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                Envelope::failure(StatusCode::INTERNAL_SERVER_ERROR).message(INTERNAL_ERROR_MESSAGE)
            }
            AppError::Database(err) => classify_sqlx_error(&err),
            AppError::BadRequest(msg) => Envelope::failure(StatusCode::BAD_REQUEST).message(msg),
        };

        envelope.into_response()
    }
}

/// Classify a sqlx error into an envelope.
///
/// Missing records are reported by the handlers, so every store error here
/// is a 500 with a sanitized message. Errors raised by Postgres also log their
/// SQLSTATE code.
fn classify_sqlx_error(err: &sqlx::Error) -> Envelope {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
            tracing::error!(error = %db_err, %code, "Database error");
            Envelope::failure(StatusCode::INTERNAL_SERVER_ERROR).message(INTERNAL_ERROR_MESSAGE)
        }
        other => {
            tracing::error!(error = %other, "Database error");
            Envelope::failure(StatusCode::INTERNAL_SERVER_ERROR).message(INTERNAL_ERROR_MESSAGE)
        }
    }
}
