//! Error types for the stock room server.
//!
//! Request validation failures map to 400 responses, everything else (database,
//! I/O) maps to a 500 response that carries the underlying error text. All errors
//! implement `IntoResponse` so handlers can return them with `?`.

/// Configuration errors
pub mod config;
/// Request validation errors
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::validation::ValidationError};

/// Main error type for the stock room server.
///
/// Aggregates domain-specific errors and external library errors so that `?` converts
/// them automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Request is missing required fields or could not be parsed.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Database error (query failures, constraint violations, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation errors
/// - 500 Internal Server Error - For all other errors, with the error text in the body
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Store failures are terminal for the request and the client is told what went wrong,
/// so the error text is both logged and returned in the error envelope.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        tracing::error!("{}", message);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorDto::new(message))).into_response()
    }
}
