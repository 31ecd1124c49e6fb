use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request validation failures, reported to the client as 400 Bad Request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Stock initialization without style, size or quantity.
    #[error("Missing required parameters: style, size and qty")]
    MissingStockFields,
    /// Usage without a user name.
    #[error("Missing user name")]
    MissingUserName,
    /// Clothing usage without style or size.
    #[error("Clothing usage requires both a style and a size")]
    MissingClothingFields,
    /// Other-item usage without an item name.
    #[error("Other item usage requires an item name")]
    MissingOtherItemName,
    /// Other-item creation without a name.
    #[error("Missing item name")]
    MissingItemName,
    /// Other-item update without a quantity.
    #[error("Missing quantity")]
    MissingQuantity,
    /// Body is not valid JSON for the endpoint.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// Path parameter could not be parsed.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ValidationError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
