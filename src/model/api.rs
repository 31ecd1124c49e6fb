use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for every successful API response
///
/// Serializes as `{"success": true, ...payload}` with the payload's fields flattened
/// next to the `success` flag.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ApiResponse<T> {
    /// Always `true` for this envelope
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorDto {
    /// Always `false` for this envelope
    pub success: bool,
    /// The error message
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Payload carrying a human-readable confirmation
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
