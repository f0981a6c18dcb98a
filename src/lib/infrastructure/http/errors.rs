//! API error-handling module

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::contact::ContactError;

/// Shown when a method other than `POST` is used
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

/// Shown when a required field is missing
pub const MISSING_FIELDS: &str = "Please fill in all fields.";

/// Shown when the email was accepted by the transport
pub const MESSAGE_SENT: &str = "Message sent successfully!";

/// Shown when the email could not be sent
pub const SEND_FAILED: &str = "Failed to send message. Please try again later.";

/// The body of every API response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MessageResponse {
    /// A human-readable status message
    #[schema(example = "Message sent successfully!")]
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Failed to send message. Please try again later.")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new method not allowed error
    pub fn new_405(message: &str) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(&self.message))).into_response()
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::MissingFields => ApiError::new_400(MISSING_FIELDS),
            ContactError::DispatchFailed(_) => ApiError::new_500(SEND_FAILED),
        }
    }
}
