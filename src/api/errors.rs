use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::PlaceError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<PlaceError> for ApiError {
    fn from(err: PlaceError) -> Self {
        let message = err.to_string();
        match err {
            PlaceError::NotFound | PlaceError::NoEligiblePlaces => Self::not_found(message),
            PlaceError::DuplicateName | PlaceError::ConcurrentModification => {
                Self::conflict(message)
            }
            PlaceError::Validation(_) => Self::bad_request(message),
            PlaceError::Storage => Self::internal_server_error(message),
        }
    }
}

/// Malformed or mistyped request bodies get the same JSON error shape
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_errors_map_to_status_codes() {
        let cases = [
            (PlaceError::NotFound, StatusCode::NOT_FOUND),
            (PlaceError::NoEligiblePlaces, StatusCode::NOT_FOUND),
            (PlaceError::DuplicateName, StatusCode::CONFLICT),
            (PlaceError::ConcurrentModification, StatusCode::CONFLICT),
            (PlaceError::Validation("bad".to_string()), StatusCode::BAD_REQUEST),
            (PlaceError::Storage, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn storage_error_message_is_generic() {
        let err = ApiError::from(PlaceError::Storage);
        assert_eq!(err.message, "Database error");
    }
}
