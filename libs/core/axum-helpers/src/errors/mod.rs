pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every error leaving the API has this shape:
/// - `code`: integer code for logs and monitoring (e.g., 1004)
/// - `error`: machine-readable identifier (e.g., "NOT_FOUND")
/// - `message`: human-readable message
/// - `details`: optional structured details (e.g., field validation errors)
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Item 65f1c0a2b3d4e5f601234567 not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AppError {
    /// Status code, error code, message and details for this error.
    fn parts(self) -> (StatusCode, ErrorCode, String, Option<Value>) {
        match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON extraction error: {}",
                    e.body_text()
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidJson,
                    e.body_text(),
                    None,
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(validation_details(&e)),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Bad request: {}",
                    msg
                );
                (StatusCode::BAD_REQUEST, ErrorCode::ValidationError, msg, None)
            }
            AppError::InvalidIdentifier(msg) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidIdentifier.code(),
                    "Invalid identifier: {}",
                    msg
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidIdentifier,
                    msg,
                    None,
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg, None)
            }
            AppError::StoreUnavailable(msg) => {
                tracing::error!(
                    error_code = ErrorCode::StoreUnavailable.code(),
                    "Store unavailable: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StoreUnavailable,
                    msg,
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let mut body = ErrorResponse::new(code, message);
        body.details = details;

        (status, Json(body)).into_response()
    }
}

/// Field-keyed validation errors, e.g. `{"nombre": [{"code": "length", ...}]}`.
pub fn validation_details(errors: &ValidationErrors) -> Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    Value::Object(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        nombre: String,
    }

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Item x not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.code, 1004);
        assert_eq!(body.error, "NOT_FOUND");
        assert_eq!(body.message, "Item x not found");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_invalid_identifier_maps_to_400() {
        let response = AppError::InvalidIdentifier("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.error, "INVALID_IDENTIFIER");
    }

    #[tokio::test]
    async fn test_store_unavailable_maps_to_500() {
        let response = AppError::StoreUnavailable("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.code, 2001);
    }

    #[tokio::test]
    async fn test_validation_errors_carry_field_details() {
        let errors = Named { nombre: String::new() }.validate().unwrap_err();
        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.error, "VALIDATION_ERROR");
        let details = body.details.unwrap();
        assert_eq!(details["nombre"][0]["code"], "length");
    }
}
