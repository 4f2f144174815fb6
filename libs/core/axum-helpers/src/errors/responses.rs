//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "nombre": [{
                "code": "blank",
                "message": "nombre must not be empty",
                "params": {"value": ""}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid identifier",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_IDENTIFIER",
        "message": "Invalid item id: not-a-valid-id"
    })
)]
pub struct BadRequestIdentifierResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Resource not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - data store unavailable",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "error": "STORE_UNAVAILABLE",
        "message": "The data store is unavailable"
    })
)]
pub struct StoreUnavailableResponse(pub ErrorResponse);
