//! Type-safe error codes for API responses.
//!
//! Each code carries:
//! - String representation for clients (e.g., "VALIDATION_ERROR")
//! - Integer code for logs and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidIdentifier;
//! assert_eq!(code.as_str(), "INVALID_IDENTIFIER");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Path identifier is not in the store's identifier format
    InvalidIdentifier,

    /// Request body is not valid JSON for the expected schema
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    // Backend errors (2000-2999)
    /// The document store could not be reached or rejected the operation
    StoreUnavailable,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients can match on
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidIdentifier => "INVALID_IDENTIFIER",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// - 1000-1999: client errors
    /// - 2000-2999: backend errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidIdentifier => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::StoreUnavailable => 2001,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidIdentifier => "Invalid identifier format",
            Self::InvalidJson => "Invalid request body",
            Self::NotFound => "Resource not found",
            Self::StoreUnavailable => "The data store is unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
