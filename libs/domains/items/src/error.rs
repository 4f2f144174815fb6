use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid item id: {0}")]
    InvalidIdentifier(String),

    #[error("Item {0} not found")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::InvalidIdentifier(id) => {
                AppError::InvalidIdentifier(format!("Invalid item id: {}", id))
            }
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::StoreUnavailable(msg) => AppError::StoreUnavailable(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ItemError {
    fn from(err: mongodb::error::Error) -> Self {
        ItemError::StoreUnavailable(err.to_string())
    }
}
