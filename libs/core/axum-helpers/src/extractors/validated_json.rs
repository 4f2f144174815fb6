//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that also runs `Validate`.
///
/// Both failure modes answer 400 with the standard error body: a body that
/// does not deserialize (bad JSON, wrong content type, missing required
/// field) yields `INVALID_JSON`, a body that fails validation yields
/// `VALIDATION_ERROR` with per-field details.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(length(min = 1))]
///     nombre: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateItem>) -> String {
///     input.nombre
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
