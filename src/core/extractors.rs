//! Axum extractor for validated request bodies

use crate::core::error::{DocsError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Axum extractor that decodes a JSON body and runs its `validator` rules
///
/// Decoding and validation failures are both reported as
/// `DocsError::Validation` (400).
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_template(
///     State(state): State<AppState>,
///     Validated(payload): Validated<CreateTemplate>,
/// ) -> Result<Json<Template>, DocsError> {
///     // payload is already validated
/// }
/// ```
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = DocsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::InvalidBody {
                message: rejection.body_text(),
            })?;

        payload.validate().map_err(ValidationError::from)?;

        Ok(Self(payload))
    }
}
