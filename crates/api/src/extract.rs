//! Request body extractors.

use avolve_core::error::CoreError;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is deserialized and then checked with [`Validate`].
///
/// Unlike plain [`Json`], malformed bodies and missing fields are reported
/// as 400 `BAD_REQUEST` in the standard error envelope rather than axum's
/// plain-text 422. Rule violations are 400 `VALIDATION_ERROR`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

        Ok(Self(value))
    }
}
