//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;
use domain::MSG_INVALID_BODY;

/// JSON body extractor for request DTOs.
///
/// Both serde rejections and `validate` failures answer 400 with the
/// failure envelope; serde errors carry the invalid-body prefix.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Missing fields, wrong types and negative ages all fail here
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(format!("{}: {}", MSG_INVALID_BODY, e.body_text())))?;

        value.validate().map_err(|e| {
            // Only one message reaches the envelope, e.g. the empty-name check
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| MSG_INVALID_BODY.to_string());
            AppError::validation(message)
        })?;

        Ok(ValidatedJson(value))
    }
}
