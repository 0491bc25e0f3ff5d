//! Validation utilities for form DTOs.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::web::error::ApiError;
use crate::web::messages;

/// A urlencoded form extractor that validates the request body.
///
/// The body is deserialized with `axum::Form` and then checked with the
/// `validator` crate. Field-level failures produce a 422 response with
/// per-field details.
///
/// # Example
///
/// ```ignore
/// use lentille::web::dto::ValidatedForm;
///
/// async fn reply(ValidatedForm(form): ValidatedForm<ReplyForm>) -> Response {
///     // form is already validated
/// }
/// ```
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected form body: {}", e);
            ApiError::bad_request(messages::INVALID_FORM)
        })?;

        value.validate().map_err(ApiError::from_validation_errors)?;

        Ok(ValidatedForm(value))
    }
}

/// Reject control characters and NUL bytes in single-line fields.
pub fn no_control_chars(value: &str) -> Result<(), validator::ValidationError> {
    if value.chars().any(|c| c.is_control()) {
        return Err(validator::ValidationError::new("no_control_chars")
            .with_message("Caractères de contrôle interdits".into()));
    }
    Ok(())
}

/// Reject control characters in multi-line text, allowing newlines and tabs.
pub fn no_control_chars_multiline(value: &str) -> Result<(), validator::ValidationError> {
    if value
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
    {
        return Err(validator::ValidationError::new("no_control_chars")
            .with_message("Caractères de contrôle interdits".into()));
    }
    Ok(())
}
