//! Query-string extractor with `validator` rules

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::error::ApiError;

/// Deserializes the query string and runs its validation rules
///
/// Undecodable values and rule violations are both answered with 422
/// before the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::unprocessable(rejection.body_text()).with_code("invalid_query")
            })?;

        value.validate().map_err(validation_error)?;

        Ok(ValidatedQuery(value))
    }
}

fn validation_error(errors: ValidationErrors) -> ApiError {
    let param = errors
        .field_errors()
        .keys()
        .next()
        .map(|field| field.to_string());

    let error = ApiError::unprocessable(errors.to_string()).with_code("out_of_range");

    match param {
        Some(param) => error.with_param(param),
        None => error,
    }
}
