//! Request extractors that validate input before a handler runs.
//!
//! Rejections are reported as [`CoreError::Validation`] or
//! [`CoreError::InvalidPayload`], so malformed input never reaches a
//! repository.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::validation::{body_violation, validate_payload, PayloadContract};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body checked against the payload's [`PayloadContract`] rules, then
/// deserialized into `T`.
///
/// A body that cannot be read as JSON at all (wrong content type, syntax
/// error) is reported against the `body` field.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + PayloadContract,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| body_violation(rejection.body_text()))?;

        validate_payload(T::RULES, &body)?;

        let payload =
            serde_json::from_value(body).map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(Self(payload))
    }
}

/// Query string deserialized into `T`; type mismatches are validation
/// failures rather than plain 400s.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CoreError::Validation(rejection.body_text()))?;
        Ok(Self(params))
    }
}
