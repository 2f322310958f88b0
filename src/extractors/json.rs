//! JSON body extractor that also enforces column widths of the input shape.

use crate::error::AppError;
use crate::models::Writable;
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// Deserialized and width-checked input. Rejection happens before any query runs.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Writable + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        RequestValidator::validate_input(&value)?;
        Ok(ValidJson(value))
    }
}
