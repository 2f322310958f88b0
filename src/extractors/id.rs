//! Integer primary key from the `{id}` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation(format!("id must be an integer, got '{}'", raw)))?;
        Ok(ResourceId(id))
    }
}
