//! Digit-only `:id` path segment.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
};

/// Product id taken from the `:id` path segment. Anything but ASCII digits is rejected
/// with the router's plain 404, before any handler logic runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn parse(segment: &str) -> Option<Self> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        segment.parse().ok().map(ProductId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;
        ProductId::parse(&segment).ok_or(StatusCode::NOT_FOUND)
    }
}
