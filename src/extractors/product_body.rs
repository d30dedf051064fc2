//! JSON product body. Decoding failures become 400 with the decoder's message;
//! body read failures (e.g. over the size limit) keep axum's own rejection.

use crate::error::AppError;
use crate::model::ProductInput;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};

/// Decodes the body as JSON regardless of `Content-Type`.
#[derive(Debug)]
pub struct ProductBody(pub ProductInput);

#[async_trait]
impl<S> FromRequest<S> for ProductBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        let input = serde_json::from_slice::<ProductInput>(&bytes)
            .map_err(|e| AppError::BadRequest(e.to_string()).into_response())?;
        Ok(ProductBody(input))
    }
}
