//! Typed errors and HTTP mapping.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Malformed configuration values. Fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Connection initializer failures. The caller decides whether to abort.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("invalid database options: {0}")]
    Options(sqlx::Error),
    #[error("error opening database connection: {0}")]
    Connect(sqlx::Error),
    #[error("error pinging the database: {0}")]
    Ping(sqlx::Error),
    #[error("error creating products table: {0}")]
    Schema(sqlx::Error),
}

/// Request-path errors. Messages are written verbatim to the response body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        plain_text(status, self.to_string())
    }
}

/// Plain-text error body: the message followed by a newline.
pub fn plain_text(status: StatusCode, message: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("{}\n", message),
    )
        .into_response()
}
