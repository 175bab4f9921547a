//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for every way a gist composition can fail and implements
//! Axum's `IntoResponse` so handlers can return it directly with a JSON
//! error body.
//!
//! Error mappings:
//! - `Fetch`, `Parse`, `Highlight` → 400 (original message passed through)
//! - `Render` → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Highlight error: {0}")]
    Highlight(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Fetch(e.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(e: chrono::ParseError) -> Self {
        AppError::Parse(e.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Fetch(_) | AppError::Parse(_) | AppError::Highlight(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match &self {
            AppError::Fetch(msg)
            | AppError::Parse(msg)
            | AppError::Highlight(msg)
            | AppError::Render(msg) => msg.clone(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (self.status(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
