//! Unified error types for the homepage server
//!
//! This module defines error types for each layer:
//! - `ContentError`: Failures at the content-provider boundary
//! - `SiteError`: Handler-facing errors mapped to HTTP responses
//!
//! An empty feed is never an error anywhere in this crate; only broken
//! content (unreadable, unparseable, or invalid) surfaces here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Content-provider boundary errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Content file not found: {0}")]
    NotFound(String),
}

/// Handler-facing errors
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{0}")]
    Content(#[from] ContentError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        // Content problems are server misconfiguration, not client errors.
        // Log the detail, respond with a generic body.
        match &self {
            SiteError::Content(e) => {
                tracing::error!("Content error: {}", e);
            }
        }

        let body = Json(ErrorResponse {
            error: "Internal server error".to_string(),
            details: None,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
