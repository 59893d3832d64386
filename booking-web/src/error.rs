//! Error types for booking-web
//!
//! Read paths that cannot find their record answer with the 404 page; any
//! other failure is logged and answered with the 500 page. Write failures
//! never reach this type: handlers turn them into flash messages.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::ui;

#[derive(Debug, Error)]
pub enum WebError {
    /// Unknown route or missing record (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record store or query layer failure
    #[error(transparent)]
    Common(#[from] booking_common::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound(_) | WebError::Common(booking_common::Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, Html(ui::errors::not_found_page())).into_response()
            }
            WebError::Common(err) => {
                error!(kind = err.kind(), "Request failed: {}", err);
                server_error_response()
            }
        }
    }
}

/// The 500 page
pub fn server_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(ui::errors::server_error_page()),
    )
        .into_response()
}

/// Result type for page handlers
pub type WebResult<T> = Result<T, WebError>;
