//! Landing page, stylesheet and the 404 fallback

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::WebError;
use crate::flash::IncomingFlash;
use crate::ui;

const BOOKING_CSS: &str = include_str!("../../static/booking.css");

/// GET /
pub async fn index(flash: IncomingFlash) -> Response {
    ui::home(flash)
}

/// GET /static/booking.css
pub async fn serve_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        BOOKING_CSS,
    )
        .into_response()
}

/// Router fallback
pub async fn not_found() -> WebError {
    WebError::NotFound("no such route".to_string())
}
