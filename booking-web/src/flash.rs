//! One-shot flash messages
//!
//! A flash is set as a cookie on a redirect response, rendered by the next
//! HTML page, and cleared by that page's response.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "booking_flash";

/// `Set-Cookie` value that expires the flash cookie
pub const CLEAR_FLASH_COOKIE: &str = "booking_flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    fn tag(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }

    /// CSS class for the banner
    pub fn css_class(self) -> &'static str {
        match self {
            FlashLevel::Success => "flash flash-success",
            FlashLevel::Error => "flash flash-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Cookie payload: base64url of `level|message`
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(format!("{}|{}", self.level.tag(), self.message))
    }

    pub fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value.trim()).ok()?;
        let text = String::from_utf8(bytes).ok()?;
        let (tag, message) = text.split_once('|')?;

        let level = match tag {
            "success" => FlashLevel::Success,
            "error" => FlashLevel::Error,
            _ => return None,
        };

        Some(Self {
            level,
            message: message.to_string(),
        })
    }

    pub fn set_cookie_value(&self) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            FLASH_COOKIE,
            self.encode()
        )
    }

    /// 303 redirect carrying this flash
    pub fn redirect(self, location: &str) -> Response {
        let mut response = (StatusCode::SEE_OTHER, [(header::LOCATION, location.to_string())])
            .into_response();

        if let Ok(cookie) = HeaderValue::from_str(&self.set_cookie_value()) {
            response.headers_mut().append(header::SET_COOKIE, cookie);
        }
        response
    }
}

/// Flash carried in on the request cookie, if any
#[derive(Debug, Clone, Default)]
pub struct IncomingFlash(pub Option<Flash>);

impl IncomingFlash {
    pub fn from_headers(headers: &axum::http::HeaderMap) -> Self {
        let flash = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| Flash::decode(value));

        Self(flash)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
