use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

use crate::presentation::http::cookies::get_cookie;

pub const FLASH_COOKIE: &str = "flash";
const CLEAR_FLASH_COOKIE: &str = "flash=; Path=/; Max-Age=0; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
    Error,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
            FlashLevel::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashLevel::Success),
            "info" => Some(FlashLevel::Info),
            "error" => Some(FlashLevel::Error),
            _ => None,
        }
    }
}

/// One-shot status message carried across a redirect in a cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    fn encode(&self) -> String {
        urlencoding::encode(&format!("{}|{}", self.level.as_str(), self.text)).into_owned()
    }

    fn decode(raw: &str) -> Option<Self> {
        let decoded = urlencoding::decode(raw).ok()?;
        let (level, text) = decoded.split_once('|')?;
        Some(Self {
            level: FlashLevel::parse(level)?,
            text: text.to_string(),
        })
    }
}

/// Flash message left by the previous response, if any.
pub struct IncomingFlash(pub Option<FlashMessage>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(IncomingFlash(
            get_cookie(&parts.headers, FLASH_COOKIE).and_then(|raw| FlashMessage::decode(&raw)),
        ))
    }
}

pub fn redirect(to: &str) -> Response {
    let mut response = StatusCode::FOUND.into_response();
    response.headers_mut().insert(
        header::LOCATION,
        HeaderValue::from_str(to).unwrap_or(HeaderValue::from_static("/")),
    );
    response
}

pub fn redirect_with_flash(to: &str, flash: FlashMessage) -> Response {
    let mut response = redirect(to);
    let cookie = format!(
        "{}={}; Path=/; SameSite=Lax",
        FLASH_COOKIE,
        flash.encode()
    );
    if let Ok(v) = HeaderValue::from_str(&cookie) {
        response.headers_mut().append(header::SET_COOKIE, v);
    }
    response
}

/// Rendered page; a displayed flash is cleared so it shows only once.
pub fn render_page(flash: &IncomingFlash, html: String) -> Response {
    render_page_with_status(StatusCode::OK, flash, html)
}

pub fn render_page_with_status(status: StatusCode, flash: &IncomingFlash, html: String) -> Response {
    let mut response = (status, Html(html)).into_response();
    if flash.0.is_some() {
        response.headers_mut().append(
            header::SET_COOKIE,
            HeaderValue::from_static(CLEAR_FLASH_COOKIE),
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_survives_cookie_encoding() {
        let msg = FlashMessage::new(FlashLevel::Error, "Invalid email; or | password");
        let encoded = msg.encode();
        assert!(!encoded.contains(';'));
        assert!(!encoded.contains(' '));
        assert_eq!(FlashMessage::decode(&encoded), Some(msg));
    }

    #[test]
    fn unknown_level_is_dropped() {
        assert_eq!(FlashMessage::decode("panic%7Cboom"), None);
        assert_eq!(FlashMessage::decode("no-separator"), None);
    }

    #[test]
    fn redirect_is_302_with_cookie() {
        let res = redirect_with_flash("/login", FlashMessage::new(FlashLevel::Info, "hi"));
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers()[header::LOCATION], "/login");
        let cookie = res.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("flash=info%7Chi;"));
    }
}
