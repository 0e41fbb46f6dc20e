use axum::http::HeaderMap;

pub const SESSION_COOKIE: &str = "session_id";

pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(axum::http::header::COOKIE) {
        let Ok(cookie_header) = header.to_str() else {
            continue;
        };
        for part in cookie_header.split(';') {
            let kv = part.trim();
            if let Some((k, v)) = kv.split_once('=') {
                if k.trim() == name {
                    return Some(v.trim().to_string());
                }
            }
        }
    }
    None
}

pub fn build_session_cookie(token: &str, secure: bool) -> String {
    // No Max-Age: the session ends with the browser session or an explicit logout.
    let secure_attr = if secure { "; Secure" } else { "" };
    format!(
        "{}={}; HttpOnly{}; Path=/; SameSite=Lax",
        SESSION_COOKIE, token, secure_attr
    )
}

pub fn clear_session_cookie(secure: bool) -> String {
    let secure_attr = if secure { "; Secure" } else { "" };
    format!(
        "{}=; HttpOnly{}; Path=/; Max-Age=0; SameSite=Lax",
        SESSION_COOKIE, secure_attr
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn finds_named_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("theme=dark; session_id=abc123 ; flash=x"),
        );
        assert_eq!(get_cookie(&headers, "session_id").as_deref(), Some("abc123"));
        assert_eq!(get_cookie(&headers, "flash").as_deref(), Some("x"));
        assert_eq!(get_cookie(&headers, "missing"), None);
    }

    #[test]
    fn session_cookie_attributes() {
        let c = build_session_cookie("tok", true);
        assert!(c.starts_with("session_id=tok;"));
        assert!(c.contains("HttpOnly"));
        assert!(c.contains("Secure"));
        assert!(!build_session_cookie("tok", false).contains("Secure"));
        assert!(clear_session_cookie(false).contains("Max-Age=0"));
    }
}
