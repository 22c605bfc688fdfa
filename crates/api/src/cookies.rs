//! Minimal `Cookie` / `Set-Cookie` handling.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Cookie the auth provider's client stores the access token in.
pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";

/// Find the value of cookie `name` across all `Cookie` headers.
pub fn get(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// Render a `Set-Cookie` value for an HTTP-only, same-site-strict cookie.
pub fn http_only(name: &str, value: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie =
        format!("{name}={value}; Path=/; Max-Age={max_age_secs}; HttpOnly; SameSite=Strict");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
