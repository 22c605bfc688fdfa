//! CSRF token generation, hashing and constant-time comparison.
//!
//! Tokens are random alphanumeric strings handed to the browser once (in a
//! cookie and the response body). Only their SHA-256 hash is kept
//! server-side.

use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Length of a generated CSRF token.
pub const TOKEN_LENGTH: usize = 32;

/// Default token lifetime in seconds, matching the cookie `Max-Age`.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Default cap on outstanding (issued, unused, unexpired) tokens.
pub const DEFAULT_MAX_OUTSTANDING: usize = 10_000;

/// Name of the cookie carrying the token.
pub const COOKIE_NAME: &str = "csrf_token";

/// Name of the request header carrying the submitted token.
pub const HEADER_NAME: &str = "x-csrf-token";

/// Generate a new random token.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// SHA-256 hex digest of a token, used as the server-side lookup key.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compare two secrets without leaking where they first differ.
///
/// Length mismatches return `false` immediately; length is not secret.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    bool::from(a.ct_eq(b))
}
