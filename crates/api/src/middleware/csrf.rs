//! CSRF token extractor.

use avolve_core::csrf::{COOKIE_NAME, HEADER_NAME};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::cookies;
use crate::csrf::CsrfStore;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A CSRF token present in both the `x-csrf-token` header and the
/// `csrf_token` cookie, with matching values.
///
/// Extraction rejects missing or mismatched copies with 403 but does not
/// consume the token. Handlers call [`CsrfToken::consume`] once the request
/// is otherwise known to be good, so a rejected body keeps the token usable.
#[derive(Debug, Clone)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Spend the token. Fails if it was never issued, already used, or
    /// expired.
    pub async fn consume(self, store: &CsrfStore) -> AppResult<()> {
        store
            .consume(&self.0)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "CSRF token rejected"))?;
        Ok(())
    }
}

impl FromRequestParts<AppState> for CsrfToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let submitted = parts
            .headers
            .get(HEADER_NAME)
            .and_then(|v| v.to_str().ok());
        let cookie = cookies::get(&parts.headers, COOKIE_NAME);

        let token = CsrfStore::matching_pair(cookie.as_deref(), submitted)
            .inspect_err(|e| tracing::warn!(error = %e, "CSRF check failed"))?;

        Ok(CsrfToken(token.to_string()))
    }
}
