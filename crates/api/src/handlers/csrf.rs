//! Handlers for CSRF token issue and validation.

use avolve_core::csrf::COOKIE_NAME;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::cookies;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfTokenResponse {
    pub csrf_token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ValidateCsrfRequest {
    #[validate(length(min = 1))]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateCsrfResponse {
    pub valid: bool,
}

// ---------------------------------------------------------------------------
// GET /csrf
// ---------------------------------------------------------------------------

/// Issue a token in both the response body and an HTTP-only cookie.
pub async fn issue_token(State(state): State<AppState>) -> impl IntoResponse {
    let token = state.csrf.issue().await;
    let cookie = cookies::http_only(
        COOKIE_NAME,
        &token,
        state.csrf.ttl_secs(),
        state.config.secure_cookies(),
    );

    tracing::debug!("Issued CSRF token");

    (
        [(SET_COOKIE, cookie)],
        Json(CsrfTokenResponse { csrf_token: token }),
    )
}

// ---------------------------------------------------------------------------
// POST /csrf/validate
// ---------------------------------------------------------------------------

/// Validate (and consume) a token submitted in the body against the cookie.
pub async fn validate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<ValidateCsrfRequest>,
) -> AppResult<Json<ValidateCsrfResponse>> {
    let cookie = cookies::get(&headers, COOKIE_NAME);
    state
        .csrf
        .validate(cookie.as_deref(), Some(&input.token))
        .await?;

    Ok(Json(ValidateCsrfResponse { valid: true }))
}
