//! Handlers for account emails.
//!
//! Both routes require a valid CSRF token in addition to the access token.
//! The token is consumed only after the body validates and the message is
//! built, right before sending.

use std::sync::Arc;

use avolve_mail::{templates, Mailer};
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::csrf::CsrfToken;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEmailRequest {
    #[validate(email)]
    pub new_email: String,
    #[validate(length(min = 1))]
    pub token_hash: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReauthRequest {
    /// One-time code issued by the auth provider.
    #[validate(length(min = 1, max = 32))]
    pub token: String,
}

fn mailer(state: &AppState) -> AppResult<&Arc<dyn Mailer>> {
    state
        .mailer
        .as_ref()
        .ok_or_else(|| AppError::InternalError("Email delivery is not configured".into()))
}

// ---------------------------------------------------------------------------
// POST /email/change-email
// ---------------------------------------------------------------------------

pub async fn send_change_email(
    auth: AuthUser,
    csrf: CsrfToken,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ChangeEmailRequest>,
) -> AppResult<StatusCode> {
    let mailer = mailer(&state)?;
    let message =
        templates::change_email(&state.config.site_url, &input.new_email, &input.token_hash)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
    csrf.consume(&state.csrf).await?;
    mailer.send(&message).await?;

    tracing::info!(user_id = %auth.user_id, "Change-email confirmation sent");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// POST /email/reauth
// ---------------------------------------------------------------------------

pub async fn send_reauth(
    auth: AuthUser,
    csrf: CsrfToken,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ReauthRequest>,
) -> AppResult<StatusCode> {
    let mailer = mailer(&state)?;
    let to = auth
        .email
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Account has no email address".into()))?;
    let message = templates::reauthentication(to, &input.token)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    csrf.consume(&state.csrf).await?;
    mailer.send(&message).await?;

    tracing::info!(user_id = %auth.user_id, "Reauthentication code sent");

    Ok(StatusCode::NO_CONTENT)
}
