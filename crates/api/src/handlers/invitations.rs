//! Handlers for the invitation and vouching workflow.
//!
//! Creation, acceptance and vouching are single remote procedure calls.
//! Code generation, expiry and acceptance rules are owned by the platform.

use avolve_core::types::UserId;
use avolve_db::models::invitation::Invitation;
use avolve_db::repositories::{InvitationRepo, VouchRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Invitation lifetime when the request does not specify one.
const DEFAULT_EXPIRES_IN_DAYS: i32 = 7;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    /// Restrict the invitation to this address.
    #[validate(email)]
    pub email: Option<String>,
    #[validate(range(min = 1, max = 30))]
    pub expires_in_days: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AcceptInvitationRequest {
    #[validate(length(min = 1, max = 64))]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct AcceptInvitationResponse {
    pub accepted: bool,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VouchRequest {
    /// The user being vouched for.
    pub user_id: UserId,
}

// ---------------------------------------------------------------------------
// GET /invitations
// ---------------------------------------------------------------------------

pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let invitations =
        InvitationRepo::list_created_by(state.platform.as_ref(), &auth.caller(), auth.user_id)
            .await?;
    Ok(Json(DataResponse { data: invitations }))
}

// ---------------------------------------------------------------------------
// POST /invitations
// ---------------------------------------------------------------------------

pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateInvitationRequest>,
) -> AppResult<(StatusCode, Json<Invitation>)> {
    let email = input
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());
    let days = input.expires_in_days.unwrap_or(DEFAULT_EXPIRES_IN_DAYS);

    let invitation =
        InvitationRepo::create(state.platform.as_ref(), &auth.caller(), email, days).await?;

    tracing::info!(user_id = %auth.user_id, expires_in_days = days, "Invitation created");

    Ok((StatusCode::CREATED, Json(invitation)))
}

// ---------------------------------------------------------------------------
// POST /invitations/accept
// ---------------------------------------------------------------------------

pub async fn accept(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<AcceptInvitationRequest>,
) -> AppResult<Json<AcceptInvitationResponse>> {
    let code = input.code.trim();
    if code.is_empty() {
        return Err(AppError::BadRequest("Invitation code is required".into()));
    }

    let accepted =
        InvitationRepo::accept(state.platform.as_ref(), &auth.caller(), code, auth.user_id)
            .await?;

    if !accepted {
        tracing::info!(user_id = %auth.user_id, "Invitation rejected by platform");
        return Err(AppError::BadRequest("Invalid or expired invitation".into()));
    }

    tracing::info!(user_id = %auth.user_id, "Invitation accepted");

    Ok(Json(AcceptInvitationResponse { accepted }))
}

// ---------------------------------------------------------------------------
// POST /vouch
// ---------------------------------------------------------------------------

pub async fn vouch(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<VouchRequest>,
) -> AppResult<StatusCode> {
    if input.user_id == auth.user_id {
        return Err(AppError::BadRequest("You cannot vouch for yourself".into()));
    }

    VouchRepo::vouch(
        state.platform.as_ref(),
        &auth.caller(),
        auth.user_id,
        input.user_id,
    )
    .await?;

    tracing::info!(voucher_id = %auth.user_id, vouchee_id = %input.user_id, "Vouch recorded");

    Ok(StatusCode::NO_CONTENT)
}
