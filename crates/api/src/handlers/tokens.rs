//! Handlers for the token ledger.
//!
//! Every action is one remote procedure call made with the caller's access
//! token. Results are returned as the platform produced them.

use avolve_core::tokens::{token_catalog, TokenSymbol};
use avolve_core::types::TokenAmount;
use avolve_db::models::token::{CheckinOutcome, ConversionReceipt};
use avolve_db::repositories::TokenRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /tokens/convert`.
///
/// Only presence is checked here. Amount and balance rules belong to the
/// platform.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub from_token: TokenSymbol,
    pub to_token: TokenSymbol,
    pub amount: TokenAmount,
}

#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub outcome: CheckinOutcome,
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// GET /tokens/types
// ---------------------------------------------------------------------------

/// The fixed token set. Needs no platform call.
pub async fn list_types() -> impl IntoResponse {
    Json(DataResponse {
        data: token_catalog(),
    })
}

// ---------------------------------------------------------------------------
// GET /tokens/balances
// ---------------------------------------------------------------------------

pub async fn list_balances(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let balances =
        TokenRepo::balances(state.platform.as_ref(), &auth.caller(), auth.user_id).await?;

    tracing::debug!(user_id = %auth.user_id, count = balances.len(), "Fetched balances");

    Ok(Json(DataResponse { data: balances }))
}

// ---------------------------------------------------------------------------
// POST /tokens/convert
// ---------------------------------------------------------------------------

pub async fn convert(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ConvertRequest>,
) -> AppResult<Json<ConversionReceipt>> {
    let transaction_id = TokenRepo::convert(
        state.platform.as_ref(),
        &auth.caller(),
        auth.user_id,
        input.from_token,
        input.to_token,
        input.amount,
    )
    .await
    .inspect_err(|e| {
        tracing::warn!(user_id = %auth.user_id, route = "tokens/convert", error = %e, "Conversion failed");
    })?;

    tracing::info!(
        user_id = %auth.user_id,
        from = input.from_token.as_str(),
        to = input.to_token.as_str(),
        amount = input.amount,
        transaction_id = %transaction_id,
        "Tokens converted",
    );

    Ok(Json(ConversionReceipt { transaction_id }))
}

// ---------------------------------------------------------------------------
// POST /tokens/checkin
// ---------------------------------------------------------------------------

pub async fn checkin(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<CheckinResponse>> {
    let outcome =
        TokenRepo::complete_weekly_checkin(state.platform.as_ref(), &auth.caller(), auth.user_id)
            .await?;

    tracing::info!(user_id = %auth.user_id, ?outcome, "Weekly check-in attempted");

    Ok(Json(CheckinResponse {
        outcome,
        completed: outcome == CheckinOutcome::Completed,
    }))
}
