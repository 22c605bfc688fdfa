//! Handlers for milestone contributions and superpuzzle milestones.

use avolve_core::types::{EntityId, TokenAmount};
use avolve_db::repositories::{MilestoneRepo, TokenRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use super::parse_id;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContributeRequest {
    pub milestone_id: EntityId,
    pub amount: TokenAmount,
}

/// POST /milestones/contribute
///
/// Aggregation and completion detection happen on the platform.
pub async fn contribute(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ContributeRequest>,
) -> AppResult<StatusCode> {
    TokenRepo::contribute_to_milestone(
        state.platform.as_ref(),
        &auth.caller(),
        input.milestone_id,
        auth.user_id,
        input.amount,
    )
    .await?;

    tracing::info!(
        user_id = %auth.user_id,
        milestone_id = %input.milestone_id,
        amount = input.amount,
        "Milestone contribution recorded",
    );

    Ok(StatusCode::NO_CONTENT)
}

/// GET /superpuzzles/{id}/milestones
pub async fn list_for_superpuzzle(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let superpuzzle_id: EntityId = parse_id(&id, "superpuzzle id")?;
    let milestones =
        MilestoneRepo::list_for_superpuzzle(state.platform.as_ref(), &auth.caller(), superpuzzle_id)
            .await?;
    Ok(Json(DataResponse { data: milestones }))
}
