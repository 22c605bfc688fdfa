//! Handlers for the current user and their progression stage.

use avolve_core::progression::Stage;
use avolve_core::types::UserId;
use avolve_db::models::profile::Profile;
use avolve_db::repositories::ProfileRepo;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: UserId,
    pub email: Option<String>,
    /// `None` until the platform has created the profile row.
    pub profile: Option<Profile>,
    pub stage: Stage,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionResponse {
    pub stage: Stage,
    pub redirect_path: &'static str,
    pub ready: bool,
}

/// A missing profile has satisfied nothing yet.
fn stage_of(profile: Option<&Profile>) -> Stage {
    profile
        .map(Profile::flags)
        .unwrap_or_default()
        .stage()
}

/// GET /me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<MeResponse>> {
    let profile =
        ProfileRepo::find_by_id(state.platform.as_ref(), &auth.caller(), auth.user_id).await?;
    let stage = stage_of(profile.as_ref());

    tracing::debug!(user_id = %auth.user_id, ?stage, "Fetched current user");

    Ok(Json(MeResponse {
        id: auth.user_id,
        email: auth.email,
        profile,
        stage,
    }))
}

/// GET /profile/progression
pub async fn progression(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProgressionResponse>> {
    let profile =
        ProfileRepo::find_by_id(state.platform.as_ref(), &auth.caller(), auth.user_id).await?;
    let stage = stage_of(profile.as_ref());

    Ok(Json(ProgressionResponse {
        stage,
        redirect_path: stage.redirect_path(),
        ready: stage.is_ready(),
    }))
}
