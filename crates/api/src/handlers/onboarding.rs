//! Handlers for onboarding progress.
//!
//! The step list lives in the platform's `user_onboarding` table. Whether
//! onboarding is done is decided locally from that list.

use avolve_core::onboarding::{self, OnboardingStatus};
use avolve_db::repositories::OnboardingRepo;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CompleteStepRequest {
    pub step: String,
}

// ---------------------------------------------------------------------------
// GET /onboarding
// ---------------------------------------------------------------------------

pub async fn get_progress(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<OnboardingStatus>> {
    let steps =
        OnboardingRepo::completed_steps(state.platform.as_ref(), &auth.caller(), auth.user_id)
            .await?;

    tracing::debug!(user_id = %auth.user_id, "Fetched onboarding progress");

    Ok(Json(OnboardingStatus::from_completed(steps)))
}

// ---------------------------------------------------------------------------
// POST /onboarding
// ---------------------------------------------------------------------------

/// Mark a step complete. Repeating a step is harmless.
///
/// The stored list is read, merged and written back as a whole, so two steps
/// completed concurrently for the same user can race and the later write
/// drops the other step. Clients complete steps one at a time; a retry of the
/// lost step restores it.
pub async fn complete_step(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CompleteStepRequest>,
) -> AppResult<Json<OnboardingStatus>> {
    onboarding::validate_step(&input.step)?;

    let caller = auth.caller();
    let mut steps =
        OnboardingRepo::completed_steps(state.platform.as_ref(), &caller, auth.user_id).await?;
    onboarding::record_step(&mut steps, &input.step);

    let stored = OnboardingRepo::save(state.platform.as_ref(), &caller, auth.user_id, steps).await?;
    let status = OnboardingStatus::from_completed(stored);

    tracing::info!(
        user_id = %auth.user_id,
        step = %input.step,
        onboarding_done = status.onboarding_done,
        "Onboarding step completed",
    );

    Ok(Json(status))
}
