use avolve_db::models::activity::NewActivity;
use avolve_db::repositories::ActivityRepo;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct LogActivityRequest {
    #[validate(length(min = 1, max = 100))]
    pub action: String,
    pub metadata: Option<serde_json::Value>,
}

/// POST /activity -- append an entry to the caller's activity log.
pub async fn log_activity(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LogActivityRequest>,
) -> AppResult<StatusCode> {
    let entry = NewActivity {
        user_id: auth.user_id,
        action: input.action,
        metadata: input.metadata,
    };
    ActivityRepo::log(state.platform.as_ref(), &auth.caller(), &entry).await?;
    Ok(StatusCode::NO_CONTENT)
}
