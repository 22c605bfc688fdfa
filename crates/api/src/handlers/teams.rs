use avolve_db::repositories::TeamRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /teams -- teams the caller is a member of.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let teams =
        TeamRepo::list_for_user(state.platform.as_ref(), &auth.caller(), auth.user_id).await?;
    Ok(Json(DataResponse { data: teams }))
}
