use avolve_db::repositories::AnalyticsRepo;
use axum::extract::State;
use axum::http::StatusCode;

use crate::error::AppResult;
use crate::middleware::cron::RequireCronSecret;
use crate::state::AppState;

/// POST /cron/refresh-analytics
pub async fn refresh_analytics(
    _auth: RequireCronSecret,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    AnalyticsRepo::refresh(state.platform.as_ref()).await?;
    tracing::info!("Analytics views refreshed");
    Ok(StatusCode::NO_CONTENT)
}
