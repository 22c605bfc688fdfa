//! Shared-secret guard for scheduler-triggered endpoints.

use avolve_core::csrf::constant_time_eq;
use avolve_core::error::CoreError;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// Admits requests bearing `Authorization: Bearer <CRON_SECRET>`.
#[derive(Debug, Clone, Copy)]
pub struct RequireCronSecret;

impl FromRequestParts<AppState> for RequireCronSecret {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .unwrap_or_default();

        if presented.is_empty() || !constant_time_eq(presented, &state.config.cron_secret) {
            tracing::warn!("Rejected cron request with bad secret");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid cron secret".into(),
            )));
        }

        Ok(RequireCronSecret)
    }
}
