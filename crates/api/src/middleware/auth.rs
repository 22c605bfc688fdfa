//! JWT-based authentication extractor for Axum handlers.

use avolve_core::error::CoreError;
use avolve_core::types::UserId;
use avolve_db::Caller;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::cookies::{self, ACCESS_TOKEN_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from the auth provider's access token.
///
/// The token is read from `Authorization: Bearer <token>`, falling back to
/// the `sb-access-token` cookie. Rejection happens before the handler runs,
/// so no platform call is made for unauthenticated requests.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's UUID (from `claims.sub`).
    pub user_id: UserId,
    /// Email address on the account, if any.
    pub email: Option<String>,
    /// Database role (normally `"authenticated"`).
    pub role: String,
    access_token: String,
}

impl AuthUser {
    /// Platform identity for calls made on this user's behalf.
    pub fn caller(&self) -> Caller {
        Caller::user(self.access_token.clone())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match parts.headers.get(AUTHORIZATION) {
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(str::to_string)
                .ok_or_else(|| {
                    AppError::Core(CoreError::Unauthorized(
                        "Invalid Authorization format. Expected: Bearer <token>".into(),
                    ))
                })?,
            None => cookies::get(&parts.headers, ACCESS_TOKEN_COOKIE).ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing access token".into()))
            })?,
        };

        let claims = validate_token(&token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected access token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
            access_token: token,
        })
    }
}
