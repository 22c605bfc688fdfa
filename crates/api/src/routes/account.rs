//! Routes scoped to the signed-in user's own account.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{activity, email, onboarding, profile};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(profile::me))
        .route("/profile/progression", get(profile::progression))
        .route(
            "/onboarding",
            get(onboarding::get_progress).post(onboarding::complete_step),
        )
        .route("/activity", post(activity::log_activity))
        .route("/email/change-email", post(email::send_change_email))
        .route("/email/reauth", post(email::send_reauth))
}
