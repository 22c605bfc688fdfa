//! Teams, invitations and vouching.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{invitations, teams};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/teams", get(teams::list_mine))
        .route(
            "/invitations",
            get(invitations::list_mine).post(invitations::create),
        )
        .route("/invitations/accept", post(invitations::accept))
        .route("/vouch", post(invitations::vouch))
}
