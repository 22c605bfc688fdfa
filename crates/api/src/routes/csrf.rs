//! Mounted at `/csrf` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::csrf;
use crate::state::AppState;

/// ```text
/// GET    /           -> issue_token
/// POST   /validate   -> validate_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(csrf::issue_token))
        .route("/validate", post(csrf::validate_token))
}
