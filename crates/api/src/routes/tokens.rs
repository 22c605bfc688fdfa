//! Token ledger routes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{milestones, tokens};
use crate::state::AppState;

/// ```text
/// GET    /tokens/types                    -> list_types
/// GET    /tokens/balances                 -> list_balances
/// POST   /tokens/convert                  -> convert
/// POST   /tokens/checkin                  -> checkin
/// POST   /milestones/contribute           -> contribute
/// GET    /superpuzzles/{id}/milestones    -> list_for_superpuzzle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tokens/types", get(tokens::list_types))
        .route("/tokens/balances", get(tokens::list_balances))
        .route("/tokens/convert", post(tokens::convert))
        .route("/tokens/checkin", post(tokens::checkin))
        .route("/milestones/contribute", post(milestones::contribute))
        .route(
            "/superpuzzles/{id}/milestones",
            get(milestones::list_for_superpuzzle),
        )
}
