//! Scheduler-triggered maintenance routes, mounted at `/cron`.

use axum::routing::post;
use axum::Router;

use crate::handlers::cron;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/refresh-analytics",
        // Some schedulers can only issue GET requests.
        post(cron::refresh_analytics).get(cron::refresh_analytics),
    )
}
