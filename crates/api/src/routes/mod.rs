pub mod account;
pub mod community;
pub mod csrf;
pub mod health;
pub mod system;
pub mod tokens;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /csrf                                  issue token (public)
/// /csrf/validate                         validate token (public)
///
/// /me                                    current user, profile, stage
/// /profile/progression                   stage + redirect path
/// /onboarding                            get progress, complete step
/// /activity                              log activity
/// /email/change-email                    change-email mail (csrf)
/// /email/reauth                          reauthentication code (csrf)
///
/// /tokens/types                          fixed token set (public)
/// /tokens/balances                       caller's balances
/// /tokens/convert                        convert between tokens
/// /tokens/checkin                        weekly check-in
/// /milestones/contribute                 contribute to a milestone
/// /superpuzzles/{id}/milestones          milestones of a superpuzzle
///
/// /teams                                 caller's teams
/// /invitations                           list own, create
/// /invitations/accept                    accept an invitation code
/// /vouch                                 vouch for another user
///
/// /cron/refresh-analytics                analytics refresh (cron secret)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/csrf", csrf::router())
        .merge(account::router())
        .merge(tokens::router())
        .merge(community::router())
        .nest("/cron", system::router())
}
