pub mod activity;
pub mod cron;
pub mod csrf;
pub mod email;
pub mod invitations;
pub mod milestones;
pub mod onboarding;
pub mod profile;
pub mod teams;
pub mod tokens;

use std::str::FromStr;

use crate::error::AppError;

/// Parse a UUID path segment, reporting failures in the JSON error envelope.
pub(crate) fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {what}: {raw}")))
}
