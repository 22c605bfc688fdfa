//! Invitation model.

use avolve_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A row from the `invitations` table, as returned by `create_invitation`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Invitation {
    pub code: String,
    pub email: Option<String>,
    pub created_by: Option<UserId>,
    pub expires_at: Timestamp,
    pub accepted_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
}
