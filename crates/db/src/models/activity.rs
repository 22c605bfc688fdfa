//! Activity log model.

use avolve_core::types::UserId;
use serde::Serialize;

/// DTO for inserting a row into `user_activity_logs`.
#[derive(Debug, Clone, Serialize)]
pub struct NewActivity {
    pub user_id: UserId,
    pub action: String,
    pub metadata: Option<serde_json::Value>,
}
