//! Team, superpuzzle and milestone models.

use avolve_core::types::{EntityId, Timestamp, TokenAmount};
use serde::{Deserialize, Serialize};

/// A row from the `teams` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Team {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<Timestamp>,
}

/// A `team_members` row with its team embedded.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMembership {
    #[serde(rename = "teams")]
    pub team: Team,
}

/// A row from the `milestones` table.
///
/// `current_amount` and `completed_at` are maintained by the platform.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Milestone {
    pub id: EntityId,
    pub superpuzzle_id: EntityId,
    pub title: String,
    pub target_amount: TokenAmount,
    #[serde(default)]
    pub current_amount: TokenAmount,
    pub completed_at: Option<Timestamp>,
}
