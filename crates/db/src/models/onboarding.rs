//! Onboarding progress model.

use avolve_core::types::UserId;
use serde::{Deserialize, Serialize};

/// A row from the `user_onboarding` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OnboardingRow {
    pub user_id: UserId,
    #[serde(default)]
    pub completed_steps: Vec<String>,
}
