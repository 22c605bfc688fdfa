//! Repository for the `user_onboarding` table.

use avolve_core::types::UserId;

use crate::client::{decode_rows, Caller, PlatformClient, PlatformError, TableQuery};
use crate::models::onboarding::OnboardingRow;

pub struct OnboardingRepo;

impl OnboardingRepo {
    /// Completed steps for a user; empty if no row exists yet.
    pub async fn completed_steps(
        client: &dyn PlatformClient,
        caller: &Caller,
        user_id: UserId,
    ) -> Result<Vec<String>, PlatformError> {
        let query = TableQuery::new("user_onboarding")
            .select("user_id,completed_steps")
            .eq("user_id", user_id)
            .limit(1);
        let rows = client.select(caller, &query).await?;
        Ok(decode_rows::<OnboardingRow>("user_onboarding", rows)?
            .into_iter()
            .next()
            .map(|row| row.completed_steps)
            .unwrap_or_default())
    }

    /// Replace the stored step list (upsert keyed on `user_id`).
    pub async fn save(
        client: &dyn PlatformClient,
        caller: &Caller,
        user_id: UserId,
        completed_steps: Vec<String>,
    ) -> Result<Vec<String>, PlatformError> {
        let row = OnboardingRow {
            user_id,
            completed_steps,
        };
        let body = serde_json::to_value(&row)
            .map_err(|e| PlatformError::decode("user_onboarding", e))?;
        let stored = client
            .insert(caller, "user_onboarding", body, Some("user_id"))
            .await?;
        Ok(decode_rows::<OnboardingRow>("user_onboarding", stored)?
            .into_iter()
            .next()
            .map(|r| r.completed_steps)
            .unwrap_or(row.completed_steps))
    }
}
