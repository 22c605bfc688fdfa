//! Repository for superpuzzle milestones.

use avolve_core::types::EntityId;

use crate::client::{decode_rows, Caller, PlatformClient, PlatformError, TableQuery};
use crate::models::team::Milestone;

pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Milestones of a superpuzzle, smallest target first.
    pub async fn list_for_superpuzzle(
        client: &dyn PlatformClient,
        caller: &Caller,
        superpuzzle_id: EntityId,
    ) -> Result<Vec<Milestone>, PlatformError> {
        let query = TableQuery::new("milestones")
            .eq("superpuzzle_id", superpuzzle_id)
            .order("target_amount", true);
        let rows = client.select(caller, &query).await?;
        decode_rows("milestones", rows)
    }
}
