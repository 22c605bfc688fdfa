//! Repository for team membership reads.

use avolve_core::types::UserId;

use crate::client::{decode_rows, Caller, PlatformClient, PlatformError, TableQuery};
use crate::models::team::{Team, TeamMembership};

pub struct TeamRepo;

impl TeamRepo {
    /// Teams the user is a member of.
    pub async fn list_for_user(
        client: &dyn PlatformClient,
        caller: &Caller,
        user_id: UserId,
    ) -> Result<Vec<Team>, PlatformError> {
        let query = TableQuery::new("team_members")
            .select("teams(id,name,description,created_at)")
            .eq("user_id", user_id);
        let rows = client.select(caller, &query).await?;
        let memberships: Vec<TeamMembership> = decode_rows("team_members", rows)?;
        Ok(memberships.into_iter().map(|m| m.team).collect())
    }
}
