//! Repository for the `profiles` table.

use avolve_core::types::UserId;

use crate::client::{decode_rows, Caller, PlatformClient, PlatformError, TableQuery};
use crate::models::profile::Profile;

/// Column list for `profiles` reads.
const COLUMNS: &str = "\
    id,username,full_name,avatar_url,\
    has_agreed_to_terms,has_genius_id,has_gen_tokens,has_genie_ai,\
    created_at";

pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a profile by user id.
    pub async fn find_by_id(
        client: &dyn PlatformClient,
        caller: &Caller,
        user_id: UserId,
    ) -> Result<Option<Profile>, PlatformError> {
        let query = TableQuery::new("profiles")
            .select(COLUMNS)
            .eq("id", user_id)
            .limit(1);
        let rows = client.select(caller, &query).await?;
        Ok(decode_rows::<Profile>("profiles", rows)?.into_iter().next())
    }
}
