//! Repository for the `user_activity_logs` table.

use crate::client::{Caller, PlatformClient, PlatformError};
use crate::models::activity::NewActivity;

pub struct ActivityRepo;

impl ActivityRepo {
    pub async fn log(
        client: &dyn PlatformClient,
        caller: &Caller,
        entry: &NewActivity,
    ) -> Result<(), PlatformError> {
        let body = serde_json::to_value(entry)
            .map_err(|e| PlatformError::decode("user_activity_logs", e))?;
        client
            .insert(caller, "user_activity_logs", body, None)
            .await?;
        Ok(())
    }
}
