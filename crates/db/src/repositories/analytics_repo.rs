//! Analytics maintenance calls.

use crate::client::{Caller, PlatformClient, PlatformError};
use crate::procedures::{self, RefreshAnalytics};

pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Rebuild analytics views. Always runs with the service role.
    pub async fn refresh(client: &dyn PlatformClient) -> Result<(), PlatformError> {
        procedures::call(client, &Caller::Service, &RefreshAnalytics {}).await?;
        Ok(())
    }
}
