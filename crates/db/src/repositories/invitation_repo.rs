//! Invitation workflow calls.

use avolve_core::types::UserId;

use crate::client::{decode_rows, Caller, PlatformClient, PlatformError, TableQuery};
use crate::models::invitation::Invitation;
use crate::procedures::{self, AcceptInvitation, CreateInvitation};

pub struct InvitationRepo;

impl InvitationRepo {
    pub async fn create(
        client: &dyn PlatformClient,
        caller: &Caller,
        email: Option<String>,
        expires_in_days: i32,
    ) -> Result<Invitation, PlatformError> {
        let params = CreateInvitation {
            p_email: email,
            p_expires_in_days: expires_in_days,
        };
        procedures::call(client, caller, &params).await
    }

    /// Returns `false` if the platform rejected the code.
    pub async fn accept(
        client: &dyn PlatformClient,
        caller: &Caller,
        code: &str,
        user_id: UserId,
    ) -> Result<bool, PlatformError> {
        let params = AcceptInvitation {
            p_code: code.to_string(),
            p_user_id: user_id,
        };
        procedures::call(client, caller, &params).await
    }

    /// Invitations created by a user, newest first.
    pub async fn list_created_by(
        client: &dyn PlatformClient,
        caller: &Caller,
        user_id: UserId,
    ) -> Result<Vec<Invitation>, PlatformError> {
        let query = TableQuery::new("invitations")
            .eq("created_by", user_id)
            .order("created_at", false);
        let rows = client.select(caller, &query).await?;
        decode_rows("invitations", rows)
    }
}
