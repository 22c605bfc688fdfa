//! Vouching calls.

use avolve_core::types::UserId;

use crate::client::{Caller, PlatformClient, PlatformError};
use crate::procedures::{self, VouchForUser};

pub struct VouchRepo;

impl VouchRepo {
    pub async fn vouch(
        client: &dyn PlatformClient,
        caller: &Caller,
        voucher_id: UserId,
        vouchee_id: UserId,
    ) -> Result<(), PlatformError> {
        let params = VouchForUser {
            p_voucher_id: voucher_id,
            p_vouchee_id: vouchee_id,
        };
        procedures::call(client, caller, &params).await?;
        Ok(())
    }
}
