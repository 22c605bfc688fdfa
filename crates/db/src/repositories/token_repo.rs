//! Token ledger calls: balance reads plus the conversion, check-in and
//! milestone procedures.
//!
//! Nothing here computes a balance. Inputs are forwarded as-is and remote
//! errors (insufficient balance, cooldowns) come back unmodified.

use avolve_core::tokens::TokenSymbol;
use avolve_core::types::{EntityId, TokenAmount, UserId};

use crate::client::{decode_rows, Caller, PlatformClient, PlatformError, TableQuery};
use crate::models::token::{CheckinOutcome, TokenBalance};
use crate::procedures::{self, CompleteWeeklyCheckin, ContributeToMilestone, ConvertTokens};

pub struct TokenRepo;

impl TokenRepo {
    /// All balance rows for a user, each joined with its token metadata.
    pub async fn balances(
        client: &dyn PlatformClient,
        caller: &Caller,
        user_id: UserId,
    ) -> Result<Vec<TokenBalance>, PlatformError> {
        let query = TableQuery::new("user_balances")
            .select("token_id,balance,tokens(symbol,name,description)")
            .eq("user_id", user_id);
        let rows = client.select(caller, &query).await?;
        decode_rows("user_balances", rows)
    }

    /// Convert `amount` of `from` into `to`. Returns the transaction id.
    pub async fn convert(
        client: &dyn PlatformClient,
        caller: &Caller,
        user_id: UserId,
        from: TokenSymbol,
        to: TokenSymbol,
        amount: TokenAmount,
    ) -> Result<serde_json::Value, PlatformError> {
        let params = ConvertTokens {
            p_user_id: user_id,
            p_from_token: from,
            p_to_token: to,
            p_amount: amount,
        };
        procedures::call(client, caller, &params).await
    }

    pub async fn complete_weekly_checkin(
        client: &dyn PlatformClient,
        caller: &Caller,
        user_id: UserId,
    ) -> Result<CheckinOutcome, PlatformError> {
        let params = CompleteWeeklyCheckin { p_user_id: user_id };
        let completed = procedures::call(client, caller, &params).await?;
        Ok(CheckinOutcome::from(completed))
    }

    /// Forward a milestone contribution. No idempotency key is sent; a
    /// repeated submission is only deduplicated if the platform does so.
    pub async fn contribute_to_milestone(
        client: &dyn PlatformClient,
        caller: &Caller,
        milestone_id: EntityId,
        user_id: UserId,
        amount: TokenAmount,
    ) -> Result<(), PlatformError> {
        let params = ContributeToMilestone {
            p_milestone_id: milestone_id,
            p_user_id: user_id,
            p_amount: amount,
        };
        procedures::call(client, caller, &params).await?;
        Ok(())
    }
}
