//! Typed contracts for the platform's remote procedures.
//!
//! Each procedure is a parameter struct whose fields serialize to the
//! function's named arguments, paired with the Rust type its result decodes
//! into. Calls go through [`call`], so a payload that does not match the
//! contract fails as [`PlatformError::Decode`] instead of propagating an
//! untyped value.

use avolve_core::tokens::TokenSymbol;
use avolve_core::types::{EntityId, TokenAmount, UserId};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::client::{decode, Caller, PlatformClient, PlatformError};
use crate::models::invitation::Invitation;

/// A database function callable through the platform's RPC interface.
pub trait Procedure: Serialize + Send + Sync {
    /// Function name as exposed by the platform.
    const NAME: &'static str;
    /// Decoded result. [`IgnoredAny`] for functions whose result is not used.
    type Output: DeserializeOwned;
}

/// Invoke `params`' procedure and decode its result.
pub async fn call<P: Procedure>(
    client: &dyn PlatformClient,
    caller: &Caller,
    params: &P,
) -> Result<P::Output, PlatformError> {
    let body = serde_json::to_value(params).map_err(|e| PlatformError::decode(P::NAME, e))?;
    let value = client.rpc(caller, P::NAME, body).await?;
    decode(P::NAME, value)
}

// ---------------------------------------------------------------------------
// Token ledger
// ---------------------------------------------------------------------------

/// `convert_tokens`: move value between token types. Returns the
/// transaction id, whose shape is the platform's to choose.
#[derive(Debug, Serialize)]
pub struct ConvertTokens {
    pub p_user_id: UserId,
    pub p_from_token: TokenSymbol,
    pub p_to_token: TokenSymbol,
    pub p_amount: TokenAmount,
}

impl Procedure for ConvertTokens {
    const NAME: &'static str = "convert_tokens";
    type Output = serde_json::Value;
}

/// `complete_weekly_checkin`: `true` if the check-in was recorded, `false`
/// while the cooldown is still running.
#[derive(Debug, Serialize)]
pub struct CompleteWeeklyCheckin {
    pub p_user_id: UserId,
}

impl Procedure for CompleteWeeklyCheckin {
    const NAME: &'static str = "complete_weekly_checkin";
    type Output = bool;
}

/// `contribute_to_milestone`: add `p_amount` toward a milestone.
#[derive(Debug, Serialize)]
pub struct ContributeToMilestone {
    pub p_milestone_id: EntityId,
    pub p_user_id: UserId,
    pub p_amount: TokenAmount,
}

impl Procedure for ContributeToMilestone {
    const NAME: &'static str = "contribute_to_milestone";
    type Output = IgnoredAny;
}

// ---------------------------------------------------------------------------
// Invitations and vouching
// ---------------------------------------------------------------------------

/// `create_invitation`: returns the new invitation row.
#[derive(Debug, Serialize)]
pub struct CreateInvitation {
    pub p_email: Option<String>,
    pub p_expires_in_days: i32,
}

impl Procedure for CreateInvitation {
    const NAME: &'static str = "create_invitation";
    type Output = Invitation;
}

/// `accept_invitation`: `false` if the code is unknown, expired or used.
#[derive(Debug, Serialize)]
pub struct AcceptInvitation {
    pub p_code: String,
    pub p_user_id: UserId,
}

impl Procedure for AcceptInvitation {
    const NAME: &'static str = "accept_invitation";
    type Output = bool;
}

/// `vouch_for_user`.
#[derive(Debug, Serialize)]
pub struct VouchForUser {
    pub p_voucher_id: UserId,
    pub p_vouchee_id: UserId,
}

impl Procedure for VouchForUser {
    const NAME: &'static str = "vouch_for_user";
    type Output = IgnoredAny;
}

// ---------------------------------------------------------------------------
// Maintenance
// ---------------------------------------------------------------------------

/// `refresh_analytics`: rebuild the analytics materialized views.
#[derive(Debug, Serialize)]
pub struct RefreshAnalytics {}

impl Procedure for RefreshAnalytics {
    const NAME: &'static str = "refresh_analytics";
    type Output = IgnoredAny;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
