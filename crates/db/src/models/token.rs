//! Token balance models and ledger procedure results.

use avolve_core::types::TokenAmount;
use serde::{Deserialize, Serialize};

/// Token metadata embedded in a balance row (`tokens(...)` relation).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenMeta {
    pub symbol: String,
    pub name: String,
    pub description: Option<String>,
}

/// A row from `user_balances` joined with its token.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TokenBalance {
    pub token_id: String,
    pub balance: TokenAmount,
    #[serde(rename(deserialize = "tokens"))]
    pub token: Option<TokenMeta>,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReceipt {
    /// Transaction identifier assigned by the platform, forwarded as-is
    /// (string, number or object).
    pub transaction_id: serde_json::Value,
}

/// How a weekly check-in attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckinOutcome {
    Completed,
    /// The remote cooldown window has not elapsed yet.
    CoolingDown,
}

impl From<bool> for CheckinOutcome {
    fn from(completed: bool) -> Self {
        if completed {
            CheckinOutcome::Completed
        } else {
            CheckinOutcome::CoolingDown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_row_reads_embedded_token() {
        let row: TokenBalance = serde_json::from_value(serde_json::json!({
            "token_id": "t-1",
            "balance": 12.5,
            "tokens": { "symbol": "GEN", "name": "Avolve", "description": null }
        }))
        .unwrap();

        assert_eq!(row.balance, 12.5);
        assert_eq!(row.token.as_ref().map(|t| t.symbol.as_str()), Some("GEN"));

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["tokenId"], "t-1");
        assert_eq!(json["token"]["symbol"], "GEN");
    }

    #[test]
    fn checkin_outcome_from_bool() {
        assert_eq!(CheckinOutcome::from(true), CheckinOutcome::Completed);
        assert_eq!(CheckinOutcome::from(false), CheckinOutcome::CoolingDown);
        assert_eq!(
            serde_json::to_value(CheckinOutcome::CoolingDown).unwrap(),
            "cooling_down"
        );
    }
}
