//! The fixed reward token set.
//!
//! Token types are an enumerated, closed set owned by the platform. Balances
//! and conversions are computed remotely; this module only names the tokens
//! and parses them at the request boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A token type in the Avolve reward economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum TokenSymbol {
    Gen,
    Sap,
    Scq,
    Psp,
    Bsp,
    Sms,
    Spd,
    She,
    Ssa,
    Sgb,
}

/// Every token type, in display order.
pub const ALL_TOKENS: &[TokenSymbol] = &[
    TokenSymbol::Gen,
    TokenSymbol::Sap,
    TokenSymbol::Scq,
    TokenSymbol::Psp,
    TokenSymbol::Bsp,
    TokenSymbol::Sms,
    TokenSymbol::Spd,
    TokenSymbol::She,
    TokenSymbol::Ssa,
    TokenSymbol::Sgb,
];

impl TokenSymbol {
    /// The ticker symbol as stored in the platform's `tokens.symbol` column.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenSymbol::Gen => "GEN",
            TokenSymbol::Sap => "SAP",
            TokenSymbol::Scq => "SCQ",
            TokenSymbol::Psp => "PSP",
            TokenSymbol::Bsp => "BSP",
            TokenSymbol::Sms => "SMS",
            TokenSymbol::Spd => "SPD",
            TokenSymbol::She => "SHE",
            TokenSymbol::Ssa => "SSA",
            TokenSymbol::Sgb => "SGB",
        }
    }

    /// Human-readable token name.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenSymbol::Gen => "Avolve",
            TokenSymbol::Sap => "Superachiever Playbook",
            TokenSymbol::Scq => "Superachievers Collective",
            TokenSymbol::Psp => "Personal Success Puzzle",
            TokenSymbol::Bsp => "Business Success Puzzle",
            TokenSymbol::Sms => "Supermind Superpowers",
            TokenSymbol::Spd => "Superpuzzle Developments",
            TokenSymbol::She => "Superhuman Enhancements",
            TokenSymbol::Ssa => "Supersociety Advancements",
            TokenSymbol::Sgb => "Supergenius Breakthroughs",
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenSymbol {
    type Err = CoreError;

    /// Parse a ticker symbol, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_TOKENS
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown token '{s}'. Must be one of: {}",
                    ALL_TOKENS
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

impl TryFrom<String> for TokenSymbol {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Static metadata for one token type.
#[derive(Debug, Clone, Serialize)]
pub struct TokenInfo {
    pub symbol: TokenSymbol,
    pub name: &'static str,
}

/// Metadata for the whole token set, in display order.
pub fn token_catalog() -> Vec<TokenInfo> {
    ALL_TOKENS
        .iter()
        .map(|&symbol| TokenInfo {
            symbol,
            name: symbol.display_name(),
        })
        .collect()
}
