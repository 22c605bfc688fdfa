//! Profile progression state machine.
//!
//! A profile unlocks the platform in a fixed order: agree to terms, create a
//! Genius ID, receive GEN tokens, enable Genie AI. The current [`Stage`] is
//! derived from the profile's flags by folding them through [`Stage::advance`]
//! in that order, so a later flag never skips an earlier unmet requirement.

use serde::{Deserialize, Serialize};

/// Where a profile currently sits in the unlock sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    NeedsTerms,
    NeedsId,
    NeedsTokens,
    NeedsAi,
    Ready,
}

/// An event that completes one stage's requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressEvent {
    AgreedToTerms,
    GeniusIdCreated,
    GenTokensGranted,
    GenieAiEnabled,
}

/// The progression flags carried on a profile row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressFlags {
    pub has_agreed_to_terms: bool,
    pub has_genius_id: bool,
    pub has_gen_tokens: bool,
    pub has_genie_ai: bool,
}

impl Stage {
    /// Pure transition: `event` advances the stage only if it is the event
    /// this stage is waiting for.
    pub fn advance(self, event: ProgressEvent) -> Stage {
        match (self, event) {
            (Stage::NeedsTerms, ProgressEvent::AgreedToTerms) => Stage::NeedsId,
            (Stage::NeedsId, ProgressEvent::GeniusIdCreated) => Stage::NeedsTokens,
            (Stage::NeedsTokens, ProgressEvent::GenTokensGranted) => Stage::NeedsAi,
            (Stage::NeedsAi, ProgressEvent::GenieAiEnabled) => Stage::Ready,
            (stage, _) => stage,
        }
    }

    /// The event this stage is waiting for, or `None` once ready.
    pub fn awaiting(self) -> Option<ProgressEvent> {
        match self {
            Stage::NeedsTerms => Some(ProgressEvent::AgreedToTerms),
            Stage::NeedsId => Some(ProgressEvent::GeniusIdCreated),
            Stage::NeedsTokens => Some(ProgressEvent::GenTokensGranted),
            Stage::NeedsAi => Some(ProgressEvent::GenieAiEnabled),
            Stage::Ready => None,
        }
    }

    /// Client route a user in this stage should be sent to.
    pub fn redirect_path(self) -> &'static str {
        match self {
            Stage::NeedsTerms => "/unlock/terms",
            Stage::NeedsId => "/unlock/genius-id",
            Stage::NeedsTokens => "/unlock/gen-tokens",
            Stage::NeedsAi => "/unlock/genie-ai",
            Stage::Ready => "/dashboard",
        }
    }

    pub fn is_ready(self) -> bool {
        self == Stage::Ready
    }
}

impl ProgressFlags {
    /// Events implied by the set flags, in unlock order.
    fn events(self) -> impl Iterator<Item = ProgressEvent> {
        [
            (self.has_agreed_to_terms, ProgressEvent::AgreedToTerms),
            (self.has_genius_id, ProgressEvent::GeniusIdCreated),
            (self.has_gen_tokens, ProgressEvent::GenTokensGranted),
            (self.has_genie_ai, ProgressEvent::GenieAiEnabled),
        ]
        .into_iter()
        .filter_map(|(set, event)| set.then_some(event))
    }

    /// Derive the current stage from the flags.
    pub fn stage(self) -> Stage {
        self.events().fold(Stage::NeedsTerms, Stage::advance)
    }
}
