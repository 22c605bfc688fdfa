//! Onboarding step constants and completion rules.
//!
//! Onboarding is a fixed five-step sequence. Progress is stored remotely as
//! the list of completed step names; completion is a pure set-containment
//! check against [`ONBOARDING_STEPS`].

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Step names
// ---------------------------------------------------------------------------

/// Fill in the profile basics.
pub const STEP_PROFILE: &str = "profile";
/// Pick interests.
pub const STEP_INTERESTS: &str = "interests";
/// Join a group.
pub const STEP_GROUP: &str = "group";
/// Explore the platform.
pub const STEP_EXPLORE: &str = "explore";
/// Final celebration screen.
pub const STEP_CELEBRATE: &str = "celebrate";

/// All onboarding steps in canonical order.
pub const ONBOARDING_STEPS: &[&str] = &[
    STEP_PROFILE,
    STEP_INTERESTS,
    STEP_GROUP,
    STEP_EXPLORE,
    STEP_CELEBRATE,
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a step name is one of the known onboarding steps.
pub fn validate_step(step: &str) -> Result<(), CoreError> {
    if ONBOARDING_STEPS.contains(&step) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid onboarding step '{step}'. Must be one of: {ONBOARDING_STEPS:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// True iff every onboarding step appears in `completed`, in any order and
/// with any number of duplicates.
pub fn is_onboarding_done<S: AsRef<str>>(completed: &[S]) -> bool {
    ONBOARDING_STEPS
        .iter()
        .all(|step| completed.iter().any(|c| c.as_ref() == *step))
}

/// The first step in canonical order that is not yet completed.
pub fn next_step<S: AsRef<str>>(completed: &[S]) -> Option<&'static str> {
    ONBOARDING_STEPS
        .iter()
        .copied()
        .find(|step| !completed.iter().any(|c| c.as_ref() == *step))
}

/// Append `step` to `completed` unless it is already present.
///
/// Returns `true` if the list changed.
pub fn record_step(completed: &mut Vec<String>, step: &str) -> bool {
    if completed.iter().any(|c| c == step) {
        return false;
    }
    completed.push(step.to_string());
    true
}

/// Onboarding progress as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    pub completed_steps: Vec<String>,
    pub onboarding_done: bool,
    pub next_step: Option<&'static str>,
}

impl OnboardingStatus {
    /// Summarize a stored list of completed steps.
    pub fn from_completed(completed_steps: Vec<String>) -> Self {
        let onboarding_done = is_onboarding_done(&completed_steps);
        let next_step = next_step(&completed_steps);
        Self {
            completed_steps,
            onboarding_done,
            next_step,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
