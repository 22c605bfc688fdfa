//! Avolve domain core.
//!
//! Pure domain logic shared by the platform client and the API server:
//! the fixed token set, onboarding step rules, the profile progression
//! state machine, and CSRF token primitives. This crate has no internal
//! dependencies and performs no I/O.

pub mod csrf;
pub mod error;
pub mod onboarding;
pub mod progression;
pub mod tokens;
pub mod types;
