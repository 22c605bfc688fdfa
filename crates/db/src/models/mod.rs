//! Row shapes for platform tables and procedure results.
//!
//! Rows deserialize from the platform's snake_case columns and serialize to
//! clients in camelCase.

pub mod activity;
pub mod invitation;
pub mod onboarding;
pub mod profile;
pub mod team;
pub mod token;
