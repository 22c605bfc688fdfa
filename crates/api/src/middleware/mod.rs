//! Request guards implemented as extractors.
//!
//! - [`auth`] -- verified caller identity.
//! - [`csrf`] -- single-use CSRF token check.
//! - [`cron`] -- shared-secret gate for scheduled jobs.

pub mod auth;
pub mod cron;
pub mod csrf;
