//! Authentication primitives.
//!
//! - [`jwt`] -- verification of the auth provider's access tokens.

pub mod jwt;
