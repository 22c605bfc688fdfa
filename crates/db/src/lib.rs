//! Client for the Avolve backend platform.
//!
//! The platform is Postgres fronted by a PostgREST-compatible REST layer.
//! Every piece of business logic (token minting, conversions, cooldowns,
//! invitations, milestone aggregation) lives in its database functions; this
//! crate only marshals typed requests to them and decodes their responses.
//!
//! - [`client`] -- the [`PlatformClient`] trait, caller identity, errors and
//!   table query builder.
//! - [`rest`] -- the `reqwest` implementation of [`PlatformClient`].
//! - [`procedures`] -- one typed contract per remote procedure.
//! - [`models`] -- row shapes read from platform tables.
//! - [`repositories`] -- zero-sized repos grouping calls per entity.

pub mod client;
pub mod models;
pub mod procedures;
pub mod repositories;
pub mod rest;

pub use client::{Caller, PlatformClient, PlatformError, TableQuery};
pub use rest::{PlatformConfig, RestClient};

/// Shared handle to the platform client used across the application.
pub type Platform = std::sync::Arc<dyn PlatformClient>;

/// Verify the platform is reachable.
pub async fn health_check(client: &dyn PlatformClient) -> Result<(), PlatformError> {
    client.ping().await
}
