//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&dyn PlatformClient` and the [`Caller`](crate::Caller) as their
//! first arguments.

pub mod activity_repo;
pub mod analytics_repo;
pub mod invitation_repo;
pub mod milestone_repo;
pub mod onboarding_repo;
pub mod profile_repo;
pub mod team_repo;
pub mod token_repo;
pub mod vouch_repo;

pub use activity_repo::ActivityRepo;
pub use analytics_repo::AnalyticsRepo;
pub use invitation_repo::InvitationRepo;
pub use milestone_repo::MilestoneRepo;
pub use onboarding_repo::OnboardingRepo;
pub use profile_repo::ProfileRepo;
pub use team_repo::TeamRepo;
pub use token_repo::TokenRepo;
pub use vouch_repo::VouchRepo;
