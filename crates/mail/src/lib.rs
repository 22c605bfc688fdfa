//! Transactional email for Avolve.
//!
//! - [`templates`] -- message bodies for the account emails (change of
//!   address, reauthentication code).
//! - [`delivery`] -- the [`Mailer`] trait and its SMTP implementation.

pub mod delivery;
pub mod templates;

pub use delivery::{EmailConfig, MailError, Mailer, SmtpMailer};
pub use templates::EmailMessage;
