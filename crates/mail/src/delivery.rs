//! Email delivery via the email provider's SMTP relay.
//!
//! [`SmtpMailer`] wraps the `lettre` async SMTP transport. The provider
//! authenticates SMTP sessions with its API key as the password. If
//! `EMAIL_API_KEY` is not set, [`EmailConfig::from_env`] returns `None` and
//! no mailer should be constructed.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::templates::EmailMessage;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP relay host of the email provider.
const DEFAULT_SMTP_HOST: &str = "smtp.resend.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default SMTP username; the provider expects a fixed user with the API key
/// as password.
const DEFAULT_SMTP_USER: &str = "resend";

/// Default sender when `EMAIL_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "Avolve <noreply@avolve.io>";

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Provider API key, used as the SMTP password.
    pub api_key: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    /// RFC 5322 "From" mailbox.
    pub from_address: String,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `EMAIL_API_KEY` is not set, signalling that email
    /// delivery is not configured.
    ///
    /// | Variable          | Required | Default                       |
    /// |-------------------|----------|-------------------------------|
    /// | `EMAIL_API_KEY`   | yes      | --                            |
    /// | `EMAIL_SMTP_HOST` | no       | `smtp.resend.com`             |
    /// | `EMAIL_SMTP_PORT` | no       | `587`                         |
    /// | `EMAIL_SMTP_USER` | no       | `resend`                      |
    /// | `EMAIL_FROM`      | no       | `Avolve <noreply@avolve.io>`  |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("EMAIL_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())?;
        Some(Self {
            api_key,
            smtp_host: std::env::var("EMAIL_SMTP_HOST")
                .unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: std::env::var("EMAIL_SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: std::env::var("EMAIL_SMTP_USER")
                .unwrap_or_else(|_| DEFAULT_SMTP_USER.to_string()),
            from_address: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends a rendered [`EmailMessage`].
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}

/// SMTP implementation of [`Mailer`].
pub struct SmtpMailer {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the transport. No connection is opened until the first send.
    pub fn new(config: &EmailConfig) -> Result<Self, MailError> {
        let from: Mailbox = config.from_address.parse()?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.api_key.clone(),
            ))
            .build();
        Ok(Self { from, transport })
    }
}

/// Assemble a plain-text MIME message.
fn build_message(from: &Mailbox, message: &EmailMessage) -> Result<Message, MailError> {
    Message::builder()
        .from(from.clone())
        .to(message.to.parse()?)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_PLAIN)
        .body(message.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        let email = build_message(&self.from, message)?;
        self.transport.send(email).await?;
        tracing::info!(to = %message.to, subject = %message.subject, "Email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EmailConfig {
        EmailConfig {
            api_key: "re_test".to_string(),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_user: DEFAULT_SMTP_USER.to_string(),
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
        }
    }

    #[test]
    fn from_env_returns_none_without_api_key() {
        std::env::remove_var("EMAIL_API_KEY");
        assert!(EmailConfig::from_env().is_none());
    }

    #[test]
    fn invalid_sender_is_rejected() {
        let config = EmailConfig {
            from_address: "not an address".to_string(),
            ..test_config()
        };
        assert!(matches!(SmtpMailer::new(&config), Err(MailError::Address(_))));
    }

    fn sender() -> Mailbox {
        DEFAULT_FROM_ADDRESS.parse().unwrap()
    }

    #[test]
    fn build_rejects_bad_recipient() {
        let message = EmailMessage {
            to: "nobody".to_string(),
            subject: "Hi".to_string(),
            body: "Body".to_string(),
        };
        assert!(matches!(
            build_message(&sender(), &message),
            Err(MailError::Address(_))
        ));
    }

    #[test]
    fn build_accepts_valid_message() {
        let message = EmailMessage {
            to: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            body: "Body".to_string(),
        };
        assert!(build_message(&sender(), &message).is_ok());
    }

    #[test]
    fn mail_error_display_build() {
        let err = MailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }
}
