//! Account email templates.

use crate::delivery::MailError;

/// A rendered plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Token hashes are embedded in links unescaped, so only URL-safe
/// characters are accepted.
fn is_url_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Confirmation email sent to the new address when a user changes email.
pub fn change_email(
    site_url: &str,
    new_email: &str,
    token_hash: &str,
) -> Result<EmailMessage, MailError> {
    if !is_url_safe(token_hash) {
        return Err(MailError::Build(
            "token hash contains characters not allowed in a link".to_string(),
        ));
    }

    let link = format!(
        "{}/auth/confirm?token_hash={token_hash}&type=email_change",
        site_url.trim_end_matches('/')
    );

    Ok(EmailMessage {
        to: new_email.to_string(),
        subject: "Confirm your new Avolve email address".to_string(),
        body: format!(
            "You asked to change the email address on your Avolve account to {new_email}.\n\n\
             Confirm the change by opening this link:\n{link}\n\n\
             If you did not request this, you can ignore this email."
        ),
    })
}

/// One-time code sent before a sensitive action (e.g. a password change).
pub fn reauthentication(to: &str, code: &str) -> Result<EmailMessage, MailError> {
    if code.trim().is_empty() {
        return Err(MailError::Build("reauthentication code is empty".to_string()));
    }

    Ok(EmailMessage {
        to: to.to_string(),
        subject: "Your Avolve verification code".to_string(),
        body: format!(
            "Enter this code to confirm it's you:\n\n    {}\n\n\
             The code expires shortly. If you did not request it, secure your account.",
            code.trim()
        ),
    })
}
