//! Outgoing email.
//!
//! Messages are not delivered to a mail server. Each one is emitted as a structured log
//! record so that verification codes and reset links can be picked up from the logs in
//! development.

/// Mailer shared through the application state.
#[derive(Clone, Default)]
pub struct EmailService {
    sender: String,
}

impl EmailService {
    pub fn new() -> Self {
        Self {
            sender: "no-reply@eventpro.local".to_string(),
        }
    }

    /// Sends an email.
    ///
    /// # Arguments
    /// - `to` - Recipient address
    /// - `subject` - Subject line
    /// - `body` - Plain text body
    pub fn send(&self, to: &str, subject: &str, body: &str) {
        tracing::info!(from = %self.sender, to = %to, subject = %subject, body = %body, "Outgoing email");
    }

    /// Sends the registration verification code.
    pub fn send_verification_code(&self, to: &str, code: &str) {
        self.send(
            to,
            "Your EventPro verification code",
            &format!("Your verification code is {}. It expires in 5 minutes.", code),
        );
    }

    /// Sends the password reset link.
    pub fn send_password_reset(&self, to: &str, link: &str) {
        self.send(
            to,
            "Reset your EventPro password",
            &format!(
                "Use the link below to choose a new password. It expires in 1 hour.\n{}",
                link
            ),
        );
    }
}
