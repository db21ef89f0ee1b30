//! SMTP settings for the notification channel.

use std::fmt;

/// Where and how notification mails are sent. Built fresh from [`super::BotConfig`] on startup.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    /// Sender address; also the SMTP login.
    pub from: String,
    /// Recipient address.
    pub to: String,
    pub password: String,
    /// SMTP server host.
    pub server: String,
    pub port: u16,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("password", &"***")
            .field("server", &self.server)
            .field("port", &self.port)
            .finish()
    }
}
