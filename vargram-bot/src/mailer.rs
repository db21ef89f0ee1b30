//! SMTP notification channel. Mails go from the bot account (`SMTP_USER`) to `SMTP_TO`.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{info, instrument};
use vargram_core::{Result, VarGramError};

use crate::config::SmtpSettings;

/// Port on which the server expects TLS from the first byte instead of STARTTLS.
const IMPLICIT_TLS_PORT: u16 = 465;

/// Sends a notification to the configured recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, subject: &str, body: &str) -> Result<()>;
}

pub struct SmtpMailer {
    from: Mailbox,
    to: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the transport; no connection is made until the first mail.
    pub fn new(settings: &SmtpSettings) -> Result<Self> {
        let from: Mailbox = settings
            .from
            .parse()
            .map_err(|e| VarGramError::Mail(format!("invalid sender {}: {}", settings.from, e)))?;
        let to: Mailbox = settings
            .to
            .parse()
            .map_err(|e| VarGramError::Mail(format!("invalid recipient {}: {}", settings.to, e)))?;

        let builder = if settings.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.server)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)
        }
        .map_err(|e| VarGramError::Mail(e.to_string()))?;

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.from.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self {
            from,
            to,
            transport,
        })
    }

    /// Builds the plain-text message without sending it.
    pub fn compose(&self, subject: &str, body: &str) -> Result<Message> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| VarGramError::Mail(e.to_string()))
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    #[instrument(skip(self, body))]
    async fn notify(&self, subject: &str, body: &str) -> Result<()> {
        let email = self.compose(subject, body)?;
        self.transport
            .send(email)
            .await
            .map_err(|e| VarGramError::Mail(e.to_string()))?;
        info!(to = %self.to, "Notification mail sent");
        Ok(())
    }
}
