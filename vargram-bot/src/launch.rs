//! Startup sequence: mailman url → initialize → "Starting bot!" → start.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::config::{BotConfig, GroupInfo, SmtpSettings, WebhookConfig};
use crate::mailman::{mailman_url, STARTUP_MONTH, STARTUP_YEAR};

/// The two-step lifecycle of a bot: wire collaborators, then listen for updates.
///
/// Futures are not required to be `Send`; the launcher is driven from `main`.
#[async_trait(?Send)]
pub trait Launcher {
    /// Builds the archive parser, the SMTP channel and the handler chain.
    fn initialize(&mut self, mailman_url: &str, group: GroupInfo, smtp: SmtpSettings) -> Result<()>;

    /// Listens for updates (webhook when enabled, long polling otherwise). Returns when the listener stops.
    async fn start(&mut self, webhook: &WebhookConfig) -> Result<()>;
}

/// Runs the startup sequence on `launcher`: `initialize` once, the startup log line, then `start` once.
pub async fn launch<L: Launcher>(config: &BotConfig, launcher: &mut L) -> Result<()> {
    let url = mailman_url(&config.mailman_url, STARTUP_YEAR, STARTUP_MONTH);
    launcher.initialize(&url, config.group.clone(), config.smtp_settings())?;

    info!("Starting bot!");
    launcher.start(&config.webhook).await
}
