//! BotConfig: BaseConfig + mailman URL template, group, SMTP and webhook. Use load() for env-based loading.

use anyhow::Result;

use super::{env, BaseConfig, SmtpSettings, WebhookConfig};

/// The chat group the bot serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    /// GROUP_NAME
    pub name: String,
    /// GROUP_ID (Telegram chat id, negative for groups)
    pub id: i64,
}

/// Bot config, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    /// MAILMAN_URL: archive url template with `$Y` / `$M` placeholders.
    pub mailman_url: String,
    pub group: GroupInfo,
    smtp: SmtpSettings,
    pub webhook: WebhookConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let mailman_url = env::required("MAILMAN_URL")?;
        let group = GroupInfo {
            name: env::required("GROUP_NAME")?,
            id: env::required_parsed("GROUP_ID")?,
        };
        let smtp = SmtpSettings {
            from: env::required("SMTP_USER")?,
            to: env::required("SMTP_TO")?,
            password: env::required("SMTP_PASS")?,
            server: env::required("SMTP_ADDRESS")?,
            port: env::required_parsed("SMTP_PORT")?,
        };
        let webhook = WebhookConfig::from_env()?;

        Ok(Self {
            base,
            mailman_url,
            group,
            smtp,
            webhook,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if !self.mailman_url.contains("://") {
            anyhow::bail!("MAILMAN_URL is not an absolute url: {}", self.mailman_url);
        }
        if self.smtp.server.trim().is_empty() {
            anyhow::bail!("SMTP_ADDRESS is empty");
        }
        self.webhook.validate()
    }

    /// SMTP settings derived from the config; a fresh copy on every call.
    pub fn smtp_settings(&self) -> SmtpSettings {
        self.smtp.clone()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> Option<&str> {
        self.base.log_file.as_deref()
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
