//! Webhook listener settings. Only required when WEBHOOK is enabled; otherwise the bot long-polls.

use anyhow::Result;
use std::path::PathBuf;

use super::env;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookConfig {
    /// WEBHOOK
    pub enabled: bool,
    /// WEBHOOK_DOMAIN: public host name Telegram calls.
    pub domain: String,
    /// WEBHOOK_PATH: url path, with or without leading `/`.
    pub path: String,
    /// WEBHOOK_PORT: public port, also the local listening port.
    pub port: u16,
    /// WEBHOOK_KEY: PEM private key.
    pub key: PathBuf,
    /// WEBHOOK_CERT: PEM certificate, uploaded to Telegram for self-signed setups.
    pub cert: PathBuf,
}

impl WebhookConfig {
    pub fn from_env() -> Result<Self> {
        let enabled = env::flag("WEBHOOK", false)?;
        if !enabled {
            return Ok(Self::default());
        }
        Ok(Self {
            enabled,
            domain: env::required("WEBHOOK_DOMAIN")?,
            path: env::required("WEBHOOK_PATH")?,
            port: env::required_parsed("WEBHOOK_PORT")?,
            key: PathBuf::from(env::required("WEBHOOK_KEY")?),
            cert: PathBuf::from(env::required("WEBHOOK_CERT")?),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if self.domain.trim().is_empty() {
            anyhow::bail!("WEBHOOK_DOMAIN is empty");
        }
        if self.path.trim_matches('/').is_empty() {
            anyhow::bail!("WEBHOOK_PATH is empty");
        }
        if self.key.as_os_str().is_empty() || self.cert.as_os_str().is_empty() {
            anyhow::bail!("WEBHOOK_KEY and WEBHOOK_CERT are required for the webhook");
        }
        self.url()?;
        Ok(())
    }

    /// Path served by the listener, always with a leading `/`.
    pub fn route(&self) -> String {
        format!("/{}", self.path.trim_start_matches('/'))
    }

    /// Public url registered at Telegram: `https://<domain>:<port>/<path>`.
    pub fn url(&self) -> Result<reqwest::Url> {
        let raw = format!("https://{}:{}{}", self.domain, self.port, self.route());
        reqwest::Url::parse(&raw).map_err(|e| anyhow::anyhow!("invalid webhook url {}: {}", raw, e))
    }
}
