//! Bot configuration: BaseConfig (Telegram + log) + mailman URL, group, SMTP and webhook settings.

mod base;
mod bot_config;
mod env;
mod smtp;
mod webhook;


pub use base::BaseConfig;
pub use bot_config::{BotConfig, GroupInfo};
pub use smtp::SmtpSettings;
pub use webhook::WebhookConfig;
