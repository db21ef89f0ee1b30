//! # VarGram Bot
//!
//! Telegram bot for a mailing-list community. Loads config from env, builds the bot
//! (mailman archive parser, SMTP feedback channel, command handlers) and runs it with
//! long polling or a TLS webhook.

pub mod bot;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod launch;
pub mod mailer;
pub mod mailman;
pub mod telegram;

pub use bot::VarGramBot;
pub use cli::{load_config, version_text, Cli, VERSION};
pub use config::{BaseConfig, BotConfig, GroupInfo, SmtpSettings, WebhookConfig};
pub use handlers::{ChatFilterHandler, Command, CommandHandler, LoggingHandler};
pub use launch::{launch, Launcher};
pub use mailer::{Notifier, SmtpMailer};
pub use mailman::{mailman_url, MailmanParser, PageParser, STARTUP_MONTH, STARTUP_YEAR};
