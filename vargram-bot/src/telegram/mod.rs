//! Telegram transport layer: message adapters, command registration, REPL runner (polling or TLS webhook).

mod adapters;
mod runner;
mod tls;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use runner::{register_commands, run_polling, run_webhook};
pub use tls::load_tls_config;
