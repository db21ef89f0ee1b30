//! Handler implementations: logging, chat filtering, and the bot commands.

mod command;
mod logging_filter;

pub use command::{Command, CommandHandler, COMMANDS};
pub use logging_filter::{ChatFilterHandler, LoggingHandler};
