//! Error types for the bot core.

use thiserror::Error;

/// Top-level error for VarGram (bot transport, config, archive fetch, mail, IO).
#[derive(Error, Debug)]
pub enum VarGramError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`VarGramError`].
pub type Result<T> = std::result::Result<T, VarGramError>;
