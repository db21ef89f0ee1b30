//! CLI parser and config loading.

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

use crate::config::BotConfig;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug, Default)]
#[command(name = "vargram-bot")]
#[command(about = "VarGram Bot: mailing list digest and feedback for a Telegram group", long_about = None)]
#[command(disable_version_flag = true, disable_help_flag = true)]
pub struct Cli {
    /// Print the version and exit. Only honoured as the first argument.
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Bot token; overrides BOT_TOKEN.
    #[arg(short, long)]
    pub token: Option<String>,

    /// Anything else is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parses the process arguments (program name first). Never fails: an argument list clap
    /// rejects starts the bot with the environment config, and `version` is set only when
    /// `-v` / `--version` is the first argument.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let version = matches!(
            args.get(1).and_then(|arg| arg.to_str()),
            Some("-v" | "--version")
        );
        let mut cli = Self::try_parse_from(args).unwrap_or_default();
        cli.version = version;
        cli
    }
}

/// Text printed for `-v` / `--version`.
pub fn version_text() -> String {
    format!("VarGram Bot\nVersion {}", VERSION)
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_version_flags() {
        assert!(Cli::from_args(["vargram-bot", "-v"]).version);
        assert!(Cli::from_args(["vargram-bot", "--version"]).version);
        assert!(Cli::from_args(["vargram-bot", "-v", "extra"]).version);
    }

    #[test]
    fn test_version_flag_counts_only_first() {
        let cli = Cli::from_args(["vargram-bot", "-t", "123:abc", "-v"]);
        assert!(!cli.version);
        assert_eq!(cli.token.as_deref(), Some("123:abc"));

        assert!(!Cli::from_args(["vargram-bot", "run", "--version"]).version);
    }

    #[test]
    fn test_no_arguments_starts_the_bot() {
        let cli = Cli::from_args(["vargram-bot"]);
        assert!(!cli.version);
        assert!(cli.token.is_none());
    }

    #[test]
    fn test_help_flags_start_the_bot() {
        for flag in ["-h", "--help"] {
            let cli = Cli::from_args(["vargram-bot", flag]);
            assert!(!cli.version, "{}", flag);
            assert!(cli.token.is_none(), "{}", flag);
        }
    }

    #[test]
    fn test_dangling_token_starts_the_bot() {
        let cli = Cli::from_args(["vargram-bot", "--token"]);
        assert!(!cli.version);
        assert!(cli.token.is_none());
    }

    #[test]
    fn test_token_override() {
        let cli = Cli::from_args(["vargram-bot", "--token", "123:abc"]);
        assert_eq!(cli.token.as_deref(), Some("123:abc"));
    }

    #[test]
    fn test_other_arguments_are_ignored() {
        let cli = Cli::from_args(["vargram-bot", "run", "--debug", "-v"]);
        assert!(!cli.version);
        assert_eq!(cli.rest, vec!["run", "--debug", "-v"]);
    }

    #[test]
    fn test_version_text() {
        assert_eq!(
            version_text(),
            format!("VarGram Bot\nVersion {}", env!("CARGO_PKG_VERSION"))
        );
        assert!(version_text().starts_with("VarGram Bot\nVersion "));
    }
}
