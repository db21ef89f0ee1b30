//! VarGram Bot binary: `-v` prints the version; otherwise config from env, then launch.

use anyhow::{Context, Result};
use vargram_bot::{launch, load_config, version_text, Cli, VarGramBot};
use vargram_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args(std::env::args_os());
    if cli.version {
        println!("{}", version_text());
        return Ok(());
    }

    dotenvy::dotenv().ok();

    let config = load_config(cli.token)?;
    config.validate()?;

    if let Some(dir) = config
        .log_file()
        .and_then(|p| std::path::Path::new(p).parent())
        .filter(|d| !d.as_os_str().is_empty())
    {
        std::fs::create_dir_all(dir).context("Failed to create log directory")?;
    }
    init_tracing(config.log_file())?;

    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    let mut bot = VarGramBot::from_config(&config)?;
    launch(&config, &mut bot).await
}
