//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//! Updates come from long polling or from a TLS webhook served by axum-server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use teloxide::prelude::*;
use teloxide::types::{BotCommand, InputFile};
use teloxide::update_listeners::webhooks;
use tokio::sync::RwLock;
use tokio::task::JoinError;
use tracing::{error, info, instrument};
use vargram_core::{HandlerChain, ToCoreMessage};

use super::adapters::TelegramMessageWrapper;
use super::tls::load_tls_config;
use crate::config::WebhookConfig;
use crate::handlers::COMMANDS;

/// Grace period for in-flight webhook requests on shutdown.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Publishes the command list and caches the bot username (needed for `/cmd@bot` parsing).
pub async fn register_commands(
    bot: &teloxide::Bot,
    bot_username: &Arc<RwLock<Option<String>>>,
) -> Result<()> {
    let commands: Vec<BotCommand> = COMMANDS
        .iter()
        .map(|(name, description)| BotCommand::new(*name, *description))
        .collect();
    bot.set_my_commands(commands)
        .await
        .context("setMyCommands failed")?;

    let me = bot.get_me().await.context("getMe failed")?;
    if let Some(username) = &me.user.username {
        *bot_username.write().await = Some(username.clone());
        info!(username = %username, "Bot username set");
    }
    Ok(())
}

/// Runs the handler chain for one update in its own task so the REPL returns immediately.
async fn dispatch(chain: HandlerChain, msg: teloxide::types::Message) -> ResponseResult<()> {
    if msg.text().is_none() {
        return Ok(());
    }
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    tokio::spawn(async move {
        if let Err(e) = chain.handle(&core_msg).await {
            error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handler chain failed");
        }
    });
    Ok(())
}

/// Long polling: no public endpoint needed.
#[instrument(skip(bot, chain))]
pub async fn run_polling(bot: teloxide::Bot, chain: HandlerChain) -> Result<()> {
    bot.delete_webhook()
        .await
        .context("deleteWebhook failed")?;
    info!("Listening with long polling");

    teloxide::repl(bot, move |msg: teloxide::types::Message| {
        dispatch(chain.clone(), msg)
    })
    .await;

    Ok(())
}

/// Webhook: serves `webhook.route()` over TLS on `0.0.0.0:<port>` and registers
/// `https://<domain>:<port>/<path>` with the certificate uploaded to Telegram.
///
/// The port is bound before the webhook is registered. A server failure ends the
/// listener and is returned as an error.
#[instrument(skip(bot, chain, webhook), fields(port = webhook.port))]
pub async fn run_webhook(
    bot: teloxide::Bot,
    chain: HandlerChain,
    webhook: &WebhookConfig,
) -> Result<()> {
    let address = SocketAddr::from(([0, 0, 0, 0], webhook.port));
    let url = webhook.url()?;

    let tcp = std::net::TcpListener::bind(address)
        .with_context(|| format!("Binding webhook listener on {}", address))?;
    tcp.set_nonblocking(true)
        .context("Configuring webhook listener")?;
    let tls = load_tls_config(&webhook.cert, &webhook.key)
        .await
        .context("Loading webhook TLS key/certificate")?;

    let options = webhooks::Options::new(address, url.clone())
        .path(webhook.route())
        .certificate(InputFile::file(webhook.cert.clone()));

    let (listener, stop_flag, router) = webhooks::axum_to_router(bot.clone(), options)
        .await
        .context("setWebhook failed")?;

    let handle = axum_server::Handle::new();
    let shutdown = handle.clone();
    tokio::spawn(async move {
        stop_flag.await;
        shutdown.graceful_shutdown(Some(SHUTDOWN_GRACE));
    });
    let mut server = tokio::spawn(
        axum_server::from_tcp_rustls(tcp, tls)
            .handle(handle)
            .serve(router.into_make_service()),
    );
    info!(url = %url, address = %address, "Listening with webhook");

    let repl = teloxide::repl_with_listener(
        bot,
        move |msg: teloxide::types::Message| dispatch(chain.clone(), msg),
        listener,
    );

    tokio::select! {
        joined = &mut server => return server_outcome(joined),
        _ = repl => {}
    }
    // The listener also stops when the server dies; its result decides the outcome.
    server_outcome(server.await)
}

fn server_outcome(joined: std::result::Result<std::io::Result<()>, JoinError>) -> Result<()> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            error!(error = %e, "Webhook server failed");
            Err(e).context("Webhook server failed")
        }
        Err(e) => Err(e).context("Webhook server task failed"),
    }
}
