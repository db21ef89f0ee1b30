//! VarGramBot: the Telegram bot wired with the mailman parser, the SMTP channel and the command handlers.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use vargram_core::{HandlerChain, TelegramBot};

use crate::config::{BotConfig, GroupInfo, SmtpSettings, WebhookConfig};
use crate::handlers::{ChatFilterHandler, CommandHandler, LoggingHandler};
use crate::launch::Launcher;
use crate::mailer::SmtpMailer;
use crate::mailman::MailmanParser;
use crate::telegram::{register_commands, run_polling, run_webhook};

pub struct VarGramBot {
    bot: teloxide::Bot,
    bot_username: Arc<RwLock<Option<String>>>,
    chain: Option<HandlerChain>,
}

impl VarGramBot {
    /// Creates the bot for the given token. Nothing is contacted until `start`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            bot: teloxide::Bot::new(token),
            bot_username: Arc::new(RwLock::new(None)),
            chain: None,
        }
    }

    /// Token from the config, plus the API url override when set.
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        let mut bot = Self::new(config.bot_token());
        if let Some(url) = config.telegram_api_url() {
            bot = bot.with_api_url(reqwest::Url::parse(url)?);
        }
        Ok(bot)
    }

    /// Sends Bot API requests to `url` instead of api.telegram.org.
    pub fn with_api_url(mut self, url: reqwest::Url) -> Self {
        self.bot = self.bot.set_api_url(url);
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.chain.is_some()
    }

    /// Handler chain built by `initialize`, if any.
    pub fn handler_chain(&self) -> Option<&HandlerChain> {
        self.chain.as_ref()
    }
}

#[async_trait(?Send)]
impl Launcher for VarGramBot {
    #[instrument(skip(self, smtp), fields(group_id = group.id))]
    fn initialize(&mut self, mailman_url: &str, group: GroupInfo, smtp: SmtpSettings) -> Result<()> {
        let parser = MailmanParser::new(mailman_url)?;
        let mailer = SmtpMailer::new(&smtp)?;
        let sender = Arc::new(TelegramBot::from_teloxide(self.bot.clone()));

        let commands = CommandHandler::new(
            sender,
            Arc::new(parser),
            Arc::new(mailer),
            group.clone(),
            self.bot_username.clone(),
        );
        let chain = HandlerChain::new()
            .add_handler(Arc::new(LoggingHandler))
            .add_handler(Arc::new(ChatFilterHandler::new(group.id)))
            .add_handler(Arc::new(commands));
        self.chain = Some(chain);

        info!(
            mailman_url = %mailman_url,
            group = %group.name,
            smtp_server = %smtp.server,
            smtp_port = smtp.port,
            "Bot initialized"
        );
        Ok(())
    }

    async fn start(&mut self, webhook: &WebhookConfig) -> Result<()> {
        let chain = self
            .chain
            .clone()
            .ok_or_else(|| anyhow::anyhow!("start called before initialize"))?;

        register_commands(&self.bot, &self.bot_username).await?;

        if webhook.enabled {
            run_webhook(self.bot.clone(), chain, webhook).await
        } else {
            run_polling(self.bot.clone(), chain).await
        }
    }
}
