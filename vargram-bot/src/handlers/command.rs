//! Bot commands: `/start`, `/help`, `/mailman`, `/feedback <text>`.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};
use vargram_core::{Bot, Handler, HandlerResponse, Message, Result, User};

use crate::config::GroupInfo;
use crate::mailer::Notifier;
use crate::mailman::PageParser;

/// Command names and descriptions, in the order shown by Telegram clients.
pub const COMMANDS: &[(&str, &str)] = &[
    ("start", "Welcome message"),
    ("help", "Show what the bot can do"),
    ("mailman", "Latest threads of the mailing list"),
    ("feedback", "Send a message to the admins: /feedback <text>"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Mailman,
    /// Free text after the command, trimmed; may be empty.
    Feedback(String),
}

impl Command {
    /// Parses `/name[@bot] args`. Commands addressed to another bot and unknown names yield `None`.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let text = text.trim_start();
        let rest = text.strip_prefix('/')?;
        let (head, args) = match rest.find(char::is_whitespace) {
            Some(i) => (&rest[..i], rest[i..].trim()),
            None => (rest, ""),
        };
        let name = match head.split_once('@') {
            Some((name, target)) => {
                match bot_username {
                    Some(me) if me.eq_ignore_ascii_case(target) => {}
                    _ => return None,
                }
                name
            }
            None => head,
        };

        match name.to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "help" => Some(Self::Help),
            "mailman" => Some(Self::Mailman),
            "feedback" => Some(Self::Feedback(args.to_string())),
            _ => None,
        }
    }
}

/// Answers the bot commands; anything else continues down the chain.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    parser: Arc<dyn PageParser>,
    notifier: Arc<dyn Notifier>,
    group: GroupInfo,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        parser: Arc<dyn PageParser>,
        notifier: Arc<dyn Notifier>,
        group: GroupInfo,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            bot,
            parser,
            notifier,
            group,
            bot_username,
        }
    }

    fn welcome_text(&self) -> String {
        format!(
            "Hi! I am VarGram Bot, the bot of the {} group.\nSend /help to see what I can do.",
            self.group.name
        )
    }

    fn help_text(&self) -> String {
        let mut s = format!("VarGram Bot for {}.\n\n", self.group.name);
        for (name, description) in COMMANDS {
            s.push_str(&format!("/{} - {}\n", name, description));
        }
        s
    }

    async fn mailman(&self, message: &Message) -> Result<String> {
        match self.parser.parse_page().await {
            Ok(threads) if threads.is_empty() => {
                let text = "No messages in the archive yet.".to_string();
                self.bot.reply_to(message, &text).await?;
                Ok(text)
            }
            Ok(threads) => {
                let html = threads.html();
                self.bot.send_html(&message.chat, &html).await?;
                Ok(html)
            }
            Err(e) => {
                error!(error = %e, "Mailman archive unavailable");
                let text = "Sorry, I could not read the mailing list archive.".to_string();
                self.bot.reply_to(message, &text).await?;
                Ok(text)
            }
        }
    }

    async fn feedback(&self, message: &Message, text: &str) -> Result<String> {
        if text.is_empty() {
            let usage = "Usage: /feedback <text>".to_string();
            self.bot.reply_to(message, &usage).await?;
            return Ok(usage);
        }

        let subject = format!("[{}] Feedback from {}", self.group.name, display_name(&message.user));
        let body = format!(
            "{}\n\n-- \nuser id: {}\nchat id: {}",
            text, message.user.id, message.chat.id
        );
        let reply = match self.notifier.notify(&subject, &body).await {
            Ok(()) => "Thanks! Your feedback was sent to the admins.",
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Feedback mail failed");
                "Sorry, your feedback could not be delivered."
            }
        };
        self.bot.reply_to(message, reply).await?;
        Ok(reply.to_string())
    }
}

fn display_name(user: &User) -> String {
    match (&user.username, &user.first_name) {
        (Some(username), _) => format!("@{}", username),
        (None, Some(first)) => match &user.last_name {
            Some(last) => format!("{} {}", first, last),
            None => first.clone(),
        },
        (None, None) => user.id.to_string(),
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        let command = match Command::parse(&message.content, username.as_deref()) {
            Some(command) => command,
            None => return Ok(HandlerResponse::Continue),
        };
        info!(command = ?command, user_id = message.user.id, "Command received");

        let reply = match command {
            Command::Start => {
                let text = self.welcome_text();
                self.bot.reply_to(message, &text).await?;
                text
            }
            Command::Help => {
                let text = self.help_text();
                self.bot.reply_to(message, &text).await?;
                text
            }
            Command::Mailman => self.mailman(message).await?,
            Command::Feedback(text) => self.feedback(message, &text).await?,
        };
        Ok(HandlerResponse::Reply(reply))
    }
}
