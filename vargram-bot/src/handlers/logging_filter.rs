//! Handlers for logging and chat filtering (private chats + the configured group).

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};
use vargram_core::{Handler, HandlerResponse, Message, Result};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = ?message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}

/// Stops the chain for messages that come neither from a private chat nor from the bot's group.
pub struct ChatFilterHandler {
    group_id: i64,
}

impl ChatFilterHandler {
    pub fn new(group_id: i64) -> Self {
        Self { group_id }
    }

    pub fn allows(&self, message: &Message) -> bool {
        message.chat.is_private() || message.chat.id == self.group_id
    }
}

#[async_trait]
impl Handler for ChatFilterHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        if self.allows(message) {
            Ok(true)
        } else {
            warn!(chat_id = message.chat.id, "Ignoring message from foreign chat");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vargram_core::{Chat, ChatKind, MessageDirection, User};

    fn message_in(chat_id: i64, kind: ChatKind) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 7,
                username: None,
                first_name: Some("Ann".to_string()),
                last_name: None,
            },
            chat: Chat { id: chat_id, kind },
            content: "/help".to_string(),
            direction: MessageDirection::Incoming,
            created_at: Utc::now(),
            reply_to_message_id: None,
        }
    }

    #[tokio::test]
    async fn test_private_chat_is_allowed() {
        let filter = ChatFilterHandler::new(-100);
        assert!(filter.before(&message_in(7, ChatKind::Private)).await.unwrap());
    }

    #[tokio::test]
    async fn test_configured_group_is_allowed() {
        let filter = ChatFilterHandler::new(-100);
        assert!(filter.before(&message_in(-100, ChatKind::Group)).await.unwrap());
    }

    #[tokio::test]
    async fn test_other_group_is_stopped() {
        let filter = ChatFilterHandler::new(-100);
        assert!(!filter.before(&message_in(-200, ChatKind::Group)).await.unwrap());
        assert!(!filter.before(&message_in(-300, ChatKind::Channel)).await.unwrap());
    }

    #[tokio::test]
    async fn test_logging_handler_always_continues() {
        let message = message_in(-200, ChatKind::Group);
        assert!(LoggingHandler.before(&message).await.unwrap());
        LoggingHandler
            .after(&message, &HandlerResponse::Continue)
            .await
            .unwrap();
    }
}
