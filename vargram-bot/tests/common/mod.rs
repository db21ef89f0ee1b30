//! Mock collaborators shared by the integration tests: a recording Bot, a canned PageParser
//! and a recording Notifier.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use vargram_bot::{Notifier, PageParser};
use vargram_core::{
    Bot, Chat, ChatKind, Message, MessageDirection, Result, Threads, User, VarGramError,
};

/// One message sent through [`MockBot`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sent {
    pub chat_id: i64,
    pub text: String,
    pub html: bool,
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent {
            chat_id: chat.id,
            text: text.to_string(),
            html: false,
        });
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent {
            chat_id: chat.id,
            text: html.to_string(),
            html: true,
        });
        Ok(())
    }
}

/// Returns a fixed page, or an Http error when built with [`MockParser::failing`].
pub struct MockParser {
    threads: Option<Threads>,
}

impl MockParser {
    pub fn with(threads: Threads) -> Arc<Self> {
        Arc::new(Self {
            threads: Some(threads),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { threads: None })
    }
}

#[async_trait]
impl PageParser for MockParser {
    async fn parse_page(&self) -> Result<Threads> {
        self.threads
            .clone()
            .ok_or_else(|| VarGramError::Http("archive unreachable".to_string()))
    }
}

#[derive(Default)]
pub struct MockNotifier {
    fail: bool,
    mails: Mutex<Vec<(String, String)>>,
}

impl MockNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn mails(&self) -> Vec<(String, String)> {
        self.mails.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, subject: &str, body: &str) -> Result<()> {
        if self.fail {
            return Err(VarGramError::Mail("connection refused".to_string()));
        }
        self.mails
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// Text message from user 42 (`@ann`) in the given chat.
pub fn message(chat_id: i64, kind: ChatKind, text: &str) -> Message {
    Message {
        id: "100".to_string(),
        user: User {
            id: 42,
            username: Some("ann".to_string()),
            first_name: Some("Ann".to_string()),
            last_name: None,
        },
        chat: Chat { id: chat_id, kind },
        content: text.to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}
