//! # vargram-core
//!
//! Core types and traits for VarGram Bot: [`Bot`], [`Handler`], [`HandlerChain`], message and user types,
//! the mailing-list / feed [`model`], and tracing initialization. Transport-agnostic apart from the
//! teloxide-backed [`TelegramBot`].

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod model;
pub mod types;

pub use bot::{Bot, TelegramBot};
pub use chain::HandlerChain;
pub use error::{Result, VarGramError};
pub use logger::{init_tracing, LineFormat};
pub use model::{Article, Feed, Mail, Post, Subreddit, Thread, Threads};
pub use types::{
    Chat, ChatKind, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage,
    ToCoreUser, User,
};
