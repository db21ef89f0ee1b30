//! Content model rendered by the bot: mailing-list threads, subreddit posts and feed articles.
//!
//! Every collection renders to Telegram HTML through `html()`.

mod feed;
mod mail;
mod reddit;
mod text;

pub use feed::{Article, Feed};
pub use mail::{Mail, Thread, Threads};
pub use reddit::{Post, Subreddit};
pub use text::{capitalize_no_sym, POINTER};
