//! Subreddit listing ordered by top posts.

use std::fmt;

use serde::{Deserialize, Serialize};
use teloxide::utils::html;

use super::text::POINTER;

/// A subreddit post. Link posts carry a separate comments link; self posts don't.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    title: String,
    url: String,
    comments: Option<String>,
}

impl Post {
    /// Creates a post. For link posts `comments` falls back to `url` when not given.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        is_self: bool,
        comments: Option<String>,
    ) -> Self {
        let url = url.into();
        let comments = if is_self {
            None
        } else {
            // Earlier releases ignored `comments` and always linked `url` here.
            comments.or_else(|| Some(url.clone()))
        };
        Self {
            title: title.into(),
            url,
            comments,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn html(&self) -> String {
        let mut s = format!("<a href=\"{}\">{}</a>", self.url, html::escape(&self.title));
        if let Some(comments) = &self.comments {
            s.push_str(&format!(" (<a href=\"{}\">comments</a>)", comments));
        }
        s
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\n\tURL: {}\n\tComments: {}",
            self.title,
            self.url,
            self.comments.as_deref().unwrap_or("-")
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subreddit {
    name: String,
    posts: Vec<Post>,
}

impl Subreddit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            posts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn append(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn html(&self) -> String {
        self.posts
            .iter()
            .map(|p| format!("{} {}", POINTER, p.html()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Subreddit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.posts.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
