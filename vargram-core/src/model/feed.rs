//! RSS feed articles.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use teloxide::utils::html;

use super::text::POINTER;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Publication date.
    pub date: NaiveDateTime,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            date,
        }
    }

    pub fn html(&self) -> String {
        format!(
            "<a href=\"{}\">{}</a>\n    \u{231A} {}",
            self.url,
            html::escape(&self.title),
            self.date.format("%d/%m/%y %H:%M")
        )
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\n\tDescription: {}\n\tURL: {}\n\tDate: {}",
            self.title,
            self.description,
            self.url,
            self.date.format("%d/%m/%y %H:%M:%S")
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feed {
    title: String,
    articles: Vec<Article>,
}

impl Feed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            articles: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn append(&mut self, article: Article) {
        self.articles.push(article);
    }

    pub fn html(&self) -> String {
        self.articles
            .iter()
            .map(|a| format!("{} {}", POINTER, a.html()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.articles.iter().map(|a| a.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
