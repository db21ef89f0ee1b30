//! Mailing-list mails grouped into threads by subject.

use std::fmt;

use serde::{Deserialize, Serialize};
use teloxide::utils::html;

use super::text::{capitalize_no_sym, POINTER};

/// A mail as listed in the mailing-list web archive.
///
/// Two mails are equal when they share the archive url (the url carries the message id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mail {
    subject: String,
    author: String,
    url: String,
}

impl Mail {
    /// Creates a mail; the subject is stripped of its `[list] ` tag, the url is kept raw.
    pub fn new(subject: impl Into<String>, author: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            subject: sanitize_subject(&subject.into()),
            author: author.into(),
            url: url.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PartialEq for Mail {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Mail {}

impl fmt::Display for Mail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subject: {}\n\tAuthor: {}\n\tURL: {}",
            self.subject, self.author, self.url
        )
    }
}

/// Drops everything up to the first `]` and the separator right after it.
fn sanitize_subject(subject: &str) -> String {
    match subject.find(']') {
        Some(i) => {
            let mut rest = subject[i + 1..].chars();
            rest.next();
            rest.as_str().to_string()
        }
        None => subject.to_string(),
    }
}

/// Mails sharing one subject, in arrival order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thread {
    pub subject: String,
    pub mails: Vec<Mail>,
}

/// Mails partitioned by subject. Subjects keep their first-insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Threads {
    threads: Vec<Thread>,
}

impl Threads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `mail` under its subject. Returns false when the same mail is already in that thread.
    pub fn append(&mut self, mail: Mail) -> bool {
        match self.threads.iter_mut().find(|t| t.subject == mail.subject) {
            Some(thread) => {
                if thread.mails.contains(&mail) {
                    return false;
                }
                thread.mails.push(mail);
            }
            None => self.threads.push(Thread {
                subject: mail.subject.clone(),
                mails: vec![mail],
            }),
        }
        true
    }

    pub fn count_threads(&self) -> usize {
        self.threads.len()
    }

    pub fn count_mails(&self) -> usize {
        self.threads.iter().map(|t| t.mails.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    /// Threads in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Thread> {
        self.threads.iter()
    }

    /// Telegram HTML rendering, newest thread and newest mail first.
    pub fn html(&self) -> String {
        let mut s = String::new();
        for thread in self.threads.iter().rev() {
            s.push_str(&format!(
                "{} <b>{}</b>\n",
                POINTER,
                html::escape(&capitalize_no_sym(&thread.subject))
            ));
            for mail in thread.mails.iter().rev() {
                s.push_str(&format!(
                    "    <a href=\"{}\">{}</a>\n",
                    mail.url,
                    html::escape(&mail.author)
                ));
            }
        }
        s
    }
}

impl fmt::Display for Threads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for thread in self.threads.iter().rev() {
            writeln!(f, "{}:", thread.subject)?;
            for mail in thread.mails.iter().rev() {
                writeln!(f, "\t{} - <{}>", mail.author, mail.url)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
