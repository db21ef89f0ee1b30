//! Pipermail index parsing (`date.html` / `thread.html` of a monthly archive).

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Url;
use tracing::{debug, info, instrument, warn};
use vargram_core::{Mail, Result, Threads, VarGramError};

use super::PageParser;

const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Index entry: `<LI><A HREF="000123.html">[list] Subject</A><A NAME="123">&nbsp;</A> <I>Author</I>`.
fn entry_regex() -> &'static Regex {
    static ENTRY: OnceLock<Regex> = OnceLock::new();
    ENTRY.get_or_init(|| {
        Regex::new(
            r#"(?is)<li>\s*<a\s+href="([^"]+)"\s*>(.*?)</a>\s*(?:<a\s+name="[^"]*"\s*>[^<]*</a>)?\s*<i>(.*?)</i>"#,
        )
        .expect("static regex")
    })
}

/// Parses the archive page at a fixed url.
pub struct MailmanParser {
    url: Url,
    client: reqwest::Client,
}

impl MailmanParser {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| VarGramError::Config(format!("invalid mailman url {}: {}", url, e)))?;
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("vargram-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| VarGramError::Http(e.to_string()))?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| VarGramError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Archive fetch failed");
            return Err(VarGramError::Http(format!("{} returned {}", self.url, status)));
        }
        response
            .text()
            .await
            .map_err(|e| VarGramError::Http(e.to_string()))
    }
}

#[async_trait]
impl PageParser for MailmanParser {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn parse_page(&self) -> Result<Threads> {
        let body = self.fetch().await?;
        let threads = parse_index(&self.url, &body);
        info!(
            threads = threads.count_threads(),
            mails = threads.count_mails(),
            "Archive page parsed"
        );
        Ok(threads)
    }
}

/// Extracts every mail entry of a pipermail index. Links are resolved against `base`.
pub fn parse_index(base: &Url, html: &str) -> Threads {
    let mut threads = Threads::new();
    for caps in entry_regex().captures_iter(html) {
        let href = &caps[1];
        let url = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                debug!(href = %href, error = %e, "Skipping entry with bad link");
                continue;
            }
        };
        let subject = clean_text(&caps[2]);
        let author = clean_text(&caps[3]);
        threads.append(Mail::new(subject, author, url.to_string()));
    }
    threads
}

/// Decodes HTML entities (named and numeric) and collapses whitespace.
/// Text with a malformed entity is kept undecoded.
fn clean_text(raw: &str) -> String {
    let decoded = match htmlescape::decode_html(raw) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!(error = ?e, text = %raw, "Keeping undecodable archive text");
            raw.to_string()
        }
    };
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
