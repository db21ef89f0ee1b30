//! Mailman archive: url template substitution and the page parser collaborator.

mod parser;

pub use parser::{parse_index, MailmanParser};

use async_trait::async_trait;
use vargram_core::{Result, Threads};

/// Year substituted for `$Y` at startup.
pub const STARTUP_YEAR: &str = "2017";
/// Month substituted for `$M` at startup.
pub const STARTUP_MONTH: &str = "April";

/// Replaces every `$Y` with `year` and every `$M` with `month`; nothing else changes.
pub fn mailman_url(template: &str, year: &str, month: &str) -> String {
    template.replace("$Y", year).replace("$M", month)
}

/// Fetches and parses one archive page into mail threads.
#[async_trait]
pub trait PageParser: Send + Sync {
    async fn parse_page(&self) -> Result<Threads>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_substituted() {
        let url = mailman_url(
            "https://lists.example.org/pipermail/vargram/$Y-$M/date.html",
            STARTUP_YEAR,
            STARTUP_MONTH,
        );
        assert_eq!(
            url,
            "https://lists.example.org/pipermail/vargram/2017-April/date.html"
        );
    }

    #[test]
    fn test_every_occurrence_is_substituted() {
        assert_eq!(mailman_url("$Y/$M/$Y$M", "2017", "April"), "2017/April/2017April");
    }

    #[test]
    fn test_template_without_placeholders_is_unchanged() {
        let template = "https://lists.example.org/archive/$y-$m/$";
        assert_eq!(mailman_url(template, "2017", "April"), template);
    }
}
