//! Job description capture.
//!
//! ATS posting pages render the description as plain visible text, so a
//! straight fetch plus text extraction is enough; pages that block
//! content scraping yield nothing and the posting is skipped upstream.

use scraper::{Html, Selector};
use tracing::warn;

use crate::fetch::Fetcher;

/// Cap on captured description text, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 6000;

/// Fetches a posting page and returns its visible text, truncated to
/// `max_chars`. `None` means the page was unreachable or had no visible
/// text; failures are recovered here, never propagated.
pub async fn fetch_job_description<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    max_chars: usize,
) -> Option<String> {
    let html = match fetcher.get_html(url).await {
        Ok(html) => html,
        Err(err) => {
            warn!("description fetch for {url} failed: {err}");
            return None;
        }
    };
    let text = visible_text(&html);
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(max_chars).collect())
}

/// Visible text of the page body, one line per text node so the
/// description keeps enough line structure for section extraction.
fn visible_text(html: &str) -> String {
    let body_selector = Selector::parse("body").expect("body selector is valid");
    let document = Html::parse_document(html);
    let body = match document.select(&body_selector).next() {
        Some(body) => body,
        None => return String::new(),
    };
    body.text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
