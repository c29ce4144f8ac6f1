//! Web page scraper for sentence fragments.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use super::SentenceSource;

/// Page listing numbered common English phrases inside table cells.
pub const DEFAULT_SENTENCES_URL: &str =
    "https://basicenglishspeaking.com/100-common-phrases-and-sentence-patterns/";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("social-bot/", env!("CARGO_PKG_VERSION"));

/// Characters of leading numbering ("001. ") dropped from every fragment.
const NUMBERING_PREFIX_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid selector '{selector}': {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },
}

/// Fetches sentence fragments from the anchors of an HTML table.
pub struct WebSentenceSource {
    client: reqwest::Client,
    url: String,
}

impl WebSentenceSource {
    /// Creates a source for the default phrase page with a bounded request timeout.
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self::with_client(client))
    }

    /// Uses a preconfigured HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            url: DEFAULT_SENTENCES_URL.to_string(),
        }
    }

    /// Sets a custom page URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn try_fetch(&self, limit: usize) -> Result<Vec<String>, SourceError> {
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        extract_sentences(&body, limit)
    }
}

#[async_trait]
impl SentenceSource for WebSentenceSource {
    async fn fetch(&self, limit: usize) -> Vec<String> {
        match self.try_fetch(limit).await {
            Ok(sentences) => {
                tracing::debug!(url = %self.url, count = sentences.len(), "Fetched sentences");
                sentences
            }
            Err(e) => {
                tracing::error!("Error fetching sentences: {e}");
                Vec::new()
            }
        }
    }
}

/// Extracts up to `limit` fragments from the first anchor of every table cell.
///
/// Cells are visited in document order, nested cells included. Each anchor's text
/// is stripped of its numbering prefix and skipped if nothing remains.
pub fn extract_sentences(html: &str, limit: usize) -> Result<Vec<String>, SourceError> {
    let cells = selector("td")?;
    let anchors = selector("a")?;
    let document = Html::parse_document(html);

    let sentences = document
        .select(&cells)
        .filter_map(|cell| cell.select(&anchors).next())
        .map(|anchor| strip_numbering(&anchor_text(anchor)))
        .filter(|sentence| !sentence.is_empty())
        .take(limit)
        .collect();

    Ok(sentences)
}

fn selector(selector: &'static str) -> Result<Selector, SourceError> {
    Selector::parse(selector).map_err(|e| SourceError::Selector {
        selector,
        reason: e.to_string(),
    })
}

fn anchor_text(anchor: ElementRef<'_>) -> String {
    anchor.text().collect::<String>().trim().to_string()
}

fn strip_numbering(text: &str) -> String {
    text.chars()
        .skip(NUMBERING_PREFIX_LEN)
        .collect::<String>()
        .trim()
        .to_string()
}
