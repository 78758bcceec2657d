//! Job Page Text Extractor
//!
//! Downloads a job posting page and returns the text of its paragraphs,
//! ready to be handed to the language model.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

const USER_AGENT: &str = concat!("job-poster/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
}

/// Fetches pages and pulls the paragraph text out of them.
#[derive(Debug, Clone)]
pub struct PageTextExtractor {
    client: Client,
}

impl PageTextExtractor {
    pub fn new(timeout: Duration) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ExtractError::Client)?;
        Ok(Self { client })
    }

    /// Downloads `url` and returns the response body.
    /// Non-success statuses are errors.
    pub fn fetch_html(&self, url: &str) -> Result<String, ExtractError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ExtractError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().map_err(|source| ExtractError::Network {
            url: url.to_string(),
            source,
        })
    }

    /// Returns the page's paragraph text, or `None` when the page could not
    /// be fetched. The failure is logged, never propagated.
    pub fn extract_text_from_url(&self, url: &str) -> Option<String> {
        let html = match self.fetch_html(url) {
            Ok(html) => html,
            Err(e) => {
                error!(error = %e, "❌ Error fetching URL");
                return None;
            }
        };

        info!(url, bytes = html.len(), "✅ Fetched page");
        let text = paragraph_text(&html);
        debug!(chars = text.len(), "Extracted paragraph text");
        Some(text)
    }
}

/// Text of every `<p>` element, in document order, one per line.
/// Empty when the document has no paragraphs.
pub fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "p")
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
