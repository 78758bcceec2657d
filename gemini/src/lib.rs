//! Blocking Gemini client
//!
//! Sends a prompt to `generateContent` with a response schema so the model
//! itself returns JSON in the requested shape, then parses that JSON locally.
//!
//! ```rust,ignore
//! let client = GeminiClient::new(GeminiOptions::new(api_key))?;
//! let job = client.extract_job_record(&page_text)?;
//! ```

pub mod error;
pub mod job;
pub mod schema;
pub mod types;

pub use error::{GeminiError, Result};
pub use job::build_prompt;
pub use schema::job_record_schema;

use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use types::{GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for the Gemini API.
#[derive(Clone)]
pub struct GeminiOptions {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (proxies, local mocks).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for GeminiOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiOptions")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Gemini API client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: Client,
    options: GeminiOptions,
}

impl GeminiClient {
    pub fn new(options: GeminiOptions) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(GeminiError::Client)?;
        Ok(Self {
            http_client,
            options,
        })
    }

    pub fn model(&self) -> &str {
        &self.options.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.options.base_url.trim_end_matches('/'),
            self.options.model
        )
    }

    /// Generates JSON constrained to `schema` and returns the raw text.
    ///
    /// The raw candidate text is logged before it is checked. Fails with
    /// [`GeminiError::EmptyResponse`] when the model answers without any text.
    pub fn generate_json(&self, prompt: &str, schema: Value) -> Result<String> {
        let request = GenerateContentRequest::json(prompt, schema);

        debug!(model = %self.options.model, prompt_chars = prompt.len(), "Calling Gemini");

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", self.options.api_key.as_str())
            .json(&request)
            .send()
            .map_err(GeminiError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        let body: GenerateContentResponse = response.json().map_err(GeminiError::Parse)?;

        let text = body.first_text().unwrap_or_default();
        info!(model = %self.options.model, response = %text, "Gemini response");

        if text.trim().is_empty() {
            warn!(
                finish_reason = body.finish_reason().unwrap_or("unknown"),
                "Gemini returned no content"
            );
            return Err(GeminiError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}
