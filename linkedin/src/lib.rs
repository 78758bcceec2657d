//! Publishes text posts to LinkedIn through the UGC Posts API.

pub mod models;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

use crate::models::{PublishedPost, UgcPost};

pub const DEFAULT_ENDPOINT: &str = "https://api.linkedin.com/v2/ugcPosts";

#[derive(Debug, Error)]
pub enum LinkedInError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to LinkedIn failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("LinkedIn rejected the post ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Builds the author URN for a member id.
pub fn author_urn(member_id: &str) -> String {
    format!("urn:li:person:{}", member_id)
}

#[derive(Clone)]
pub struct LinkedInOptions {
    pub access_token: String,
    pub member_id: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl LinkedInOptions {
    pub fn new(access_token: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            member_id: member_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for LinkedInOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedInOptions")
            .field("access_token", &"<redacted>")
            .field("member_id", &self.member_id)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct LinkedInClient {
    http_client: Client,
    options: LinkedInOptions,
    author: String,
}

impl LinkedInClient {
    pub fn new(options: LinkedInOptions) -> Result<Self, LinkedInError> {
        let http_client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(LinkedInError::Client)?;
        let author = author_urn(&options.member_id);
        Ok(Self {
            http_client,
            options,
            author,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Shares `text` publicly as the configured member.
    ///
    /// Only `201 Created` counts as success. Any other status is logged with
    /// its body and returned as [`LinkedInError::Rejected`].
    pub fn publish(&self, text: &str) -> Result<PublishedPost, LinkedInError> {
        let payload = UgcPost::public_text(&self.author, text);

        let response = self
            .http_client
            .post(&self.options.endpoint)
            .bearer_auth(&self.options.access_token)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .json(&payload)
            .send()
            .map_err(|e| {
                error!(error = %e, "❌ Request to LinkedIn failed");
                LinkedInError::Network(e)
            })?;

        let status = response.status();
        if status == StatusCode::CREATED {
            let id = response
                .headers()
                .get("x-restli-id")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            info!(
                post_id = id.as_deref().unwrap_or("unknown"),
                "✅ Successfully posted on LinkedIn!"
            );
            return Ok(PublishedPost { id });
        }

        let body = response.text().unwrap_or_default();
        error!(status = status.as_u16(), body = %body, "❌ LinkedIn rejected the post");
        Err(LinkedInError::Rejected { status, body })
    }
}
