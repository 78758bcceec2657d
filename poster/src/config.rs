use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub linkedin_access_token: String,
    /// Member id; the author URN is built from it.
    pub linkedin_member_id: String,
    pub linkedin_endpoint: String,
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("{} must be set", key))
        };
        // Blank optional values fall back to their defaults
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .context("HTTP_TIMEOUT_SECS must be a valid number")?;
                if secs == 0 {
                    bail!("HTTP_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            gemini_api_key: required("GEMINI_API_KEY")?,
            gemini_model: optional("GEMINI_MODEL", gemini::DEFAULT_MODEL),
            gemini_base_url: optional("GEMINI_BASE_URL", gemini::DEFAULT_BASE_URL),
            linkedin_access_token: required("LINKEDIN_ACCESS_TOKEN")?,
            linkedin_member_id: required("PROFILE_URN")?,
            linkedin_endpoint: optional("LINKEDIN_API_URL", linkedin::DEFAULT_ENDPOINT),
            http_timeout,
        })
    }

    pub fn gemini_options(&self) -> gemini::GeminiOptions {
        gemini::GeminiOptions::new(&self.gemini_api_key)
            .with_model(&self.gemini_model)
            .with_base_url(&self.gemini_base_url)
            .with_timeout(self.http_timeout)
    }

    pub fn linkedin_options(&self) -> linkedin::LinkedInOptions {
        linkedin::LinkedInOptions::new(&self.linkedin_access_token, &self.linkedin_member_id)
            .with_endpoint(&self.linkedin_endpoint)
            .with_timeout(self.http_timeout)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("linkedin_access_token", &"<redacted>")
            .field("linkedin_member_id", &self.linkedin_member_id)
            .field("linkedin_endpoint", &self.linkedin_endpoint)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
