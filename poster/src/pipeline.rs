//! fetch → extract-structure → format → publish

use anyhow::{Context, Result};
use common::format_post;
use extractor::PageTextExtractor;
use gemini::GeminiClient;
use linkedin::LinkedInClient;
use linkedin::models::PublishedPost;
use tracing::info;

use crate::config::Config;

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The page could not be fetched or had no text. Nothing else ran.
    NoText,
    /// Post formatted but publishing was skipped.
    Drafted { post: String },
    Published { post: String, receipt: PublishedPost },
}

/// The three external clients, built once from [`Config`].
pub struct Pipeline {
    extractor: PageTextExtractor,
    gemini: GeminiClient,
    linkedin: LinkedInClient,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extractor: PageTextExtractor::new(config.http_timeout)
                .context("Failed to build page fetcher")?,
            gemini: GeminiClient::new(config.gemini_options())
                .context("Failed to build Gemini client")?,
            linkedin: LinkedInClient::new(config.linkedin_options())
                .context("Failed to build LinkedIn client")?,
        })
    }

    /// Runs every stage for `url`. With `publish` false the run stops after
    /// formatting.
    ///
    /// A page that yields no text ends the run gracefully. Gemini and
    /// LinkedIn failures are returned as errors.
    pub fn run(&self, url: &str, publish: bool) -> Result<RunOutcome> {
        println!("📡 Fetching job page: {}", url);

        let text = match self.extractor.extract_text_from_url(url) {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                println!("❌ Failed to extract text from the URL.");
                return Ok(RunOutcome::NoText);
            }
        };
        println!("✅ Extracted {} characters of text\n", text.len());
        println!("{}\n", text);

        println!("🤖 Structuring job description with {}...", self.gemini.model());
        let job = self
            .gemini
            .extract_job_record(&text)
            .context("Failed to get structured job description")?;
        info!(company = %job.company_name, title = %job.job_title, "Job record extracted");

        let post = format_post(&job, url);
        println!("\nGenerated LinkedIn Post:\n{}\n", post);

        if !publish {
            println!("📝 Dry run: not publishing.");
            return Ok(RunOutcome::Drafted { post });
        }

        println!("📤 Publishing as {}...", self.linkedin.author());
        let receipt = self
            .linkedin
            .publish(&post)
            .context("Failed to publish post to LinkedIn")?;
        println!("\n✨ Pipeline complete!");

        Ok(RunOutcome::Published { post, receipt })
    }
}
