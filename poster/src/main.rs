//! Job Post Publisher
//!
//! Reads a job posting URL, turns the page into a LinkedIn post with
//! Gemini, and publishes it.

use anyhow::{Context, Result};
use clap::Parser;
use poster::{Config, Pipeline};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "poster", about = "Turn a job posting page into a LinkedIn post")]
struct Cli {
    /// Job posting URL. Prompted for when omitted.
    url: Option<String>,

    /// Format the post but do not publish it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let url = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    let pipeline = Pipeline::new(&config)?;
    pipeline.run(url.trim(), !cli.dry_run)?;
    Ok(())
}

fn prompt_for_url() -> Result<String> {
    print!("Enter the article URL: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read URL from stdin")?;
    Ok(line.trim().to_string())
}
