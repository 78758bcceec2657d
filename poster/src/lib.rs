//! Job post pipeline: fetch a job page, structure it with Gemini,
//! format a post and publish it to LinkedIn.

pub mod config;
pub mod pipeline;

pub use config::Config;
pub use pipeline::{Pipeline, RunOutcome};
