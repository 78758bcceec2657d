use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Experience value used when the posting does not mention one.
pub const DEFAULT_EXPERIENCE: &str = "0+";

/// Hashtag used when the model has nothing better to offer.
pub const DEFAULT_HASHTAG: &str = "#Hiring";

/// Placeholder for free-text fields the posting leaves out.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Seniority of a job posting.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum JobLevel {
    Entry,
    Mid,
    Senior,
}

impl JobLevel {
    pub const ALL: [JobLevel; 3] = [JobLevel::Entry, JobLevel::Mid, JobLevel::Senior];

    /// Display string, also the value used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobLevel::Entry => "Entry",
            JobLevel::Mid => "Mid",
            JobLevel::Senior => "Senior",
        }
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured job posting, as returned by the language model.
///
/// Field names on the wire match the response schema sent to the model,
/// so a few of them differ from the Rust names.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JobRecord {
    pub job_title: String,
    pub company_name: String,
    #[serde(rename = "level_of_job")]
    pub level: JobLevel,
    #[serde(rename = "year_of_experience")]
    pub years_of_experience: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub why_join_us: String,
    pub hashtag: String,
}

/// A record that cannot be turned into a post.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("job record is missing a value for `{0}`")]
    MissingField(&'static str),
}

impl JobRecord {
    /// Trims every text field and replaces blanks with the documented
    /// placeholders. Blank skills are dropped.
    pub fn with_defaults(mut self) -> Self {
        self.job_title = self.job_title.trim().to_string();
        self.company_name = self.company_name.trim().to_string();
        self.years_of_experience = or_default(&self.years_of_experience, DEFAULT_EXPERIENCE);
        self.location = or_default(&self.location, NOT_SPECIFIED);
        self.why_join_us = or_default(&self.why_join_us, NOT_SPECIFIED);
        self.hashtag = or_default(&self.hashtag, DEFAULT_HASHTAG);
        self.required_skills = self
            .required_skills
            .into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect();
        self
    }

    /// Title and company have no safe default, so they must be present.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.job_title.trim().is_empty() {
            return Err(RecordError::MissingField("job_title"));
        }
        if self.company_name.trim().is_empty() {
            return Err(RecordError::MissingField("company_name"));
        }
        Ok(())
    }
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
