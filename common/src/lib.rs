//! Shared job-posting types and the post formatter used by every stage
//! of the pipeline.

pub mod job;
pub mod post;

pub use job::{DEFAULT_EXPERIENCE, DEFAULT_HASHTAG, JobLevel, JobRecord, NOT_SPECIFIED, RecordError};
pub use post::format_post;
