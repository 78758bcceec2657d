//! Turns a structured job record into the text of a social post.

use crate::job::JobRecord;
use std::fmt::Write;

/// Hashtags added to every post, ahead of the record's own.
const FIXED_HASHTAGS: &str = "#Hiring #CareerOpportunity #JoinUs";

/// Renders the post for `job`, linking back to `url`.
///
/// Order is fixed: company, title, level, skills, call-to-action, hashtags.
/// Location, experience and the "why join" pitch are not rendered.
pub fn format_post(job: &JobRecord, url: &str) -> String {
    let mut post = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(post, "🚀 {} Hiring! 🚀", job.company_name);
    let _ = writeln!(post);
    let _ = writeln!(post, "Role: {}", job.job_title);
    let _ = writeln!(post, "Job Level: {}", job.level);
    let _ = writeln!(post);
    let _ = writeln!(post, "Skills Required:");
    for skill in &job.required_skills {
        let _ = writeln!(post, "• {}", skill);
    }
    let _ = writeln!(post);
    let _ = writeln!(post, "📩 Interested? Apply now 👉 {}", url);
    let _ = writeln!(post);
    let _ = write!(post, "{} {} 🚀", FIXED_HASHTAGS, job.hashtag);

    post
}
