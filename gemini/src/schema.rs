//! Response schema for the job record, in the OpenAPI subset that
//! `generationConfig.responseSchema` accepts.

use common::JobLevel;
use serde_json::{json, Value};

/// Property names in the order the model should emit them.
const PROPERTIES: [&str; 8] = [
    "job_title",
    "company_name",
    "level_of_job",
    "year_of_experience",
    "location",
    "required_skills",
    "why_join_us",
    "hashtag",
];

/// Schema matching `common::JobRecord`. Every property is required.
pub fn job_record_schema() -> Value {
    let levels: Vec<&str> = JobLevel::ALL.iter().map(JobLevel::as_str).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "job_title": {
                "type": "STRING",
                "description": "Title of the job position"
            },
            "company_name": {
                "type": "STRING",
                "description": "Name of the company hiring"
            },
            "level_of_job": {
                "type": "STRING",
                "format": "enum",
                "enum": levels,
                "description": "Seniority of the role"
            },
            "year_of_experience": {
                "type": "STRING",
                "description": "Candidate experience required, if mentioned"
            },
            "location": {
                "type": "STRING",
                "description": "Job location, if mentioned"
            },
            "required_skills": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Skills needed for the role"
            },
            "why_join_us": {
                "type": "STRING",
                "description": "Reasons why candidates should join"
            },
            "hashtag": {
                "type": "STRING",
                "description": "Be creative, add multiple hashtags related to the job"
            }
        },
        "required": PROPERTIES,
        "propertyOrdering": PROPERTIES
    })
}
