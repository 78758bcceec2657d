//! Job posting extraction on top of [`GeminiClient`].

use crate::error::{GeminiError, Result};
use crate::schema::job_record_schema;
use crate::GeminiClient;
use common::{JobRecord, DEFAULT_EXPERIENCE, DEFAULT_HASHTAG};
use tracing::debug;

/// Instruction sent to the model, with the page text embedded.
pub fn build_prompt(job_description_text: &str) -> String {
    format!(
        "Extract the following job description into a structured JSON format.\n\
         Only extract information explicitly mentioned in the text and do not invent missing details.\n\
         \n\
         If a field is not mentioned, return an appropriate default \
         (experience = \"{DEFAULT_EXPERIENCE}\", hashtag = \"{DEFAULT_HASHTAG}\").\n\
         \n\
         Job Description Text:\n\
         {job_description_text}\n"
    )
}

impl GeminiClient {
    /// Turns free job-description text into a [`JobRecord`].
    ///
    /// Output that does not deserialize, or that lacks a title or company,
    /// is a [`GeminiError::Schema`] error.
    pub fn extract_job_record(&self, job_description_text: &str) -> Result<JobRecord> {
        let prompt = build_prompt(job_description_text);
        let raw = self.generate_json(&prompt, job_record_schema())?;

        let record: JobRecord =
            serde_json::from_str(&raw).map_err(|e| GeminiError::Schema(e.to_string()))?;
        let record = record.with_defaults();
        record.validate()?;
        debug!(company = %record.company_name, title = %record.job_title, "Parsed job record");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeminiOptions;
    use common::JobLevel;
    use mockito::Matcher;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

    fn client(server: &mockito::Server) -> GeminiClient {
        let options = GeminiOptions::new("test-key")
            .with_base_url(server.url())
            .with_timeout(Duration::from_secs(5));
        GeminiClient::new(options).unwrap()
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
        (result, logs)
    }

    fn envelope(text: &str) -> String {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })
        .to_string()
    }

    fn record_json() -> String {
        json!({
            "job_title": "Platform Engineer",
            "company_name": "Acme",
            "level_of_job": "Senior",
            "year_of_experience": "",
            "location": "Remote",
            "required_skills": ["Rust", "Kubernetes"],
            "why_join_us": "Small team",
            "hashtag": "#RustJobs"
        })
        .to_string()
    }

    #[test]
    fn test_build_prompt_embeds_text_and_rules() {
        let prompt = build_prompt("Acme is hiring a Rust engineer.");
        assert!(prompt.contains("Acme is hiring a Rust engineer."));
        assert!(prompt.contains("explicitly mentioned"));
        assert!(prompt.contains("\"0+\""));
        assert!(prompt.contains("\"#Hiring\""));
    }

    #[test]
    fn test_extract_job_record_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", PATH)
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({
                    "generationConfig": {
                        "responseMimeType": "application/json",
                        "responseSchema": {"type": "OBJECT"}
                    }
                })),
                Matcher::Regex("Acme is hiring".to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(envelope(&record_json()))
            .expect(1)
            .create();

        let (result, logs) = capture_logs(|| {
            client(&server).extract_job_record("Acme is hiring a platform engineer.")
        });
        let record = result.unwrap();

        mock.assert();
        // raw model output is emitted as-is
        assert!(logs.contains(r#""company_name":"Acme""#), "logs: {logs}");
        assert!(logs.contains(r##""hashtag":"#RustJobs""##), "logs: {logs}");
        assert_eq!(record.company_name, "Acme");
        assert_eq!(record.job_title, "Platform Engineer");
        assert_eq!(record.level, JobLevel::Senior);
        assert_eq!(record.required_skills, vec!["Rust", "Kubernetes"]);
        // blank experience falls back to the default
        assert_eq!(record.years_of_experience, "0+");
    }

    #[test]
    fn test_no_candidates_is_empty_response() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(json!({"candidates": []}).to_string())
            .create();

        let err = client(&server).extract_job_record("text").unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));
    }

    #[test]
    fn test_blank_text_is_empty_response() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(envelope("   "))
            .create();

        let (result, logs) = capture_logs(|| client(&server).extract_job_record("text"));
        assert!(matches!(result.unwrap_err(), GeminiError::EmptyResponse));
        assert!(logs.contains("Gemini response"), "logs: {logs}");
        assert!(logs.contains("Gemini returned no content"), "logs: {logs}");
        assert!(logs.contains("STOP"), "logs: {logs}");
    }

    #[test]
    fn test_api_error_keeps_status_and_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(403)
            .with_body("API key not valid")
            .create();

        let err = client(&server).extract_job_record("text").unwrap_err();
        match err {
            GeminiError::Api { status, body } => {
                assert_eq!(status.as_u16(), 403);
                assert_eq!(body, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_output_not_matching_schema_is_rejected() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(envelope(r#"{"job_title": "Engineer"}"#))
            .create();

        let err = client(&server).extract_job_record("text").unwrap_err();
        assert!(matches!(err, GeminiError::Schema(_)));
    }

    #[test]
    fn test_missing_company_is_rejected() {
        let output = json!({
            "job_title": "Engineer",
            "company_name": "",
            "level_of_job": "Entry",
            "year_of_experience": "0+",
            "location": "",
            "required_skills": [],
            "why_join_us": "",
            "hashtag": ""
        })
        .to_string();

        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(envelope(&output))
            .create();

        let err = client(&server).extract_job_record("text").unwrap_err();
        assert!(matches!(err, GeminiError::Schema(msg) if msg.contains("company_name")));
    }

    #[test]
    fn test_garbled_envelope_is_parse_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("<html>proxy error</html>")
            .create();

        let err = client(&server).extract_job_record("text").unwrap_err();
        assert!(matches!(err, GeminiError::Parse(_)));
    }

    #[test]
    fn test_network_failure_keeps_source() {
        let options = GeminiOptions::new("test-key")
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2));
        let err = GeminiClient::new(options)
            .unwrap()
            .extract_job_record("text")
            .unwrap_err();

        assert!(matches!(err, GeminiError::Network(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
