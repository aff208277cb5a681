//! Response normalization. Repairs the model's JSON into the shape the
//! renderer and the file naming expect.

use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::response::ModelResponse;
use crate::models::resume::ResumeData;

pub const DEFAULT_COMPANY: &str = "Unknown_Company";
pub const DEFAULT_JOB_TITLE: &str = "Job";

/// Closing block every cover letter must end with.
pub const SIGNATURE_BLOCK: &str = "Sincerely,\nTommy Delta";
const SIGNATURE_NAME: &str = "Tommy Delta";
/// How many trailing characters are searched for the signature name.
const SIGNATURE_TAIL_CHARS: usize = 50;

/// Model output after every repair has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    /// Filename-safe company token.
    pub company: String,
    /// Filename-safe job title token.
    pub job_title: String,
    pub cover_letter_text: String,
    pub resume: ResumeData,
    /// Flattened skills line. `None` suppresses the section.
    pub skills: Option<String>,
}

/// Parses the model's raw text. Anything that is not JSON is terminal.
pub fn parse_model_response(raw: &str) -> Result<ModelResponse, AppError> {
    serde_json::from_str(raw).map_err(|e| {
        debug!("Model output is not valid JSON: {e}");
        AppError::InvalidGeneratedContent
    })
}

/// Parses and normalizes in one step.
pub fn normalize_model_output(raw: &str) -> Result<NormalizedResponse, AppError> {
    Ok(normalize(parse_model_response(raw)?))
}

pub fn normalize(response: ModelResponse) -> NormalizedResponse {
    let company = sanitize_component(response.company.as_deref().unwrap_or(DEFAULT_COMPANY));
    let job_title =
        sanitize_component(response.job_title.as_deref().unwrap_or(DEFAULT_JOB_TITLE));

    let cover_letter_text = enforce_signature(response.cover_letter_text.as_deref().unwrap_or(""));

    let resume = response.resume_data.unwrap_or_default();
    let skills = resume
        .skills
        .as_ref()
        .map(|s| s.to_text())
        .filter(|s| !s.trim().is_empty());

    NormalizedResponse {
        company,
        job_title,
        cover_letter_text,
        resume,
        skills,
    }
}

/// Turns a free-form name into a filename token: spaces become `_`, then
/// everything outside `[A-Za-z0-9_-]` is dropped. May return an empty string.
pub fn sanitize_component(raw: &str) -> String {
    raw.replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect()
}

/// Guarantees the letter closes with the signature block.
///
/// Only the last 50 characters of the trimmed letter are inspected. When the
/// name is already there the input is returned as-is.
pub fn enforce_signature(text: &str) -> String {
    let trimmed = text.trim();
    if tail_chars(trimmed, SIGNATURE_TAIL_CHARS).contains(SIGNATURE_NAME) {
        return text.to_string();
    }

    warn!("Cover letter tail lacks signature; appending it");
    format!("{trimmed}\n\n{SIGNATURE_BLOCK}")
}

/// The last `n` characters of `s` (all of `s` when shorter).
fn tail_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    let start = s
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skills::Skills;

    #[test]
    fn test_signature_appended_to_bare_letter() {
        assert_eq!(
            enforce_signature("Dear Team, I am excited."),
            "Dear Team, I am excited.\n\nSincerely,\nTommy Delta"
        );
    }

    #[test]
    fn test_signature_appended_lands_in_tail() {
        let letters = [
            "",
            "Dear Hiring Manager,\n\nI love code.\n\nBest regards,\n[Missing Name]",
            "   Ending without signature.   \n",
        ];
        for letter in letters {
            let out = enforce_signature(letter);
            assert!(out.ends_with(SIGNATURE_BLOCK));
            assert!(tail_chars(&out, SIGNATURE_TAIL_CHARS).contains("Tommy Delta"));
        }
    }

    #[test]
    fn test_existing_signature_left_untouched() {
        let letter = "Dear Team,\n\nThanks.\n\nSincerely, \nTommy Delta\n";
        assert_eq!(enforce_signature(letter), letter);
    }

    #[test]
    fn test_signature_outside_tail_is_duplicated() {
        let letter = format!(
            "Tommy Delta here. {}",
            "I am writing to express my interest in the role. ".repeat(3)
        );
        let out = enforce_signature(&letter);
        assert!(out.ends_with("\n\nSincerely,\nTommy Delta"));
        assert_eq!(out.matches("Tommy Delta").count(), 2);
    }

    #[test]
    fn test_tail_counts_characters_not_bytes() {
        let s = "é".repeat(60);
        assert_eq!(tail_chars(&s, 50).chars().count(), 50);
        assert_eq!(tail_chars("short", 50), "short");
    }

    #[test]
    fn test_sanitize_replaces_spaces_and_drops_punctuation() {
        assert_eq!(sanitize_component("Tech Corp"), "Tech_Corp");
        assert_eq!(
            sanitize_component("Sr. Engineer (C++/Rust), Platform-Team!"),
            "Sr_Engineer_CRust_Platform-Team"
        );
        assert_eq!(sanitize_component("!!!"), "");
    }

    #[test]
    fn test_sanitize_output_is_filename_safe() {
        let inputs = ["Café Déjà Vu", "a/b\\c:d*e?f\"g<h>i|j", "tab\there", "R&D @ Acme, Inc."];
        for input in inputs {
            let out = sanitize_component(input);
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
                "unsafe output {out:?} for {input:?}"
            );
        }
    }

    #[test]
    fn test_defaults_for_missing_names() {
        let normalized = normalize(ModelResponse::default());
        assert_eq!(normalized.company, "Unknown_Company");
        assert_eq!(normalized.job_title, "Job");
        assert_eq!(normalized.cover_letter_text, "\n\nSincerely,\nTommy Delta");
        assert!(normalized.skills.is_none());
    }

    #[test]
    fn test_skills_flattened_once() {
        let response = ModelResponse {
            resume_data: Some(ResumeData {
                skills: Some(Skills::Map(vec![
                    ("a".into(), "X".into()),
                    ("b".into(), "Y".into()),
                ])),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(normalize(response).skills.as_deref(), Some("X, Y"));
    }

    #[test]
    fn test_empty_skills_suppressed() {
        let response = ModelResponse {
            resume_data: Some(ResumeData {
                skills: Some(Skills::List(vec![])),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(normalize(response).skills.is_none());
    }

    #[test]
    fn test_malformed_json_is_invalid_generated_content() {
        let err = normalize_model_output(r#"{"company": "Tech Corp", "resume_da"#).unwrap_err();
        assert!(matches!(err, AppError::InvalidGeneratedContent));
    }

    #[test]
    fn test_fenced_json_is_not_repaired() {
        let err = normalize_model_output("```json\n{}\n```").unwrap_err();
        assert!(matches!(err, AppError::InvalidGeneratedContent));
    }

    #[test]
    fn test_end_to_end_normalization() {
        let raw = r#"{
            "company": "Tech Corp",
            "job_title": "Python Developer",
            "cover_letter_text": "Dear Hiring Manager,\n\nI love code.",
            "resume_data": {"skills": ["Python", "SQL"]}
        }"#;
        let normalized = normalize_model_output(raw).unwrap();
        assert_eq!(normalized.company, "Tech_Corp");
        assert_eq!(normalized.job_title, "Python_Developer");
        assert!(normalized.cover_letter_text.ends_with(SIGNATURE_BLOCK));
        assert_eq!(normalized.skills.as_deref(), Some("Python, SQL"));
    }
}
