use serde::Deserialize;

use crate::models::lenient;
use crate::models::resume::ResumeData;

/// Top-level object the model is asked to return.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover_letter_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub resume_data: Option<ResumeData>,
}
