use serde::Deserialize;

use crate::models::skills::Skills;
use crate::models::{lenient, lenient_list, text_list};

/// Root record of the tailored résumé as produced by the model.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResumeData {
    #[serde(default, deserialize_with = "lenient")]
    pub contact_info: Option<ContactInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Option<Skills>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub linkedin: Option<String>,
}

impl ContactInfo {
    /// Present contact values in header order: email, phone, location, linkedin.
    pub fn contact_parts(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location, &self.linkedin]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .filter(|v| !v.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub institution: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub graduation_date: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub dates: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub dates: Option<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub bullets: Vec<String>,
}
