use serde::{Deserialize, Serialize};

/// The applicant's reusable content library. Supplied externally and
/// read-only: tailoring reorders and selects from it per posting but
/// never modifies it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseResume {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_bullets: Vec<String>,
    #[serde(default)]
    pub project_bullets: Vec<String>,
    #[serde(default)]
    pub education_lines: Vec<String>,
}

/// The target posting a package is being built for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobMeta {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
}

/// The pipeline's final output for one posting. Built fresh every time,
/// never cached or shared across postings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationPackage {
    pub resume_text: String,
    pub cover_letter_text: String,
    pub keywords_summary: String,
}
