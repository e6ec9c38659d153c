use serde::{Deserialize, Serialize};

/// The job-board family a posting was discovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Lever,
    GreenhouseApi,
    GreenhouseHtml,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Lever => "lever",
            SourceKind::GreenhouseApi => "greenhouse_api",
            SourceKind::GreenhouseHtml => "greenhouse_html",
        }
    }
}

/// One discovered job opening. The URL is the canonical identity:
/// two postings with the same URL are the same opening regardless of
/// which source produced them. Immutable once discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub title: String,
    pub company: String,
    pub url: String,
    pub location: String,
    pub source: SourceKind,
}
