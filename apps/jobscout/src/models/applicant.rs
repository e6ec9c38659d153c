use serde::{Deserialize, Serialize};

/// Contact identity for the person applying. Supplied externally and
/// read-only to the pipeline; tailoring derives from it, never writes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Applicant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

impl Applicant {
    /// Joins the non-empty contact fields into a single display line.
    pub fn contact_line(&self) -> String {
        [
            self.email.as_str(),
            self.phone.as_str(),
            self.location.as_str(),
            self.linkedin.as_str(),
            self.github.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" | ")
    }
}
