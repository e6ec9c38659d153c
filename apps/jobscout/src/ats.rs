//! ATS vendor detection.
//!
//! The submission step itself lives outside this crate; knowing which
//! vendor hosts a posting URL is still pipeline logic, dispatched on an
//! explicit tag rather than probing page structure.

use std::fmt;

/// The ATS vendor hosting a posting URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtsKind {
    Greenhouse,
    Lever,
    Workday,
}

impl AtsKind {
    /// Identifies the vendor from the posting URL, or `None` when no
    /// supported vendor matches.
    pub fn detect(url: &str) -> Option<AtsKind> {
        if url.contains("greenhouse.io") {
            Some(AtsKind::Greenhouse)
        } else if url.contains("jobs.lever.co") {
            Some(AtsKind::Lever)
        } else if url.contains("workday") {
            Some(AtsKind::Workday)
        } else {
            None
        }
    }
}

impl fmt::Display for AtsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AtsKind::Greenhouse => "greenhouse",
            AtsKind::Lever => "lever",
            AtsKind::Workday => "workday",
        };
        f.write_str(name)
    }
}
