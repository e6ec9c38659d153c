//! Required/preferred qualification extraction from a job description.

use serde::Serialize;

/// Header synonyms that open the required-qualifications section.
const REQUIRED_HEADERS: [&str; 4] = [
    "requirements",
    "qualifications",
    "what you'll need",
    "must have",
];

/// Header synonyms that open the nice-to-have section.
const PREFERRED_HEADERS: [&str; 4] = ["nice to have", "preferred", "bonus", "good to have"];

/// Leading bullet glyphs stripped from description lines.
const BULLET_GLYPHS: &str = "\u{2022}-* \t";

/// A content line must have more than this many words to count as a
/// qualification rather than a fragment.
const MIN_WORDS: usize = 3;

/// A content line at or past this length is prose, not a bullet.
const MAX_CHARS: usize = 220;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Qualifications {
    pub required: Vec<String>,
    pub preferred: Vec<String>,
}

#[derive(Clone, Copy)]
enum Bucket {
    Required,
    Preferred,
}

/// Scans the description line by line, switching buckets on recognized
/// section headers. Lines before the first header are discarded; lines
/// inside a section are kept when they pass the length heuristics.
pub fn extract_qualifications(job_description: &str) -> Qualifications {
    let mut result = Qualifications::default();
    let mut bucket: Option<Bucket> = None;

    for raw_line in job_description.lines() {
        if raw_line.trim().is_empty() {
            continue;
        }
        let line = raw_line
            .trim_matches(|c: char| BULLET_GLYPHS.contains(c))
            .trim();
        let lowered = line.to_lowercase();

        if REQUIRED_HEADERS.iter().any(|h| lowered.contains(h)) {
            bucket = Some(Bucket::Required);
            continue;
        }
        if PREFERRED_HEADERS.iter().any(|h| lowered.contains(h)) {
            bucket = Some(Bucket::Preferred);
            continue;
        }

        if line.split_whitespace().count() < MIN_WORDS || line.chars().count() >= MAX_CHARS {
            continue;
        }
        match bucket {
            Some(Bucket::Required) => result.required.push(line.to_string()),
            Some(Bucket::Preferred) => result.preferred.push(line.to_string()),
            None => {}
        }
    }
    result
}
