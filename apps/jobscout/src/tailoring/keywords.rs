//! Keyword extraction from free text.
//!
//! The frequency ranking here drives every downstream tailoring step,
//! so it must be deterministic: ties are broken by first-encounter
//! order (a stable sort over the first-seen sequence).

use std::collections::HashMap;

/// Connective words that carry no signal in a job description.
const STOPWORDS: [&str; 11] = [
    "and", "or", "the", "with", "for", "to", "in", "on", "of", "a", "an",
];

/// Generic hiring vocabulary excluded from skill-flavored extraction.
const SKILL_STOPLIST: [&str; 6] = [
    "experience",
    "years",
    "software",
    "developer",
    "engineering",
    "engineer",
];

/// Punctuation stripped from token edges before counting.
const EDGE_PUNCTUATION: &str = ".,:;()[]";

pub const DEFAULT_KEYWORD_LIMIT: usize = 15;
pub const DEFAULT_SKILL_LIMIT: usize = 20;

/// Candidate pool size when narrowing keywords down to skills.
const SKILL_CANDIDATE_POOL: usize = 60;

/// Tokenizes on whitespace, strips surrounding punctuation, lowercases,
/// drops stopwords and tokens of length 2 or less, and returns the top
/// `limit` tokens by descending frequency, ties in first-seen order.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for token in text.split_whitespace() {
        let word = token
            .trim_matches(|c: char| EDGE_PUNCTUATION.contains(c))
            .to_lowercase();
        if word.chars().count() <= 2 || STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        let count = counts.entry(word.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            (word, count)
        })
        .collect();
    // Stable: equal counts keep first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(limit).map(|(word, _)| word).collect()
}

/// Skill-flavored keywords: the frequency ranking minus generic hiring
/// vocabulary, caller-supplied extra stopwords, and anything containing
/// a digit ("3+" and "401k" are not skills).
pub fn extract_skills(text: &str, extra_stop: &[String], limit: usize) -> Vec<String> {
    let candidates = extract_keywords(text, SKILL_CANDIDATE_POOL);
    let mut skills = Vec::new();
    for keyword in candidates {
        if SKILL_STOPLIST.contains(&keyword.as_str()) {
            continue;
        }
        if extra_stop.iter().any(|stop| stop == &keyword) {
            continue;
        }
        if keyword.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }
        skills.push(keyword);
        if skills.len() >= limit {
            break;
        }
    }
    skills
}
