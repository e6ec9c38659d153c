//! Bullet reprioritization against a job description.

use std::collections::HashSet;

use crate::tailoring::keywords::{extract_keywords, DEFAULT_KEYWORD_LIMIT};

/// Reorders bullets by how many description keywords each one contains
/// (case-insensitive substring match), highest first. This is a ranking,
/// not a filter: the result is a permutation of the input, equal scores
/// keep their original relative order, and the caller truncates.
pub fn tailor_bullets(bullets: &[String], job_description: &str) -> Vec<String> {
    let keywords: HashSet<String> = extract_keywords(job_description, DEFAULT_KEYWORD_LIMIT)
        .into_iter()
        .collect();

    let mut scored: Vec<(usize, &String)> = bullets
        .iter()
        .map(|bullet| {
            let lowered = bullet.to_lowercase();
            let score = keywords
                .iter()
                .filter(|keyword| lowered.contains(keyword.as_str()))
                .count();
            (score, bullet)
        })
        .collect();
    // Stable: equal scores keep input order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, bullet)| bullet.clone()).collect()
}
