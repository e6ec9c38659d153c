//! URL-identity dedupe over the merged adapter output.

use std::collections::HashSet;

use crate::models::Posting;

/// Single streaming pass in first-seen order. A posting with an empty
/// URL has no identity and is dropped; a posting whose URL was already
/// emitted is a duplicate of the same opening and is dropped.
pub fn dedupe(postings: Vec<Posting>) -> Vec<Posting> {
    let mut seen: HashSet<String> = HashSet::with_capacity(postings.len());
    let mut out = Vec::with_capacity(postings.len());
    for posting in postings {
        if posting.url.is_empty() || !seen.insert(posting.url.clone()) {
            continue;
        }
        out.push(posting);
    }
    out
}
