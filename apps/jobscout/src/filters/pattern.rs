//! Keyword pattern compilation.
//!
//! User-supplied phrases are literals, not a pattern language: each one
//! is escaped, then the set is combined with alternation and word
//! boundaries so "test" matches "Test Engineer" but not "latest".

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Default role seed: QA/testing titles plus the generic software
/// engineer title, as documented for the supported boards.
pub const DEFAULT_ROLE_EXPR: &str = r"\b(qa|quality|test|sdet|software\s+engineer)\b";

/// Default remote seed covering the common phrasings on board listings.
pub const DEFAULT_REMOTE_EXPR: &str = r"\b(remote|work\s*from\s*home|anywhere)\b";

/// Default seniority exclusions.
pub const DEFAULT_EXCLUDE_EXPR: &str = r"\b(senior\s+director|vp|principal)\b";

/// A compiled, case-insensitive matching rule over arbitrary text.
///
/// `MatchAll` is the degenerate rule used when a rule is inactive (the
/// entry constraint with no phrases, or the remote rule after the
/// one-shot relaxation).
#[derive(Debug, Clone)]
pub enum KeywordRule {
    Pattern(Regex),
    MatchAll,
}

impl KeywordRule {
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            KeywordRule::Pattern(re) => re.is_match(text),
            KeywordRule::MatchAll => true,
        }
    }

    /// True when the rule matches every input.
    pub fn is_match_all(&self) -> bool {
        matches!(self, KeywordRule::MatchAll)
    }
}

/// Compiles a phrase list into a [`KeywordRule`].
///
/// Blank phrases are dropped. If no usable phrase remains, the rule
/// falls back to `default_expr`; an empty `default_expr` means the rule
/// is inactive and matches everything. A phrase set whose anchored form
/// fails to compile (should not occur given literal escaping, but is
/// tolerated) degrades to the raw alternation without boundary anchors.
pub fn compile_rule(phrases: &[String], default_expr: &str) -> KeywordRule {
    let parts: Vec<String> = phrases
        .iter()
        .map(|phrase| phrase.trim())
        .filter(|phrase| !phrase.is_empty())
        .map(regex::escape)
        .collect();

    if parts.is_empty() {
        if default_expr.is_empty() {
            return KeywordRule::MatchAll;
        }
        let re = case_insensitive(default_expr)
            .expect("default keyword expressions are valid patterns");
        return KeywordRule::Pattern(re);
    }

    let alternation = parts.join("|");
    match case_insensitive(&format!(r"\b({alternation})\b")) {
        Ok(re) => KeywordRule::Pattern(re),
        Err(err) => {
            warn!("keyword phrases rejected word-boundary anchoring ({err}); using raw alternation");
            let re = case_insensitive(&alternation)
                .expect("escaped alternation is a valid pattern");
            KeywordRule::Pattern(re)
        }
    }
}

fn case_insensitive(expr: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(expr).case_insensitive(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_phrase_list_uses_default() {
        let rule = compile_rule(&[], DEFAULT_ROLE_EXPR);
        assert!(rule.is_match("Senior Software Engineer"));
        assert!(rule.is_match("QA Analyst"));
        assert!(!rule.is_match("Account Executive"));
    }

    #[test]
    fn test_blank_phrases_fall_back_to_default() {
        let phrases = vec!["   ".to_string(), String::new()];
        let rule = compile_rule(&phrases, DEFAULT_ROLE_EXPR);
        assert!(rule.is_match("SDET II"));
    }

    #[test]
    fn test_empty_phrases_and_empty_default_matches_everything() {
        let rule = compile_rule(&[], "");
        assert!(rule.is_match_all());
        assert!(rule.is_match("anything at all"));
        assert!(rule.is_match(""));
    }

    #[test]
    fn test_phrases_match_case_insensitively() {
        let rule = compile_rule(&["backend".to_string()], "");
        assert!(rule.is_match("BACKEND Engineer"));
        assert!(rule.is_match("Backend engineer"));
    }

    #[test]
    fn test_whole_word_boundary_enforced() {
        let rule = compile_rule(&["test".to_string()], "");
        assert!(rule.is_match("Test Engineer"));
        assert!(!rule.is_match("Latest Platform Engineer"), "no match inside a larger word");
    }

    #[test]
    fn test_multi_word_phrase_matches_as_a_unit() {
        let rule = compile_rule(&["staff engineer".to_string()], "");
        assert!(rule.is_match("Staff Engineer, Infrastructure"));
        assert!(!rule.is_match("Staff Accountant"));
    }

    #[test]
    fn test_metacharacters_are_treated_literally() {
        // '/' and '.' carry no special meaning after escaping
        let rule = compile_rule(&["qa/test".to_string()], "");
        assert!(rule.is_match("QA/Test Lead"));
        let rule = compile_rule(&["node.js".to_string()], "");
        assert!(rule.is_match("Node.js Developer"));
        assert!(!rule.is_match("Nodexjs Developer"), "'.' must not act as a wildcard");
    }

    #[test]
    fn test_default_remote_expr_covers_spaced_phrasings() {
        let rule = compile_rule(&[], DEFAULT_REMOTE_EXPR);
        assert!(rule.is_match("Work from home"));
        assert!(rule.is_match("workfromhome ok"));
        assert!(rule.is_match("Anywhere (US)"));
    }

    #[test]
    fn test_default_exclude_expr_blocks_seniority_titles() {
        let rule = compile_rule(&[], DEFAULT_EXCLUDE_EXPR);
        assert!(rule.is_match("VP of Engineering"));
        assert!(rule.is_match("Principal Engineer"));
        assert!(!rule.is_match("Software Engineer"));
    }
}
