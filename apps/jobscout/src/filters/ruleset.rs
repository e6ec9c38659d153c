//! The compiled relevance rules for one discovery run.
//!
//! A `FilterRuleSet` is an explicit value handed into discovery and
//! filter calls. Rules are pure functions of their input text and hold
//! no posting state, so concurrent runs with different configurations
//! never interfere.

use crate::config::FilterConfig;
use crate::filters::pattern::{
    compile_rule, KeywordRule, DEFAULT_EXCLUDE_EXPR, DEFAULT_REMOTE_EXPR, DEFAULT_ROLE_EXPR,
};

#[derive(Debug, Clone)]
pub struct FilterRuleSet {
    role: KeywordRule,
    remote: KeywordRule,
    exclude: KeywordRule,
    entry: KeywordRule,
    remote_configured: bool,
    remote_words: Vec<String>,
}

impl FilterRuleSet {
    /// Compiles the four rules from configuration. The entry constraint
    /// with no phrases compiles to an always-true rule ("no extra
    /// constraint"), not to a documented default.
    pub fn compile(filters: &FilterConfig) -> Self {
        FilterRuleSet {
            role: compile_rule(&filters.include_keywords, DEFAULT_ROLE_EXPR),
            remote: compile_rule(&filters.remote_keywords, DEFAULT_REMOTE_EXPR),
            exclude: compile_rule(&filters.exclude_keywords, DEFAULT_EXCLUDE_EXPR),
            entry: compile_rule(&filters.entry_keywords, ""),
            remote_configured: !filters.remote_keywords.is_empty(),
            remote_words: filters.remote_keywords.clone(),
        }
    }

    /// A copy of this rule set with the remote rule widened to match
    /// everything. Used by the one-shot retry when a run comes back
    /// empty under an explicitly configured remote constraint.
    pub fn relaxed(&self) -> Self {
        FilterRuleSet {
            remote: KeywordRule::MatchAll,
            ..self.clone()
        }
    }

    /// A posting survives iff all four rules agree: the role rule
    /// matches the title, the remote rule matches title plus location,
    /// the exclude rule does NOT match the title, and the entry rule
    /// matches the title (or is inactive).
    pub fn retains(&self, title: &str, location: &str) -> bool {
        let title_and_location = format!("{title} {location}");
        self.role.is_match(title)
            && self.remote.is_match(&title_and_location)
            && !self.exclude.is_match(title)
            && self.entry.is_match(title)
    }

    /// Whether `remote_keywords` was explicitly configured (non-default).
    pub fn remote_configured(&self) -> bool {
        self.remote_configured
    }

    /// The configured remote phrases, for diagnostics.
    pub fn remote_words(&self) -> &[String] {
        &self.remote_words
    }
}
