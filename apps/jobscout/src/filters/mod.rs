pub mod pattern;
pub mod ruleset;

pub use pattern::KeywordRule;
pub use ruleset::FilterRuleSet;
