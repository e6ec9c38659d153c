//! Informational keyword fit score for a posting.

/// Fraction of the desired keywords found in the text
/// (case-insensitive substring match), 0.0 when none are configured.
/// Purely informational: logged alongside each posting, never used to
/// filter.
pub fn keyword_fit_score(text: &str, desired: &[String]) -> f32 {
    if desired.is_empty() {
        return 0.0;
    }
    let lowered = text.to_lowercase();
    let hits = desired
        .iter()
        .filter(|keyword| lowered.contains(&keyword.to_lowercase()))
        .count();
    hits as f32 / desired.len() as f32
}
