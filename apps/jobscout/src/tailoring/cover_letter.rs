//! Deterministic cover letter template.

/// Highlights carried into the letter at most.
pub const MAX_HIGHLIGHTS: usize = 5;

/// Renders the letter: greeting naming the company, an intent line
/// naming the role, up to five highlight bullets in the order given,
/// and a closing naming the applicant. No scoring happens here; the
/// caller supplies highlights already ranked.
pub fn generate_cover_letter(
    name: &str,
    company: &str,
    role: &str,
    highlights: &[String],
) -> String {
    let mut lines = vec![
        format!("Dear Hiring Team at {company},"),
        format!("I'm excited to apply for the {role} role. My background aligns with your needs:"),
    ];
    for highlight in highlights.iter().take(MAX_HIGHLIGHTS) {
        lines.push(format!("- {highlight}"));
    }
    lines.push("I'd welcome the opportunity to discuss how I can contribute.".to_string());
    lines.push(format!("Sincerely,\n{name}"));
    lines.join("\n")
}
