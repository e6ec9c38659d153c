//! Skills display line for the tailored resume.

use crate::tailoring::keywords::extract_skills;

/// How many skills the display line carries at most.
pub const SKILLS_LINE_LIMIT: usize = 18;

/// Scores each declared base skill by membership in the description's
/// skill-flavored keyword set (1 if mentioned, 0 otherwise), stable
/// sorts by descending score then alphabetically among ties, and joins
/// the top `limit` as one comma-separated line.
pub fn build_skills_line(base_skills: &[String], job_description: &str, limit: usize) -> String {
    let jd_skills = extract_skills(job_description, &[], limit * 2);
    let jd_set: Vec<String> = jd_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut scored: Vec<(usize, &String)> = base_skills
        .iter()
        .map(|skill| {
            let score = usize::from(jd_set.contains(&skill.to_lowercase()));
            (score, skill)
        })
        .collect();
    scored.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| a.1.to_lowercase().cmp(&b.1.to_lowercase()))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, skill)| skill.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
