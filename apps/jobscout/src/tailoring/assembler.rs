//! Application package assembly.
//!
//! Composes the final text artifacts from the tailoring primitives.
//! Everything here derives from read-only inputs; `BaseResume` and
//! `Applicant` are never modified.

use crate::models::{Applicant, ApplicationPackage, BaseResume, JobMeta};
use crate::tailoring::bullets::tailor_bullets;
use crate::tailoring::cover_letter::{generate_cover_letter, MAX_HIGHLIGHTS};
use crate::tailoring::keywords::{extract_skills, DEFAULT_SKILL_LIMIT};
use crate::tailoring::skills::{build_skills_line, SKILLS_LINE_LIMIT};

pub const MAX_EXPERIENCE_BULLETS: usize = 8;
pub const MAX_PROJECT_BULLETS: usize = 4;

const SUMMARY_HEADER: &str = "Summary";
const SKILLS_HEADER: &str = "Skills";
const EXPERIENCE_HEADER: &str = "Experience";
const PROJECTS_HEADER: &str = "Projects";
const EDUCATION_HEADER: &str = "Education";

/// Builds the tailored resume text: a header block with the name and
/// contact line, then Summary, Skills, Experience, Projects, and
/// Education in that fixed order. A section with no content is omitted
/// entirely; no header ever appears without a body.
pub fn assemble_resume_text(
    applicant: &Applicant,
    resume: &BaseResume,
    job_description: &str,
) -> String {
    let experience: Vec<String> = tailor_bullets(&resume.experience_bullets, job_description)
        .into_iter()
        .take(MAX_EXPERIENCE_BULLETS)
        .collect();
    let projects: Vec<String> = tailor_bullets(&resume.project_bullets, job_description)
        .into_iter()
        .take(MAX_PROJECT_BULLETS)
        .collect();
    let skills_line = build_skills_line(&resume.skills, job_description, SKILLS_LINE_LIMIT);

    let mut sections = vec![format!("{}\n{}\n", applicant.name, applicant.contact_line())];
    if !resume.summary.is_empty() {
        sections.push(format!("{SUMMARY_HEADER}\n- {}", resume.summary.trim()));
    }
    if !skills_line.is_empty() {
        sections.push(format!("{SKILLS_HEADER}\n{skills_line}"));
    }
    if !experience.is_empty() {
        sections.push(format!("{EXPERIENCE_HEADER}\n{}", bullet_block(&experience)));
    }
    if !projects.is_empty() {
        sections.push(format!("{PROJECTS_HEADER}\n{}", bullet_block(&projects)));
    }
    if !resume.education_lines.is_empty() {
        sections.push(format!(
            "{EDUCATION_HEADER}\n{}",
            bullet_block(&resume.education_lines)
        ));
    }

    sections.join("\n\n").trim().to_string()
}

fn bullet_block(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the full package for one posting: tailored resume text, a
/// cover letter carrying the top-ranked experience and project bullets,
/// and a comma-joined keyword summary.
pub fn build_application_package(
    applicant: &Applicant,
    resume: &BaseResume,
    job: &JobMeta,
) -> ApplicationPackage {
    let resume_text = assemble_resume_text(applicant, resume, &job.description);

    let mut combined = resume.experience_bullets.clone();
    combined.extend(resume.project_bullets.iter().cloned());
    let highlights: Vec<String> = tailor_bullets(&combined, &job.description)
        .into_iter()
        .take(MAX_HIGHLIGHTS)
        .collect();

    let company = if job.company.is_empty() {
        "the company"
    } else {
        job.company.as_str()
    };
    let role = if job.role.is_empty() {
        "the role"
    } else {
        job.role.as_str()
    };
    let cover_letter_text = generate_cover_letter(&applicant.name, company, role, &highlights);

    let keywords_summary =
        extract_skills(&job.description, &[], DEFAULT_SKILL_LIMIT).join(", ");

    ApplicationPackage {
        resume_text,
        cover_letter_text,
        keywords_summary,
    }
}
