//! Per-posting tailoring: keyword extraction, bullet reprioritization,
//! skills-line construction, qualification extraction, and the final
//! package assembly. Every function here is pure and synchronous;
//! postings can be tailored concurrently with no shared state.

pub mod assembler;
pub mod bullets;
pub mod cover_letter;
pub mod fit;
pub mod keywords;
pub mod qualifications;
pub mod skills;

pub use assembler::{assemble_resume_text, build_application_package};
pub use bullets::tailor_bullets;
pub use cover_letter::generate_cover_letter;
pub use fit::keyword_fit_score;
pub use keywords::{extract_keywords, extract_skills};
pub use qualifications::{extract_qualifications, Qualifications};
pub use skills::build_skills_line;
