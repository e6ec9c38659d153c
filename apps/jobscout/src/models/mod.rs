pub mod applicant;
pub mod posting;
pub mod resume;

pub use applicant::Applicant;
pub use posting::{Posting, SourceKind};
pub use resume::{ApplicationPackage, BaseResume, JobMeta};
