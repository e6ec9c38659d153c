//! Job posting discovery and application tailoring.
//!
//! The pipeline discovers postings from ATS job boards (Lever's posting
//! API, Greenhouse's board API with an HTML fallback), filters them
//! against configured keyword rules, deduplicates by canonical URL, and
//! builds a tailored application package (resume text, cover letter,
//! keyword summary) per posting.
//!
//! Entry points: [`discover_jobs`] and [`build_application_package`].
//! Network access goes through the [`Fetcher`] trait; form submission,
//! login handling, and serving are out of scope.

pub mod ats;
pub mod config;
pub mod description;
pub mod discovery;
pub mod errors;
pub mod fetch;
pub mod filters;
pub mod models;
pub mod tailoring;

pub use ats::AtsKind;
pub use config::{Config, FilterConfig, SourcesConfig};
pub use description::fetch_job_description;
pub use discovery::{discover_jobs, DiscoveryOutcome, DiscoveryStats, RunMode, SourceStats};
pub use errors::PipelineError;
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use filters::FilterRuleSet;
pub use models::{Applicant, ApplicationPackage, BaseResume, JobMeta, Posting, SourceKind};
pub use tailoring::build_application_package;
