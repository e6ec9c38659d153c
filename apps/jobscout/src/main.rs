use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobscout::ats::AtsKind;
use jobscout::config::{Config, SourcesConfig};
use jobscout::description::{fetch_job_description, MAX_DESCRIPTION_CHARS};
use jobscout::discovery::discover_jobs;
use jobscout::fetch::HttpFetcher;
use jobscout::models::{Applicant, BaseResume, JobMeta};
use jobscout::tailoring::{build_application_package, keyword_fit_score};

/// Discover relevant postings and write a tailored application package
/// per posting. Submission is left to the operator.
#[derive(Debug, Parser)]
#[command(name = "jobscout", version, about)]
struct Args {
    /// Applicant contact details (JSON)
    #[arg(long, default_value = "application.json")]
    applicant: PathBuf,

    /// Base resume content library (JSON)
    #[arg(long, default_value = "base_resume.json")]
    resume: PathBuf,

    /// Board sources and filter keywords (JSON)
    #[arg(long, default_value = "sources.json")]
    sources: PathBuf,

    /// Maximum packages to build per run
    #[arg(long, default_value_t = 3)]
    max: usize,

    /// Directory the packages are written into
    #[arg(long, default_value = "packages")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobscout v{}", env!("CARGO_PKG_VERSION"));

    let applicant: Applicant = load_json(&args.applicant)?;
    let base_resume: BaseResume = load_json(&args.resume)?;
    let sources = SourcesConfig::load(&args.sources)
        .with_context(|| format!("failed to load sources from {}", args.sources.display()))?;

    let fetcher = HttpFetcher::new(Duration::from_secs(config.request_timeout_secs));

    let outcome = discover_jobs(&fetcher, &sources).await;
    if outcome.postings.is_empty() {
        info!("no postings discovered; adjust the sources file");
        return Ok(());
    }

    // Consider more than we intend to package: descriptions can be
    // unreachable, and unreachable postings are skipped.
    let candidates = outcome.postings.iter().take(args.max * 3);

    let mut packaged = 0usize;
    for posting in candidates {
        if packaged >= args.max {
            break;
        }

        let description =
            match fetch_job_description(&fetcher, &posting.url, MAX_DESCRIPTION_CHARS).await {
                Some(description) => description,
                None => {
                    warn!("skipping '{}': no readable description", posting.title);
                    continue;
                }
            };

        let fit = keyword_fit_score(
            &format!("{} {} {description}", posting.title, posting.company),
            &sources.filters.include_keywords,
        );
        let vendor = AtsKind::detect(&posting.url)
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        info!(
            "packaging '{}' at {} from {} (ats={vendor}, fit={fit:.2})",
            posting.title,
            posting.company,
            posting.source.as_str()
        );

        let job = JobMeta {
            company: posting.company.clone(),
            role: posting.title.clone(),
            description,
        };
        let package = build_application_package(&applicant, &base_resume, &job);

        let dir = args.out_dir.join(slugify(&format!(
            "{}-{}",
            posting.company, posting.title
        )));
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join("resume.txt"), &package.resume_text)?;
        std::fs::write(dir.join("cover_letter.txt"), &package.cover_letter_text)?;
        std::fs::write(dir.join("keywords.txt"), &package.keywords_summary)?;
        packaged += 1;
    }

    info!(
        "built {packaged} package(s) under {}",
        args.out_dir.display()
    );
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Directory-safe name: alphanumerics kept, everything else collapsed
/// to single dashes.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
