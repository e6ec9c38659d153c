//! Discovery orchestration.
//!
//! Flow: compile rules → run all adapters → merge + dedupe → if the run
//! is empty under an explicitly configured remote constraint, relax the
//! remote rule once and re-run. Lever and the Greenhouse API fetch
//! concurrently; the Greenhouse HTML fallback is gated on the API
//! variant returning zero raw results for the whole run.

pub mod dedupe;
pub mod greenhouse;
pub mod lever;
pub mod stats;

use tracing::{info, warn};

use crate::config::SourcesConfig;
use crate::fetch::Fetcher;
use crate::filters::FilterRuleSet;
use crate::models::Posting;

pub use stats::{DiscoveryStats, SourceStats};

/// Postings plus counters produced by one adapter pass.
#[derive(Debug, Default)]
pub(crate) struct AdapterRun {
    pub(crate) postings: Vec<Posting>,
    pub(crate) stats: SourceStats,
}

impl AdapterRun {
    pub(crate) fn absorb(&mut self, other: AdapterRun) {
        self.postings.extend(other.postings);
        self.stats.absorb(other.stats);
    }
}

/// Which state the retry controller finished in. `Relaxed` means the
/// first pass came back empty and the remote rule was widened for a
/// single re-run; there is no further relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Normal,
    Relaxed,
}

/// The result of one discovery run.
#[derive(Debug)]
pub struct DiscoveryOutcome {
    pub postings: Vec<Posting>,
    pub stats: DiscoveryStats,
    pub mode: RunMode,
}

/// Discovers, filters, and deduplicates postings from every configured
/// source. Never fails: unreachable sources degrade to zero postings.
pub async fn discover_jobs<F: Fetcher + ?Sized>(
    fetcher: &F,
    config: &SourcesConfig,
) -> DiscoveryOutcome {
    let rules = FilterRuleSet::compile(&config.filters);

    let (postings, stats) = run_discovery(fetcher, config, &rules).await;
    if !postings.is_empty() || !rules.remote_configured() {
        info!("{stats}");
        return DiscoveryOutcome {
            postings,
            stats,
            mode: RunMode::Normal,
        };
    }

    // Degenerate zero-result run with an explicit remote constraint:
    // the most common cause is an over-narrow remote keyword list, so
    // retry exactly once with the remote rule widened to diagnose.
    warn!("no postings matched with the remote filter; retrying once without the remote constraint");
    let relaxed = rules.relaxed();
    let (postings, stats) = run_discovery(fetcher, config, &relaxed).await;
    if stats.total_after_dedupe > 0 {
        info!(
            "found {} postings without the remote filter; consider broadening remote_keywords (currently {:?})",
            stats.total_after_dedupe,
            rules.remote_words()
        );
    }
    info!("{stats}");
    DiscoveryOutcome {
        postings,
        stats,
        mode: RunMode::Relaxed,
    }
}

/// One full adapter sweep under the given rule set.
async fn run_discovery<F: Fetcher + ?Sized>(
    fetcher: &F,
    config: &SourcesConfig,
    rules: &FilterRuleSet,
) -> (Vec<Posting>, DiscoveryStats) {
    let (lever_run, gh_api_run) = tokio::join!(
        lever::discover(fetcher, &config.lever_companies, rules),
        greenhouse::discover_api(fetcher, &config.greenhouse_boards, rules),
    );

    // The HTML variant only runs when the API path looks unavailable
    // (zero raw results across all boards), to keep fragile DOM
    // extraction off the hot path.
    let gh_html_run = if gh_api_run.stats.raw == 0 {
        greenhouse::discover_html(fetcher, &config.greenhouse_boards, rules).await
    } else {
        AdapterRun::default()
    };

    let mut merged = Vec::new();
    let lever_stats = lever_run.stats;
    let gh_api_stats = gh_api_run.stats;
    let gh_html_stats = gh_html_run.stats;
    merged.extend(lever_run.postings);
    merged.extend(gh_api_run.postings);
    merged.extend(gh_html_run.postings);

    let postings = dedupe::dedupe(merged);
    let stats = DiscoveryStats {
        lever: lever_stats,
        greenhouse_api: gh_api_stats,
        greenhouse_html: gh_html_stats,
        total_after_dedupe: postings.len(),
    };
    (postings, stats)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::FilterConfig;
    use crate::fetch::testing::StaticFetcher;
    use crate::models::SourceKind;

    const LEVER_ACME: &str = "https://api.lever.co/v0/postings/acme?mode=json";
    const GH_API_GLOBEX: &str = "https://boards-api.greenhouse.io/v1/boards/globex/jobs";

    fn sources(filters: FilterConfig) -> SourcesConfig {
        SourcesConfig {
            filters,
            lever_companies: vec!["acme".to_string()],
            greenhouse_boards: vec!["https://boards.greenhouse.io/globex".to_string()],
        }
    }

    fn lever_payload() -> serde_json::Value {
        json!([
            {
                "text": "Software Engineer, Remote",
                "hostedUrl": "https://jobs.lever.co/acme/1",
                "categories": {"location": "Remote", "team": "Platform"}
            },
            {
                "text": "VP of Engineering",
                "hostedUrl": "https://jobs.lever.co/acme/2",
                "categories": {"location": "Remote", "team": "Leadership"}
            }
        ])
    }

    #[tokio::test]
    async fn test_default_filters_keep_engineer_drop_vp() {
        let fetcher = StaticFetcher::new().with_json(LEVER_ACME, lever_payload());
        let config = SourcesConfig {
            lever_companies: vec!["acme".to_string()],
            ..SourcesConfig::default()
        };
        let outcome = discover_jobs(&fetcher, &config).await;

        assert_eq!(outcome.mode, RunMode::Normal);
        assert_eq!(outcome.postings.len(), 1);
        assert_eq!(outcome.postings[0].title, "Software Engineer, Remote");
        assert_eq!(outcome.stats.lever.raw, 2);
        assert_eq!(outcome.stats.lever.kept, 1);
        assert_eq!(outcome.stats.total_after_dedupe, 1);
    }

    #[tokio::test]
    async fn test_cross_source_dedupe_prefers_first_seen() {
        let shared_url = "https://boards.greenhouse.io/globex/jobs/5";
        let fetcher = StaticFetcher::new()
            .with_json(
                LEVER_ACME,
                json!([{
                    "text": "Test Engineer",
                    "hostedUrl": shared_url,
                    "categories": {"location": "Remote"}
                }]),
            )
            .with_json(
                GH_API_GLOBEX,
                json!({"jobs": [{
                    "title": "Test Engineer",
                    "absolute_url": shared_url,
                    "location": {"name": "Remote"}
                }]}),
            );
        let outcome = discover_jobs(&fetcher, &sources(FilterConfig::default())).await;

        assert_eq!(outcome.stats.lever.kept, 1);
        assert_eq!(outcome.stats.greenhouse_api.kept, 1);
        assert_eq!(outcome.stats.total_after_dedupe, 1, "same URL collapses");
        assert_eq!(outcome.postings[0].source, SourceKind::Lever, "adapter order is stable");
    }

    #[tokio::test]
    async fn test_html_fallback_skipped_when_api_has_raw_results() {
        // The HTML board would yield a posting, but the API answered,
        // so the scraping variant must never be consulted.
        let fetcher = StaticFetcher::new()
            .with_json(
                GH_API_GLOBEX,
                json!({"jobs": [{
                    "title": "Recruiter",
                    "absolute_url": "https://boards.greenhouse.io/globex/jobs/1",
                    "location": {"name": "Remote"}
                }]}),
            )
            .with_html(
                "https://boards.greenhouse.io/globex",
                r#"<div class="opening"><a href="/globex/jobs/2">QA Engineer</a></div><div>Remote</div>"#,
            );
        let config = SourcesConfig {
            greenhouse_boards: vec!["https://boards.greenhouse.io/globex".to_string()],
            ..SourcesConfig::default()
        };
        let outcome = discover_jobs(&fetcher, &config).await;

        assert_eq!(outcome.stats.greenhouse_api.raw, 1);
        assert_eq!(outcome.stats.greenhouse_html, SourceStats::default());
        assert!(outcome.postings.is_empty(), "Recruiter fails the role rule");
    }

    #[tokio::test]
    async fn test_html_fallback_runs_when_api_is_empty() {
        let fetcher = StaticFetcher::new().with_html(
            "https://boards.greenhouse.io/globex",
            r#"<div class="opening"><a href="/globex/jobs/2">QA Engineer</a></div><div>Remote</div>"#,
        );
        let config = SourcesConfig {
            greenhouse_boards: vec!["https://boards.greenhouse.io/globex".to_string()],
            ..SourcesConfig::default()
        };
        let outcome = discover_jobs(&fetcher, &config).await;

        assert_eq!(outcome.stats.greenhouse_html.raw, 1);
        assert_eq!(outcome.postings.len(), 1);
        assert_eq!(outcome.postings[0].source, SourceKind::GreenhouseHtml);
    }

    #[tokio::test]
    async fn test_empty_run_with_remote_constraint_relaxes_once() {
        let fetcher = StaticFetcher::new().with_json(
            LEVER_ACME,
            json!([
                {
                    "text": "QA Engineer",
                    "hostedUrl": "https://jobs.lever.co/acme/1",
                    "categories": {"location": "Berlin"}
                },
                {
                    "text": "Test Engineer",
                    "hostedUrl": "https://jobs.lever.co/acme/2",
                    "categories": {"location": "Austin, TX"}
                },
                {
                    "text": "SDET",
                    "hostedUrl": "https://jobs.lever.co/acme/3",
                    "categories": {"location": "London"}
                }
            ]),
        );
        let config = SourcesConfig {
            filters: FilterConfig {
                remote_keywords: vec!["hybrid-only-site".to_string()],
                ..FilterConfig::default()
            },
            lever_companies: vec!["acme".to_string()],
            ..SourcesConfig::default()
        };
        let outcome = discover_jobs(&fetcher, &config).await;

        assert_eq!(outcome.mode, RunMode::Relaxed);
        assert_eq!(outcome.postings.len(), 3, "all three survive without the remote rule");
        assert_eq!(outcome.stats.total_after_dedupe, 3);
    }

    #[tokio::test]
    async fn test_empty_run_without_remote_constraint_does_not_retry() {
        let fetcher = StaticFetcher::new().with_json(
            LEVER_ACME,
            json!([{
                "text": "Office Manager",
                "hostedUrl": "https://jobs.lever.co/acme/1",
                "categories": {"location": "Remote"}
            }]),
        );
        let config = SourcesConfig {
            lever_companies: vec!["acme".to_string()],
            ..SourcesConfig::default()
        };
        let outcome = discover_jobs(&fetcher, &config).await;

        assert_eq!(outcome.mode, RunMode::Normal);
        assert!(outcome.postings.is_empty());
    }

    #[tokio::test]
    async fn test_relaxed_run_can_still_be_empty() {
        let fetcher = StaticFetcher::new();
        let config = SourcesConfig {
            filters: FilterConfig {
                remote_keywords: vec!["remote".to_string()],
                ..FilterConfig::default()
            },
            lever_companies: vec!["acme".to_string()],
            ..SourcesConfig::default()
        };
        let outcome = discover_jobs(&fetcher, &config).await;

        assert_eq!(outcome.mode, RunMode::Relaxed, "relaxation still fires");
        assert!(outcome.postings.is_empty());
        assert_eq!(outcome.stats.total_after_dedupe, 0);
    }
}
