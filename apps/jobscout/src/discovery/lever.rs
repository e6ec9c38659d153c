//! Lever posting-API adapter.
//!
//! One JSON endpoint per configured company slug. Companies are fetched
//! concurrently and fail independently: a dead slug contributes zero
//! postings and a warning, never an aborted run.

use futures::future::join_all;
use serde::Deserialize;
use tracing::warn;

use crate::discovery::AdapterRun;
use crate::fetch::Fetcher;
use crate::filters::FilterRuleSet;
use crate::models::{Posting, SourceKind};

fn postings_url(company: &str) -> String {
    format!("https://api.lever.co/v0/postings/{company}?mode=json")
}

/// One record of the Lever postings payload. Only the fields the
/// pipeline reads; everything else is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeverPosting {
    #[serde(default)]
    text: String,
    hosted_url: Option<String>,
    apply_url: Option<String>,
    categories: Option<LeverCategories>,
}

#[derive(Debug, Default, Deserialize)]
struct LeverCategories {
    location: Option<String>,
    team: Option<String>,
}

pub async fn discover<F: Fetcher + ?Sized>(
    fetcher: &F,
    companies: &[String],
    rules: &FilterRuleSet,
) -> AdapterRun {
    let runs = join_all(
        companies
            .iter()
            .map(|company| discover_company(fetcher, company, rules)),
    )
    .await;

    let mut merged = AdapterRun::default();
    for run in runs {
        merged.absorb(run);
    }
    merged
}

async fn discover_company<F: Fetcher + ?Sized>(
    fetcher: &F,
    company: &str,
    rules: &FilterRuleSet,
) -> AdapterRun {
    let url = postings_url(company);
    let data = match fetcher.get_json(&url).await {
        Ok(data) => data,
        Err(err) => {
            warn!("lever fetch for '{company}' failed: {err}");
            return AdapterRun::default();
        }
    };

    let records: Vec<LeverPosting> = match serde_json::from_value(data) {
        Ok(records) => records,
        Err(err) => {
            warn!("lever payload for '{company}' did not parse: {err}");
            return AdapterRun::default();
        }
    };

    let mut run = AdapterRun::default();
    run.stats.raw = records.len();

    for record in records {
        let categories = record.categories.unwrap_or_default();
        let location = categories.location.unwrap_or_default();
        let url = record
            .hosted_url
            .or(record.apply_url)
            .unwrap_or_default();
        let company_name = categories
            .team
            .filter(|team| !team.is_empty())
            .unwrap_or_else(|| company.to_string());

        if !rules.retains(&record.text, &location) {
            continue;
        }
        run.postings.push(Posting {
            title: record.text,
            company: company_name,
            url,
            location,
            source: SourceKind::Lever,
        });
        run.stats.kept += 1;
    }
    run
}
