//! Greenhouse adapters: the board JSON API and the HTML board fallback.
//!
//! The API variant is preferred; the HTML variant exists because some
//! boards block the API, and it only runs when the API pass produced
//! zero raw results for the whole run (see `discovery::run_discovery`).

use futures::future::join_all;
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::discovery::AdapterRun;
use crate::fetch::Fetcher;
use crate::filters::FilterRuleSet;
use crate::models::{Posting, SourceKind};

/// Accepts both bare board slugs and full board URLs: for a URL the
/// last path segment is the slug.
fn board_slug(board: &str) -> String {
    let trimmed = board.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.contains("://") {
        trimmed.rsplit('/').next().unwrap_or("").to_string()
    } else {
        trimmed.to_string()
    }
}

fn api_url(slug: &str) -> String {
    format!("https://boards-api.greenhouse.io/v1/boards/{slug}/jobs")
}

// ────────────────────────────────────────────────────────────────────────────
// API variant
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GreenhouseJobs {
    #[serde(default)]
    jobs: Vec<GreenhouseJob>,
}

#[derive(Debug, Deserialize)]
struct GreenhouseJob {
    title: Option<String>,
    absolute_url: Option<String>,
    location: Option<GreenhouseLocation>,
}

#[derive(Debug, Deserialize)]
struct GreenhouseLocation {
    name: Option<String>,
}

pub async fn discover_api<F: Fetcher + ?Sized>(
    fetcher: &F,
    boards: &[String],
    rules: &FilterRuleSet,
) -> AdapterRun {
    let runs = join_all(
        boards
            .iter()
            .map(|board| discover_api_board(fetcher, board, rules)),
    )
    .await;

    let mut merged = AdapterRun::default();
    for run in runs {
        merged.absorb(run);
    }
    merged
}

async fn discover_api_board<F: Fetcher + ?Sized>(
    fetcher: &F,
    board: &str,
    rules: &FilterRuleSet,
) -> AdapterRun {
    let slug = board_slug(board);
    if slug.is_empty() {
        return AdapterRun::default();
    }

    let url = api_url(&slug);
    let data = match fetcher.get_json(&url).await {
        Ok(data) => data,
        Err(err) => {
            warn!("greenhouse API fetch for '{slug}' failed: {err}");
            return AdapterRun::default();
        }
    };
    let payload: GreenhouseJobs = match serde_json::from_value(data) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("greenhouse API payload for '{slug}' did not parse: {err}");
            return AdapterRun::default();
        }
    };

    let mut run = AdapterRun::default();
    run.stats.raw = payload.jobs.len();

    for job in payload.jobs {
        let title = job.title.unwrap_or_default().trim().to_string();
        let location = job
            .location
            .and_then(|l| l.name)
            .unwrap_or_default()
            .trim()
            .to_string();
        let url = job.absolute_url.unwrap_or_default();

        if !rules.retains(&title, &location) {
            continue;
        }
        run.postings.push(Posting {
            title,
            company: slug.clone(),
            url,
            location,
            source: SourceKind::GreenhouseApi,
        });
        run.stats.kept += 1;
    }
    run
}

// ────────────────────────────────────────────────────────────────────────────
// HTML variant
// ────────────────────────────────────────────────────────────────────────────

const PRIMARY_SELECTOR: &str = ".opening a";
const FALLBACK_SELECTOR: &str =
    "section#jobs a[href*='/jobs/'], a[href*='/jobs/'][data-mapped], .jobs a[href*='/jobs/']";

pub async fn discover_html<F: Fetcher + ?Sized>(
    fetcher: &F,
    boards: &[String],
    rules: &FilterRuleSet,
) -> AdapterRun {
    let runs = join_all(
        boards
            .iter()
            .map(|board| discover_html_board(fetcher, board, rules)),
    )
    .await;

    let mut merged = AdapterRun::default();
    for run in runs {
        merged.absorb(run);
    }
    merged
}

async fn discover_html_board<F: Fetcher + ?Sized>(
    fetcher: &F,
    board: &str,
    rules: &FilterRuleSet,
) -> AdapterRun {
    let html = match fetcher.get_html(board).await {
        Ok(html) => html,
        Err(err) => {
            warn!("greenhouse board fetch for '{board}' failed: {err}");
            return AdapterRun::default();
        }
    };
    parse_board(&html, board, rules)
}

/// Synchronous HTML extraction. Kept separate from the fetch so the
/// parsed document never lives across an await point (`scraper` types
/// are not `Send`).
fn parse_board(html: &str, board: &str, rules: &FilterRuleSet) -> AdapterRun {
    let primary = Selector::parse(PRIMARY_SELECTOR).expect("primary selector is valid");
    let fallback = Selector::parse(FALLBACK_SELECTOR).expect("fallback selector is valid");

    let document = Html::parse_document(html);
    let mut anchors: Vec<ElementRef> = document.select(&primary).collect();
    if anchors.is_empty() {
        anchors = document.select(&fallback).collect();
    }

    let company = board_slug(board);
    let mut run = AdapterRun::default();
    run.stats.raw = anchors.len();

    for anchor in anchors {
        let title = element_text(&anchor);
        let url = anchor
            .value()
            .attr("href")
            .map(|href| resolve_url(board, href))
            .unwrap_or_default();
        let location = sibling_location(&anchor)
            .or_else(|| {
                anchor
                    .value()
                    .attr("data-location")
                    .map(|attr| attr.trim().to_string())
                    .filter(|attr| !attr.is_empty())
            })
            .unwrap_or_default();

        if !rules.retains(&title, &location) {
            continue;
        }
        run.postings.push(Posting {
            title,
            company: company.clone(),
            url,
            location,
            source: SourceKind::GreenhouseHtml,
        });
        run.stats.kept += 1;
    }
    run
}

/// All visible text of an element, trimmed and whitespace-collapsed.
fn element_text(el: &ElementRef<'_>) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The location heuristic: the first element following the anchor's
/// parent, mirroring board layouts where the opening row is followed by
/// a location row.
fn sibling_location(anchor: &ElementRef<'_>) -> Option<String> {
    let parent = anchor.parent()?;
    let mut node = parent.next_sibling();
    while let Some(current) = node {
        if let Some(element) = ElementRef::wrap(current) {
            let text = element_text(&element);
            return if text.is_empty() { None } else { Some(text) };
        }
        node = current.next_sibling();
    }
    None
}

/// Resolves a possibly-relative href against the board URL. An absolute
/// href passes through untouched; an unparseable base degrades to the
/// raw href.
fn resolve_url(base: &str, href: &str) -> String {
    if href.is_empty() {
        return String::new();
    }
    match Url::parse(base) {
        Ok(base_url) => base_url
            .join(href)
            .map(|resolved| resolved.to_string())
            .unwrap_or_else(|_| href.to_string()),
        Err(_) => href.to_string(),
    }
}
