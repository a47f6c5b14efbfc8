use anyhow::{Context, Result};
use tracing::info;

pub const SEARCH_URL: &str = "https://search.earth911.com/";

const USER_AGENT: &str = "Mozilla/5.0";

/// Query parameters for the facility search endpoint.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub what: String,
    pub zip: String,
    pub max_distance: u32,
}

/// Fetch the search results page and return its HTML body.
///
/// Fails on transport errors and non-2xx responses; there is no retry and no
/// meaningful partial result, so the caller lets the error terminate the run.
pub async fn fetch_results(base_url: &str, query: &SearchQuery) -> Result<String> {
    let client = reqwest::Client::new();
    let max_distance = query.max_distance.to_string();

    info!(
        "Fetching search results: {} (what={}, where={})",
        base_url, query.what, query.zip
    );
    let response = client
        .get(base_url)
        .query(&[
            ("what", query.what.as_str()),
            ("where", query.zip.as_str()),
            ("list_filter", "all"),
            ("max_distance", max_distance.as_str()),
        ])
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .context("Failed to fetch search results")?;

    if !response.status().is_success() {
        anyhow::bail!("Non-success status {} from {}", response.status(), base_url);
    }

    response.text().await.context("Failed to read response body")
}

// ── Tests ──
