use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static RESULT_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result-item").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".result-title").unwrap());
static ADDRESS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result-address").unwrap());
static UPDATED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result-updated").unwrap());
static MATERIALS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".result-materials").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const UPDATED_LABEL: &str = "Last updated: ";

/// One facility listing as scraped from the results page. Fields default to
/// empty string when the corresponding element is missing.
#[derive(Debug, Clone)]
pub struct Facility {
    pub business_name: String,
    pub last_update_date: String,
    pub street_address: String,
    pub raw_materials: String,
}

/// Select up to `limit` facility entries from the search results HTML, in
/// document order.
pub fn extract_facilities(html: &str, limit: usize) -> Vec<Facility> {
    let document = Html::parse_document(html);

    document
        .select(&RESULT_ITEM)
        .take(limit)
        .map(|entry| {
            let updated = field_text(&entry, &UPDATED);
            let last_update_date = updated
                .strip_prefix(UPDATED_LABEL)
                .unwrap_or(&updated)
                .to_string();

            Facility {
                business_name: field_text(&entry, &TITLE),
                last_update_date,
                street_address: field_text(&entry, &ADDRESS),
                // Newlines delimit individual materials downstream, so only
                // the ends are trimmed here.
                raw_materials: block_text(&entry, &MATERIALS),
            }
        })
        .collect()
}

/// First match's text content with whitespace runs collapsed to single
/// spaces. Empty string when the element is missing.
fn field_text(entry: &ElementRef<'_>, selector: &Selector) -> String {
    entry
        .select(selector)
        .next()
        .map(|el| {
            let text: String = el.text().collect();
            WS_RE.replace_all(text.trim(), " ").to_string()
        })
        .unwrap_or_default()
}

/// First match's text content, trimmed at the ends only.
fn block_text(entry: &ElementRef<'_>, selector: &Selector) -> String {
    entry
        .select(selector)
        .next()
        .map(|el| {
            let text: String = el.text().collect();
            text.trim().to_string()
        })
        .unwrap_or_default()
}

// ── Tests ──
