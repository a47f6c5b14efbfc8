mod classifier;
mod extractor;
mod fetcher;
mod output;
mod taxonomy;

use std::time::Duration;

use clap::Parser;
use tracing::info;

use classifier::{Classifier, MiniLmEmbedder};
use fetcher::SearchQuery;

/// Delay between facilities while classifying, to bound the CPU burst.
const CLASSIFY_DELAY: Duration = Duration::from_millis(500);

#[derive(Parser)]
#[command(
    name = "earth911_scraper",
    about = "Earth911 facility scraper with embedding-based materials classification"
)]
struct Cli {
    /// Material type to search for
    #[arg(long, default_value = "Electronics")]
    what: String,
    /// Postal code to search around
    #[arg(long = "zip", default_value = "10001")]
    zip: String,
    /// Max search radius in miles
    #[arg(long, default_value_t = 100)]
    max_distance: u32,
    /// Max facility entries to extract
    #[arg(short = 'n', long, default_value_t = 3)]
    limit: usize,
    /// Candidate items considered per materials line
    #[arg(long, default_value_t = 3)]
    top_k: usize,
    /// Minimum cosine similarity for a match
    #[arg(long, default_value_t = 0.6)]
    threshold: f32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the JSON array; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let query = SearchQuery {
        what: cli.what,
        zip: cli.zip,
        max_distance: cli.max_distance,
    };
    let html = fetcher::fetch_results(fetcher::SEARCH_URL, &query).await?;

    let facilities = extractor::extract_facilities(&html, cli.limit);
    if facilities.is_empty() {
        println!(
            "No facilities found. The website may require JavaScript rendering \
             or has changed its structure."
        );
        std::process::exit(1);
    }
    info!("Extracted {} facility entries", facilities.len());

    let embedder = MiniLmEmbedder::new()?;
    let classifier = Classifier::new(&embedder, cli.top_k, cli.threshold)?;

    let records = output::build_records(facilities, &classifier, CLASSIFY_DELAY).await?;

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
