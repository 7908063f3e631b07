//! # Headline Desk
//!
//! Browse current headlines or search articles from
//! [NewsAPI.org](https://newsapi.org) from the terminal.
//!
//! ## Usage
//!
//! ```sh
//! export NEWSAPI_KEY=...
//! headline_desk --category technology --country us
//! headline_desk --mode everything --query "Tesla" --pages 3 --format json
//! ```
//!
//! ## Architecture
//!
//! 1. **Input**: CLI flags become one immutable `FetchRequest`
//! 2. **Fetching**: `NewsFetcher` requests pages `1..=N` in order and stops at
//!    the first failure
//! 3. **Output**: Articles are printed as cards or JSON; errors go to stderr
//!
//! Logs are written to stderr so stdout only ever holds rendered results.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod error;
mod models;
mod outputs;
mod utils;

use api::{NewsFetcher, ReqwestTransport};
use cli::{Cli, OutputFormat};
use outputs::{cards, json};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let request = args.to_request();
    let heading = cards::heading(&request.mode);
    info!(
        mode = request.mode.name(),
        language = %request.language,
        pages = request.page_count,
        "Fetching articles"
    );

    let client = reqwest::Client::builder()
        .user_agent(concat!("headline_desk/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let fetcher =
        NewsFetcher::new(ReqwestTransport::new(client)).with_base_url(args.base_url.clone());
    let articles = match fetcher.fetch(request).await {
        Ok(articles) => articles,
        Err(e) => {
            error!(error = %e, page = ?e.page(), "Fetch failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match args.format {
        OutputFormat::Cards => {
            println!("{heading}\n");
            print!("{}", cards::render(&articles));
        }
        OutputFormat::Json => println!("{}", json::render(&articles)?),
    }

    let elapsed = start_time.elapsed();
    info!(
        count = articles.len(),
        millis = elapsed.as_millis() as u64,
        "Execution complete"
    );
    Ok(())
}
