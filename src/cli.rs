//! Command-line interface definitions for Headline Desk.
//!
//! Every fetch is described entirely by these arguments. The API key may
//! come from the environment instead of a flag so it stays out of shell
//! history; it is only ever held in memory.

use crate::models::{ApiKey, Category, Country, DEFAULT_LANGUAGE, FetchRequest};
use clap::{Parser, ValueEnum};

/// Largest page count accepted on the command line.
pub const MAX_PAGES: u32 = 5;

/// Which NewsAPI endpoint to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Current headlines, optionally filtered by category and country
    TopHeadlines,
    /// Free-text search across all articles
    Everything,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cards,
    Json,
}

/// Command-line arguments for Headline Desk.
///
/// # Examples
///
/// ```sh
/// # Business headlines from the US
/// headline_desk --category business --country us
///
/// # Three pages of search results
/// headline_desk --mode everything -q Tesla -p 3
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// NewsAPI.org API key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: ApiKey,

    /// Endpoint to query
    #[arg(long, value_enum, default_value_t = ModeArg::TopHeadlines)]
    pub mode: ModeArg,

    /// Search term (everything mode)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Category filter (top-headlines mode)
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// Country filter (top-headlines mode)
    #[arg(long, value_enum)]
    pub country: Option<Country>,

    /// Language of returned articles
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Number of pages of 100 articles to fetch
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGES as i64))]
    pub pages: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Cards)]
    pub format: OutputFormat,

    /// Base URL of the NewsAPI service
    #[arg(long, env = "NEWSAPI_BASE_URL", default_value = crate::api::NEWSAPI_BASE_URL)]
    pub base_url: url::Url,
}

impl Cli {
    /// Build the request for this invocation.
    ///
    /// Filters that do not apply to the selected mode are dropped here; a
    /// missing query is left for the fetcher to reject.
    pub fn to_request(&self) -> FetchRequest {
        let api_key = self.api_key.clone();
        let request = match self.mode {
            ModeArg::TopHeadlines => {
                FetchRequest::top_headlines(api_key, self.category, self.country)
            }
            ModeArg::Everything => {
                FetchRequest::everything(api_key, self.query.clone().unwrap_or_default())
            }
        };

        request
            .with_language(self.language.clone())
            .with_page_count(self.pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mode;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["headline_desk", "--api-key", "k"]);

        assert_eq!(cli.mode, ModeArg::TopHeadlines);
        assert_eq!(cli.language, "en");
        assert_eq!(cli.pages, 1);
        assert_eq!(cli.format, OutputFormat::Cards);
        assert_eq!(cli.base_url.as_str(), "https://newsapi.org/");

        let request = cli.to_request();
        assert_eq!(
            request.mode,
            Mode::TopHeadlines {
                category: None,
                country: None
            }
        );
        assert_eq!(request.api_key.expose(), "k");
        assert!(!format!("{cli:?}").contains("\"k\""));
    }

    #[test]
    fn test_cli_top_headlines_filters() {
        let cli = Cli::parse_from([
            "headline_desk",
            "--api-key",
            "k",
            "-c",
            "business",
            "--country",
            "gb",
            "-q",
            "ignored",
        ]);

        assert_eq!(
            cli.to_request().mode,
            Mode::TopHeadlines {
                category: Some(Category::Business),
                country: Some(Country::Gb)
            }
        );
    }

    #[test]
    fn test_cli_everything_mode() {
        let cli = Cli::parse_from([
            "headline_desk",
            "--api-key",
            "k",
            "--mode",
            "everything",
            "-q",
            "Tesla",
            "-c",
            "sports",
            "-l",
            "fr",
            "-p",
            "3",
            "-f",
            "json",
        ]);

        let request = cli.to_request();
        assert_eq!(
            request.mode,
            Mode::Everything {
                query: "Tesla".to_string()
            }
        );
        assert_eq!(request.language, "fr");
        assert_eq!(request.page_count, 3);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_everything_without_query_builds_empty_query() {
        let cli = Cli::parse_from(["headline_desk", "--api-key", "k", "--mode", "everything"]);
        assert_eq!(
            cli.to_request().mode,
            Mode::Everything {
                query: String::new()
            }
        );
    }

    #[test]
    fn test_cli_rejects_out_of_range_pages() {
        for pages in ["0", "6"] {
            let result = Cli::try_parse_from(["headline_desk", "--api-key", "k", "-p", pages]);
            assert!(result.is_err(), "pages={pages} should be rejected");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_country() {
        let result =
            Cli::try_parse_from(["headline_desk", "--api-key", "k", "--country", "None"]);
        assert!(result.is_err());
    }
}
