//! Card-style rendering of articles.
//!
//! Each article becomes one block:
//!
//! ```text
//! ### Title
//!
//! Description
//!
//! Read more: https://example.com/story
//! Published: 2024-01-01 00:00 UTC
//! ```

use crate::models::{Article, Mode};
use crate::utils::{display_timestamp, upcase};
use std::fmt::Write;

/// Shown in place of cards when a fetch succeeded but matched nothing.
pub const NO_ARTICLES: &str = "No articles found.";

/// Heading describing what was fetched.
pub fn heading(mode: &Mode) -> String {
    match mode {
        Mode::Everything { query } => format!("# Search results for \"{}\"", query.trim()),
        Mode::TopHeadlines { category, country } => {
            let mut heading = String::from("# Top headlines");
            if let Some(category) = category {
                write!(heading, ": {}", upcase(category.as_str())).unwrap();
            }
            if let Some(country) = country {
                write!(heading, " ({})", country.as_str().to_uppercase()).unwrap();
            }
            heading
        }
    }
}

/// Render `articles` as cards separated by a horizontal rule.
pub fn render(articles: &[Article]) -> String {
    if articles.is_empty() {
        return format!("{NO_ARTICLES}\n");
    }

    let mut out = String::new();
    for (i, article) in articles.iter().enumerate() {
        if i > 0 {
            out.push_str("\n---\n\n");
        }
        writeln!(out, "### {}\n", article.title).unwrap();
        writeln!(out, "{}\n", article.description).unwrap();
        writeln!(out, "Read more: {}", article.url).unwrap();
        writeln!(out, "Published: {}", display_timestamp(&article.published_at)).unwrap();
    }
    out
}
