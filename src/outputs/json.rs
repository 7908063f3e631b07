//! JSON output of a fetch result.

use crate::models::Article;
use tracing::{info, instrument};

/// Serialize `articles` as a pretty-printed JSON array.
///
/// Field names follow the upstream API (`publishedAt`), so the output can be
/// fed to tools that already understand NewsAPI articles.
#[instrument(level = "info", skip_all, fields(count = articles.len()))]
pub fn render(articles: &[Article]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(articles)?;
    info!(bytes = json.len(), "Rendered JSON");
    Ok(json)
}
