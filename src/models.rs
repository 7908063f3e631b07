//! Data models for NewsAPI requests and responses.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Article`]: One rendered news card, built from an upstream article
//! - [`FetchRequest`]: Everything needed for one user-initiated fetch
//! - [`Mode`], [`Category`], [`Country`]: The filters a request can carry
//! - [`ApiResponse`] / [`RawArticle`]: The upstream wire format
//!
//! Wire types mirror the camelCase field names NewsAPI uses.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Description used when the upstream article has none.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// Language sent when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A news article as shown to the reader.
///
/// Built only from upstream fields; nothing is derived or computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// The article headline.
    pub title: String,
    /// Short summary, or [`DESCRIPTION_PLACEHOLDER`].
    pub description: String,
    /// Link to the full story.
    pub url: String,
    /// Publication timestamp exactly as the API sent it.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            description: raw
                .description
                .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string()),
            url: raw.url.unwrap_or_default(),
            published_at: raw.published_at.unwrap_or_default(),
        }
    }
}

/// Top-level body returned by both NewsAPI endpoints.
#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    /// `"ok"` on success, `"error"` otherwise.
    pub status: String,
    pub totalResults: Option<u64>,
    #[serde(default)]
    pub articles: Option<Vec<RawArticle>>,
    /// Machine-readable error code, e.g. `apiKeyInvalid`.
    pub code: Option<String>,
    /// Human-readable error text.
    pub message: Option<String>,
}

/// An article as it appears on the wire. Every field may be absent or null.
#[derive(Debug, Deserialize)]
pub struct RawArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// Generates a filter enum whose variants map to fixed NewsAPI parameter values.
macro_rules! api_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
        pub enum $name {
            $(
                #[value(name = $code)]
                $variant,
            )+
        }

        impl $name {
            /// The value NewsAPI expects for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

api_code_enum! {
    /// Top-headlines category filter.
    Category {
        Business => "business",
        Entertainment => "entertainment",
        General => "general",
        Health => "health",
        Science => "science",
        Sports => "sports",
        Technology => "technology",
    }
}

api_code_enum! {
    /// Top-headlines country filter (ISO 3166-1 alpha-2, lowercase).
    Country {
        Ae => "ae", Ar => "ar", At => "at", Au => "au", Be => "be", Bg => "bg",
        Br => "br", Ca => "ca", Ch => "ch", Cn => "cn", Co => "co", Cu => "cu",
        Cz => "cz", De => "de", Eg => "eg", Fr => "fr", Gb => "gb", Gr => "gr",
        Hk => "hk", Hu => "hu", Id => "id", Ie => "ie", Il => "il", In => "in",
        It => "it", Jp => "jp", Kr => "kr", Lt => "lt", Lv => "lv", Ma => "ma",
        Mx => "mx", My => "my", Ng => "ng", Nl => "nl", No => "no", Nz => "nz",
        Ph => "ph", Pl => "pl", Pt => "pt", Ro => "ro", Rs => "rs", Ru => "ru",
        Sa => "sa", Se => "se", Sg => "sg", Si => "si", Sk => "sk", Th => "th",
        Tr => "tr", Tw => "tw", Ua => "ua", Us => "us", Ve => "ve", Za => "za",
    }
}

/// Which endpoint to query, with the filters that endpoint accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Curated current headlines (`/v2/top-headlines`).
    TopHeadlines {
        category: Option<Category>,
        country: Option<Country>,
    },
    /// Keyword search across all articles (`/v2/everything`).
    Everything { query: String },
}

impl Mode {
    /// Endpoint path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Mode::TopHeadlines { .. } => "/v2/top-headlines",
            Mode::Everything { .. } => "/v2/everything",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::TopHeadlines { .. } => "top-headlines",
            Mode::Everything { .. } => "everything",
        }
    }
}

/// NewsAPI key. Never printed: both `Debug` and `Display` are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl FromStr for ApiKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Everything one fetch needs. Built once per user action and passed by value.
///
/// # Examples
///
/// ```ignore
/// let request = FetchRequest::everything(ApiKey::new(key), "Tesla").with_page_count(3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub api_key: ApiKey,
    pub mode: Mode,
    pub language: String,
    pub page_count: u32,
}

impl FetchRequest {
    pub fn new(api_key: ApiKey, mode: Mode) -> Self {
        Self {
            api_key,
            mode,
            language: DEFAULT_LANGUAGE.to_string(),
            page_count: 1,
        }
    }

    pub fn top_headlines(
        api_key: ApiKey,
        category: Option<Category>,
        country: Option<Country>,
    ) -> Self {
        Self::new(api_key, Mode::TopHeadlines { category, country })
    }

    pub fn everything(api_key: ApiKey, query: impl Into<String>) -> Self {
        Self::new(
            api_key,
            Mode::Everything {
                query: query.into(),
            },
        )
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_from_complete_raw() {
        let json = r#"{
            "source": {"id": null, "name": "Example"},
            "author": "Jane Doe",
            "title": "A",
            "description": "B",
            "url": "http://x",
            "urlToImage": null,
            "publishedAt": "2024-01-01T00:00:00Z",
            "content": "..."
        }"#;
        let raw: RawArticle = serde_json::from_str(json).unwrap();
        let article = Article::from(raw);

        assert_eq!(article.title, "A");
        assert_eq!(article.description, "B");
        assert_eq!(article.url, "http://x");
        assert_eq!(article.published_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_missing_description_uses_placeholder() {
        let with = r#"{"title":"A","description":"B","url":"http://x","publishedAt":"t"}"#;
        let without = r#"{"title":"A","url":"http://x","publishedAt":"t"}"#;
        let null = r#"{"title":"A","description":null,"url":"http://x","publishedAt":"t"}"#;

        let with = Article::from(serde_json::from_str::<RawArticle>(with).unwrap());
        let without = Article::from(serde_json::from_str::<RawArticle>(without).unwrap());
        let null = Article::from(serde_json::from_str::<RawArticle>(null).unwrap());

        assert_eq!(without.description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(null, without);
        assert_eq!(without.title, with.title);
        assert_eq!(without.url, with.url);
        assert_eq!(without.published_at, with.published_at);
    }

    #[test]
    fn test_article_serializes_camel_case_timestamp() {
        let article = Article {
            title: "A".to_string(),
            description: "B".to_string(),
            url: "http://x".to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains(r#""publishedAt":"2024-01-01T00:00:00Z""#));
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#;
        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "error");
        assert_eq!(response.code.as_deref(), Some("apiKeyInvalid"));
        assert!(response.articles.is_none());
    }

    #[test]
    fn test_filter_codes() {
        assert_eq!(Category::Business.as_str(), "business");
        assert_eq!(Country::Gb.to_string(), "gb");
        assert_eq!(Country::from_str("us", true).unwrap(), Country::Us);
        assert!(Country::from_str("None", true).is_err());
    }

    #[test]
    fn test_api_key_is_redacted() {
        let request = FetchRequest::everything(ApiKey::new("secret-key-123"), "Tesla");
        let debug = format!("{:?}", request);
        assert!(!debug.contains("secret-key-123"));
        assert_eq!(ApiKey::new("secret-key-123").to_string(), "***");
    }

    #[test]
    fn test_fetch_request_defaults() {
        let request =
            FetchRequest::top_headlines(ApiKey::new("k"), Some(Category::Science), None);
        assert_eq!(request.language, "en");
        assert_eq!(request.page_count, 1);
        assert_eq!(request.mode.path(), "/v2/top-headlines");
        assert_eq!(
            FetchRequest::everything(ApiKey::new("k"), "q").mode.path(),
            "/v2/everything"
        );
    }
}
