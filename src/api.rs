//! NewsAPI client: request building and multi-page aggregation.
//!
//! # Architecture
//!
//! - [`Transport`]: Core trait for issuing one HTTP GET and returning the body
//! - [`ReqwestTransport`]: Production transport backed by `reqwest`
//! - [`NewsFetcher`]: Turns a [`FetchRequest`] into one GET per page and
//!   concatenates the results
//!
//! # Paging
//!
//! Pages are requested one at a time, `1..=page_count`, each finishing
//! before the next starts. The first failure ends the fetch and every
//! article collected so far is dropped. There are no retries.

use crate::error::{FetchError, Result, TransportError};
use crate::models::{ApiResponse, Article, FetchRequest, Mode};
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Default upstream host.
pub const NEWSAPI_BASE_URL: &str = "https://newsapi.org";

/// Articles per page. This is the maximum NewsAPI allows.
pub const PAGE_SIZE: u32 = 100;

/// Trait for issuing a single HTTP GET.
///
/// Implementors return the response body on a 2xx status and a
/// [`TransportError`] for anything else.
pub trait Transport {
    async fn get(&self, url: &Url) -> std::result::Result<String, TransportError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    #[instrument(level = "debug", skip_all)]
    async fn get(&self, url: &Url) -> std::result::Result<String, TransportError> {
        let t0 = Instant::now();
        // reqwest errors render the request URL, which carries the API key.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;
        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Received response"
        );

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: truncate_for_log(&body, 300),
            });
        }
        Ok(body)
    }
}

/// Fetches articles from NewsAPI through a [`Transport`].
#[derive(Debug)]
pub struct NewsFetcher<T> {
    transport: T,
    base_url: Url,
}

impl<T> NewsFetcher<T>
where
    T: Transport,
{
    /// Create a fetcher pointed at [`NEWSAPI_BASE_URL`].
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: Url::parse(NEWSAPI_BASE_URL).expect("NEWSAPI_BASE_URL is a valid URL"),
        }
    }

    /// Point the fetcher at a different upstream host.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Run one fetch: validate, then request pages `1..=page_count` in order.
    ///
    /// # Returns
    ///
    /// All articles in page order then in-page order, or the first error.
    /// An empty vector is a successful fetch that matched nothing.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Validation`] before any request is sent
    /// - [`FetchError::Transport`], [`FetchError::Upstream`] or
    ///   [`FetchError::MalformedResponse`] for the first page that fails
    #[instrument(level = "info", skip_all, fields(mode = request.mode.name(), pages = request.page_count))]
    pub async fn fetch(&self, request: FetchRequest) -> Result<Vec<Article>> {
        validate(&request)?;

        let t0 = Instant::now();
        let mut articles = Vec::new();
        for page in 1..=request.page_count {
            let batch = self.fetch_page(&request, page).await?;
            articles.extend(batch);
        }

        info!(
            count = articles.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetch complete"
        );
        Ok(articles)
    }

    #[instrument(level = "debug", skip(self, request))]
    async fn fetch_page(&self, request: &FetchRequest, page: u32) -> Result<Vec<Article>> {
        let url = self.page_url(request, page);
        debug!(url = %redacted(&url), "Requesting page");

        let body = self.transport.get(&url).await.map_err(|source| {
            warn!(page, error = %source, "Page request failed");
            FetchError::Transport { page, source }
        })?;

        let response: ApiResponse = serde_json::from_str(&body).map_err(|source| {
            warn!(
                page,
                error = %source,
                body_preview = %truncate_for_log(&body, 300),
                "Response is not a NewsAPI body"
            );
            FetchError::MalformedResponse { page, source }
        })?;

        if response.status != "ok" {
            let message = response
                .message
                .unwrap_or_else(|| format!("NewsAPI returned status \"{}\"", response.status));
            warn!(page, code = ?response.code, %message, "NewsAPI reported an error");
            return Err(FetchError::Upstream {
                page,
                code: response.code,
                message,
            });
        }

        let articles: Vec<Article> = response
            .articles
            .unwrap_or_default()
            .into_iter()
            .map(Article::from)
            .collect();
        debug!(
            page,
            count = articles.len(),
            total_results = ?response.totalResults,
            "Parsed page"
        );
        Ok(articles)
    }

    /// Build the GET URL for one page of `request`.
    fn page_url(&self, request: &FetchRequest, page: u32) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", url.path().trim_end_matches('/'), request.mode.path());
        url.set_path(&path);

        {
            let mut params = url.query_pairs_mut();
            params
                .append_pair("apiKey", request.api_key.expose())
                .append_pair("language", request.language.trim())
                .append_pair("pageSize", &PAGE_SIZE.to_string())
                .append_pair("page", &page.to_string());

            match &request.mode {
                Mode::Everything { query } => {
                    params.append_pair("q", query.trim());
                }
                Mode::TopHeadlines { category, country } => {
                    if let Some(category) = category {
                        params.append_pair("category", category.as_str());
                    }
                    if let Some(country) = country {
                        params.append_pair("country", country.as_str());
                    }
                }
            }
        }
        url
    }
}

/// Reject requests that must not reach the network.
fn validate(request: &FetchRequest) -> Result<()> {
    if request.api_key.is_empty() {
        return Err(FetchError::Validation("missing API key".to_string()));
    }
    if let Mode::Everything { query } = &request.mode {
        if query.trim().is_empty() {
            return Err(FetchError::Validation("missing search query".to_string()));
        }
    }
    if request.language.trim().is_empty() {
        return Err(FetchError::Validation("missing language".to_string()));
    }
    if request.page_count == 0 {
        return Err(FetchError::Validation("page count must be at least 1".to_string()));
    }
    Ok(())
}

/// Copy of `url` with the `apiKey` value masked, for logging.
fn redacted(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apiKey" { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked
}
