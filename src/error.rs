//! Error types for a NewsAPI fetch.
//!
//! Every variant is terminal for the fetch that produced it: nothing is
//! retried and nothing is recovered locally. The `Display` output of each
//! variant is the message shown to the user.

use thiserror::Error;

/// Failure of a single HTTP GET against the upstream API.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Why a fetch produced no articles.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Required input was missing; no request was sent.
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Transport error on page {page}: {source}")]
    Transport {
        page: u32,
        #[source]
        source: TransportError,
    },

    /// The API answered but reported `status != "ok"`.
    #[error("{message}")]
    Upstream {
        page: u32,
        code: Option<String>,
        message: String,
    },

    #[error("Malformed response on page {page}: {source}")]
    MalformedResponse {
        page: u32,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Page on which the fetch stopped, if it got as far as the network.
    pub fn page(&self) -> Option<u32> {
        match self {
            FetchError::Validation(_) => None,
            FetchError::Transport { page, .. }
            | FetchError::Upstream { page, .. }
            | FetchError::MalformedResponse { page, .. } => Some(*page),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
