//! Quote source contract and HTTP implementation.
//!
//! # Responsibility
//! - Define the single-call fetch contract the prompt cache consumes.
//! - Decode the remote JSON array leniently (entries may lack fields).
//!
//! # Invariants
//! - One attempt per call; no retry or backoff.
//! - Malformed entries degrade to blank text and are filtered downstream,
//!   they do not fail the whole fetch.

use crate::model::quote::Quote;
use log::{info, warn};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Fixed remote endpoint returning a JSON array of quote records.
pub const QUOTES_ENDPOINT: &str = "https://type.fit/api/quotes";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub type FetchResult = Result<Vec<Quote>, QuoteFetchError>;

/// Transport-level failure of a quote fetch.
#[derive(Debug)]
pub enum QuoteFetchError {
    Transport(reqwest::Error),
    Status(reqwest::StatusCode),
    Unavailable(String),
}

impl Display for QuoteFetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "quote fetch transport failure: {err}"),
            Self::Status(status) => write!(f, "quote endpoint returned status {status}"),
            Self::Unavailable(message) => write!(f, "quote source unavailable: {message}"),
        }
    }
}

impl Error for QuoteFetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Status(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<reqwest::Error> for QuoteFetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Single-attempt quote list provider.
pub trait QuoteSource {
    fn fetch_quotes(&self) -> FetchResult;
}

/// Wire shape of one remote record. The endpoint is treated as trusted but
/// sloppy: both fields may be null or missing.
#[derive(Debug, Deserialize)]
struct RemoteQuote {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

impl From<RemoteQuote> for Quote {
    fn from(record: RemoteQuote) -> Self {
        Self {
            text: record.text.unwrap_or_default(),
            author: record.author,
        }
    }
}

/// Blocking HTTP `QuoteSource` against the fixed endpoint.
pub struct HttpQuoteSource {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpQuoteSource {
    /// Builds a source against [`QUOTES_ENDPOINT`] with a request timeout.
    pub fn new() -> Result<Self, QuoteFetchError> {
        Self::with_endpoint(QUOTES_ENDPOINT)
    }

    /// Builds a source against a caller-provided endpoint (tests, mirrors).
    ///
    /// A client that cannot be constructed (TLS backend setup failure) is
    /// reported as [`QuoteFetchError::Unavailable`]: no request was ever
    /// attempted, so it is not a transport failure.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, QuoteFetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|err| QuoteFetchError::Unavailable(format!("client setup failed: {err}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch_quotes(&self) -> FetchResult {
        info!("event=quote_fetch module=quote status=start endpoint={}", self.endpoint);

        let response = self.client.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("event=quote_fetch module=quote status=error http_status={status}");
            return Err(QuoteFetchError::Status(status));
        }

        let records: Vec<RemoteQuote> = response.json()?;
        info!(
            "event=quote_fetch module=quote status=ok count={}",
            records.len()
        );
        Ok(records.into_iter().map(Quote::from).collect())
    }
}
