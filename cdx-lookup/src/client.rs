use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::query::CdxQuery;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure of a single index query. Covers connection errors, timeouts and
/// non-success HTTP statuses; the batch runner downgrades it to an empty
/// result for the affected URL.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("index returned HTTP {0}")]
    Status(StatusCode),
}

/// Issues one index query and returns the raw response body.
pub trait IndexClient {
    fn fetch(&self, query: &CdxQuery) -> Result<String, TransportError>;
}

/// HTTP client against the archive's CDX endpoint. No retries and no
/// caching: repeated lookups of the same URL re-query the index.
pub struct HttpIndexClient {
    client: Client,
}

impl HttpIndexClient {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(HttpIndexClient { client })
    }
}

impl IndexClient for HttpIndexClient {
    fn fetch(&self, query: &CdxQuery) -> Result<String, TransportError> {
        let response = self
            .client
            .get(&query.endpoint)
            .query(&query.params())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status));
        }

        Ok(response.text()?)
    }
}
