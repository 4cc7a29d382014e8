//! Resilient HTTP fetcher
//!
//! Every outbound request of the seeder goes through [`Fetcher`]. It attaches
//! the identifying `User-Agent`, applies the request timeout, and retries
//! rate-limited (429) and server-side (5xx) responses with a linear backoff.
//! Any other non-success status fails immediately. Transport failures such as
//! timeouts or refused connections are not retried.

use crate::config::SeederConfig;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while fetching a remote resource
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-retryable HTTP status (e.g. 400, 404)
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: StatusCode },

    /// Retryable status persisted through every attempt
    #[error("HTTP {status} from {url} after {attempts} attempts")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        status: StatusCode,
    },

    /// Connection, TLS, or timeout failure
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body could not be read or decoded
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid fetcher configuration: {0}")]
    Config(String),
}

impl FetchError {
    /// Statuses worth another attempt: 429 and the transient 5xx family
    pub fn is_retryable_status(status: StatusCode) -> bool {
        matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
    }

    /// HTTP status attached to the failure, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } | FetchError::RetriesExhausted { status, .. } => {
                Some(*status)
            },
            _ => None,
        }
    }
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// GET client with bounded retry and mandatory client identification
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_attempts: u32,
    backoff_step: Duration,
}

impl Fetcher {
    pub fn new(config: &SeederConfig) -> FetchResult<Self> {
        config.validate().map_err(FetchError::Config)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Fetcher {
            client,
            max_attempts: config.max_attempts,
            backoff_step: Duration::from_millis(config.backoff_step_ms),
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before retry number `attempt` (1-based); linear, no jitter
    fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }

    /// GET `url` with query `params`, retrying 429/5xx.
    ///
    /// The returned response body is not buffered; callers that download large
    /// payloads read it incrementally with `bytes_stream()`.
    pub async fn fetch(&self, url: &str, params: &[(&str, &str)]) -> FetchResult<Response> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(url, attempt, "GET");

            let mut request = self.client.get(url);
            if !params.is_empty() {
                request = request.query(params);
            }

            let response = request.send().await.map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }

            if !FetchError::is_retryable_status(status) {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                });
            }

            if attempt >= self.max_attempts {
                warn!(url, attempt, %status, "Giving up after retryable failures");
                return Err(FetchError::RetriesExhausted {
                    url: url.to_string(),
                    attempts: attempt,
                    status,
                });
            }

            let delay = self.backoff(attempt);
            warn!(
                url,
                attempt,
                max_attempts = self.max_attempts,
                %status,
                delay_ms = delay.as_millis() as u64,
                "Retryable response, backing off"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// GET and decode a JSON body
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> FetchResult<T> {
        let response = self.fetch(url, params).await?;
        response.json::<T>().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
