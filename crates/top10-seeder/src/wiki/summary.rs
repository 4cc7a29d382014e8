//! Page summary extraction

use super::models::{PageSummary, SummaryResponse};
use crate::fetcher::{FetchError, FetchResult, Fetcher};
use crate::stage::{Stage, StageOutcome};
use tracing::{debug, warn};

/// Retrieves extract, thumbnail and coordinates for a canonical title
#[derive(Debug, Clone)]
pub struct SummaryExtractor {
    fetcher: Fetcher,
    summary_url: String,
}

impl SummaryExtractor {
    pub fn new(fetcher: Fetcher, summary_url: impl Into<String>) -> Self {
        let mut summary_url = summary_url.into();
        if !summary_url.ends_with('/') {
            summary_url.push('/');
        }

        Self {
            fetcher,
            summary_url,
        }
    }

    /// Summary resource URL; the title is percent-encoded as one path segment
    pub fn url_for(&self, title: &str) -> String {
        format!("{}{}", self.summary_url, urlencoding::encode(title))
    }

    /// Fetch and flatten the summary, surfacing any failure
    pub async fn fetch_summary(&self, title: &str) -> FetchResult<PageSummary> {
        let url = self.url_for(title);
        let response: SummaryResponse = self.fetcher.fetch_json(&url, &[]).await?;
        let summary = PageSummary::from_response(response, title);

        debug!(
            title,
            has_thumbnail = summary.thumbnail_url.is_some(),
            has_coordinates = summary.lat.is_some() && summary.lon.is_some(),
            "Summary fetched"
        );
        Ok(summary)
    }

    /// Best-effort variant: a failure that survived the retry policy yields
    /// `None` and the caller builds the record without summary data.
    pub async fn summarize(&self, title: &str) -> Option<PageSummary> {
        self.extract(title).await.into_option()
    }

    /// Summary fetch classified under the extractor's stage policy
    pub async fn extract(&self, title: &str) -> StageOutcome<PageSummary, FetchError> {
        let result = self.fetch_summary(title).await;
        let outcome = StageOutcome::from_result(Stage::ExtractSummary, result);
        if let StageOutcome::Tolerated(ref err) = outcome {
            warn!(title, error = %err, "Summary unavailable, continuing without it");
        }
        outcome
    }
}
