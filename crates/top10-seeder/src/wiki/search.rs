//! Title resolution via the encyclopedia search endpoint

use super::models::SearchResponse;
use crate::fetcher::{FetchResult, Fetcher};
use tracing::debug;

/// Maps a free-text place query to a canonical page title
#[derive(Debug, Clone)]
pub struct TitleResolver {
    fetcher: Fetcher,
    search_url: String,
}

impl TitleResolver {
    pub fn new(fetcher: Fetcher, search_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            search_url: search_url.into(),
        }
    }

    /// Title of the single best search hit, or `None` when nothing matched
    pub async fn resolve(&self, query: &str) -> FetchResult<Option<String>> {
        let params = [
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", "1"),
            ("format", "json"),
        ];

        let response: SearchResponse = self.fetcher.fetch_json(&self.search_url, &params).await?;
        let title = response.top_title();

        debug!(query, title = ?title, "Search resolved");
        Ok(title)
    }
}
