//! Encyclopedia wire models
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! responses is ignored. Missing fields decode to `None`/empty, never to errors.

use serde::{Deserialize, Serialize};

// ============================================================================
// Search endpoint: ?action=query&list=search
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub title: String,
}

impl SearchResponse {
    /// Title of the best hit, if the search returned anything
    pub fn top_title(self) -> Option<String> {
        self.query?.search.into_iter().next().map(|hit| hit.title)
    }
}

// ============================================================================
// Summary endpoint: /page/summary/{title}
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Coordinates {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// What the pipeline keeps from a page summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub title: String,
    /// Plain-text extract; empty when the page has none
    pub summary: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub thumbnail_url: Option<String>,
}

impl PageSummary {
    /// Flatten a wire response; `requested_title` stands in for a missing title
    pub fn from_response(response: SummaryResponse, requested_title: &str) -> Self {
        let (lat, lon) = response
            .coordinates
            .map(|c| (c.lat, c.lon))
            .unwrap_or((None, None));

        PageSummary {
            title: response
                .title
                .unwrap_or_else(|| requested_title.to_string()),
            summary: response.extract.unwrap_or_default(),
            lat,
            lon,
            thumbnail_url: response
                .thumbnail
                .and_then(|t| t.source)
                .filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_top_title() {
        let response: SearchResponse = serde_json::from_value(json!({
            "batchcomplete": "",
            "query": {"searchinfo": {"totalhits": 2}, "search": [
                {"ns": 0, "title": "Miami", "pageid": 1},
                {"ns": 0, "title": "Miami Beach", "pageid": 2}
            ]}
        }))
        .unwrap();
        assert_eq!(response.top_title().as_deref(), Some("Miami"));
    }

    #[test]
    fn test_search_without_hits() {
        let empty: SearchResponse =
            serde_json::from_value(json!({"query": {"search": []}})).unwrap();
        assert_eq!(empty.top_title(), None);

        let bare: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare.top_title(), None);
    }

    #[test]
    fn test_summary_full() {
        let response: SummaryResponse = serde_json::from_value(json!({
            "title": "Honolulu",
            "extract": "Honolulu is the capital of Hawaii.",
            "thumbnail": {"source": "https://upload.example/honolulu.jpg", "width": 320},
            "coordinates": {"lat": 21.30694, "lon": -157.85833}
        }))
        .unwrap();

        let summary = PageSummary::from_response(response, "Honolulu");
        assert_eq!(summary.summary, "Honolulu is the capital of Hawaii.");
        assert_eq!(summary.lat, Some(21.30694));
        assert_eq!(summary.lon, Some(-157.85833));
        assert_eq!(
            summary.thumbnail_url.as_deref(),
            Some("https://upload.example/honolulu.jpg")
        );
    }

    #[test]
    fn test_summary_missing_fields_are_absent() {
        let response: SummaryResponse =
            serde_json::from_value(json!({"type": "standard"})).unwrap();
        let summary = PageSummary::from_response(response, "Nowhere");

        assert_eq!(summary.title, "Nowhere");
        assert_eq!(summary.summary, "");
        assert_eq!(summary.lat, None);
        assert_eq!(summary.lon, None);
        assert_eq!(summary.thumbnail_url, None);
    }

    #[test]
    fn test_summary_null_thumbnail_and_coordinates() {
        let response: SummaryResponse = serde_json::from_value(json!({
            "title": "Miami",
            "extract": "Miami is a city...",
            "thumbnail": null,
            "coordinates": null
        }))
        .unwrap();
        let summary = PageSummary::from_response(response, "Miami");
        assert_eq!(summary.thumbnail_url, None);
        assert_eq!(summary.lat, None);
    }
}
