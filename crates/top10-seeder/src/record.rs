//! Destination record construction
//!
//! Merges what the encyclopedia returned with the catalog's editorial
//! defaults. Everything here is a pure function of its inputs, so a rerun
//! against unchanged data yields identical records.

use crate::catalog::DefaultsTable;
use crate::wiki::PageSummary;
use top10_common::{DestinationRecord, Region};

/// Longest short description kept before the ellipsis, in characters
pub const SHORT_DESC_MAX_CHARS: usize = 220;

/// Appended to descriptions cut at [`SHORT_DESC_MAX_CHARS`]
pub const ELLIPSIS: char = '\u{2026}';

/// Split `"City, State"` on the first comma. Without a comma the state is empty.
pub fn split_place(place: &str) -> (String, String) {
    match place.split_once(',') {
        Some((name, state)) => (name.trim().to_string(), state.trim().to_string()),
        None => (place.trim().to_string(), String::new()),
    }
}

/// `"New York City"` -> `"newyorkcity.jpg"`
pub fn hero_filename(name: &str) -> String {
    format!("{}.jpg", name.to_lowercase().replace(' ', ""))
}

/// First line of the summary, cut on a char boundary when too long
pub fn short_description(summary: &str) -> String {
    let first_line = summary.trim().split('\n').next().unwrap_or_default().trim();

    if first_line.chars().count() <= SHORT_DESC_MAX_CHARS {
        return first_line.to_string();
    }

    let cut: String = first_line.chars().take(SHORT_DESC_MAX_CHARS).collect();
    let mut short = cut.trim_end().to_string();
    short.push(ELLIPSIS);
    short
}

/// Builds records from place queries; owns the injected defaults table
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    defaults: DefaultsTable,
}

impl RecordBuilder {
    pub fn new(defaults: DefaultsTable) -> Self {
        Self { defaults }
    }

    /// Build the record for `place` at 1-based position `id`.
    ///
    /// `summary` may be missing entirely; the record then carries an empty
    /// description and no coordinates. `hero_image` is assigned either way.
    pub fn build(&self, place: &str, summary: Option<&PageSummary>, id: i64) -> DestinationRecord {
        let (name, state) = split_place(place);
        let region = Region::from_state(&state);
        let defaults = self.defaults.lookup(place);
        let hero_image = hero_filename(&name);

        DestinationRecord {
            id,
            name,
            state,
            region,
            lat: summary.and_then(|s| s.lat),
            lon: summary.and_then(|s| s.lon),
            short_desc: summary
                .map(|s| short_description(&s.summary))
                .unwrap_or_default(),
            best_months: defaults.best_months,
            tags: defaults.tags,
            hero_image,
        }
    }
}
