//! Input list and editorial defaults
//!
//! The catalog decides which destinations exist and in what order; ids are
//! assigned from that order. It is built once per run and handed to the record
//! builder, never mutated afterwards.

use crate::error::{Result, SeedError};
use crate::record::split_place;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Tags used when a place has no editorial entry
pub const FALLBACK_TAGS: &str = "city";

/// Travel window used when a place has no editorial entry
pub const FALLBACK_BEST_MONTHS: &str = "All year";

/// Hand-curated metadata for one place
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorialDefaults {
    pub tags: String,
    pub best_months: String,
}

impl EditorialDefaults {
    pub fn new(tags: impl Into<String>, best_months: impl Into<String>) -> Self {
        Self {
            tags: tags.into(),
            best_months: best_months.into(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_TAGS, FALLBACK_BEST_MONTHS)
    }
}

/// Place query -> editorial defaults, keyed by the exact query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultsTable(HashMap<String, EditorialDefaults>);

impl DefaultsTable {
    pub fn lookup(&self, place: &str) -> EditorialDefaults {
        self.0
            .get(place)
            .cloned()
            .unwrap_or_else(EditorialDefaults::fallback)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<String>> FromIterator<(P, EditorialDefaults)> for DefaultsTable {
    fn from_iter<I: IntoIterator<Item = (P, EditorialDefaults)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(p, d)| (p.into(), d)).collect())
    }
}

/// Ordered input list plus its defaults table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub places: Vec<String>,
    #[serde(default)]
    pub defaults: DefaultsTable,
}

const BUILTIN: &[(&str, &str, &str)] = &[
    ("New York City, New York", "city,food,art", "Apr-Jun, Sep-Oct"),
    ("San Francisco, California", "city,coast,scenic", "May-Oct"),
    ("Miami, Florida", "beach,nightlife", "Dec-Apr"),
    ("Grand Canyon National Park, Arizona", "nature,hiking,park", "Mar-May, Sep-Nov"),
    ("Yellowstone National Park, Wyoming", "nature,park,wildlife", "Jun-Sep"),
    ("Honolulu, Hawaii", "beach,tropical", "Apr-Oct"),
    ("New Orleans, Louisiana", "music,food,history", "Feb-May, Oct-Nov"),
    ("Chicago, Illinois", "city,art,food", "May-Oct"),
    ("Washington, D.C.", "history,museums,city", "Mar-Jun, Sep-Oct"),
    ("Las Vegas, Nevada", "nightlife,entertainment,desert", "Mar-May, Sep-Nov"),
];

impl Catalog {
    pub fn new(places: Vec<String>, defaults: DefaultsTable) -> Self {
        Self { places, defaults }
    }

    /// The ten destinations shipped with the seeder
    pub fn builtin() -> Self {
        let places = BUILTIN.iter().map(|(place, _, _)| place.to_string()).collect();
        let defaults = BUILTIN
            .iter()
            .map(|(place, tags, months)| (*place, EditorialDefaults::new(*tags, *months)))
            .collect();

        Self { places, defaults }
    }

    /// Load a catalog from a JSON file
    ///
    /// ```json
    /// {"places": ["Austin, Texas"], "defaults": {"Austin, Texas": {"tags": "music", "best_months": "Mar-May"}}}
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Places must be unique and non-blank; duplicates would repeat a record.
    /// The name part becomes a file name, so it may not contain path separators.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for place in &self.places {
            if place.trim().is_empty() {
                return Err(SeedError::catalog("place queries cannot be blank"));
            }
            let (name, _) = split_place(place);
            if name.contains(['/', '\\']) {
                return Err(SeedError::catalog(format!(
                    "place name '{name}' contains a path separator"
                )));
            }
            if !seen.insert(place.as_str()) {
                return Err(SeedError::catalog(format!("duplicate place '{place}'")));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
