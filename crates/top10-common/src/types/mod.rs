//! Domain types shared by the seeder and the server

use crate::error::Top10Error;
use serde::{Deserialize, Serialize};

/// Coarse US region a destination belongs to
///
/// Derived from the state component of a place query. States outside the
/// fixed table fall back to [`Region::Usa`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    West,
    Northeast,
    Southeast,
    Pacific,
    Midwest,
    #[serde(rename = "USA")]
    Usa,
}

impl Region {
    /// Classify a state name. Matching is exact and case-sensitive.
    pub fn from_state(state: &str) -> Self {
        match state {
            "California" | "Arizona" | "Nevada" | "Wyoming" => Region::West,
            "New York" | "D.C." => Region::Northeast,
            "Florida" | "Louisiana" => Region::Southeast,
            "Hawaii" => Region::Pacific,
            "Illinois" => Region::Midwest,
            _ => Region::Usa,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::West => "West",
            Region::Northeast => "Northeast",
            Region::Southeast => "Southeast",
            Region::Pacific => "Pacific",
            Region::Midwest => "Midwest",
            Region::Usa => "USA",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = Top10Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "West" => Ok(Region::West),
            "Northeast" => Ok(Region::Northeast),
            "Southeast" => Ok(Region::Southeast),
            "Pacific" => Ok(Region::Pacific),
            "Midwest" => Ok(Region::Midwest),
            "USA" => Ok(Region::Usa),
            other => Err(Top10Error::UnknownRegion(other.to_string())),
        }
    }
}

/// One row of the `destinations` table
///
/// Records are only ever produced as a complete, ordered set by a pipeline
/// run; `id` is the 1-based position of the place in the input list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub id: i64,
    /// City or locale component of the place query
    pub name: String,
    /// State component of the place query, empty when absent
    pub state: String,
    pub region: Region,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// First line of the encyclopedia summary, bounded in length
    pub short_desc: String,
    pub best_months: String,
    /// Comma-joined labels, e.g. `beach,nightlife`
    pub tags: String,
    /// File name of the hero image; the file itself may not exist
    pub hero_image: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_region_table() {
        let table = [
            ("California", Region::West),
            ("Arizona", Region::West),
            ("Nevada", Region::West),
            ("Wyoming", Region::West),
            ("New York", Region::Northeast),
            ("D.C.", Region::Northeast),
            ("Florida", Region::Southeast),
            ("Louisiana", Region::Southeast),
            ("Hawaii", Region::Pacific),
            ("Illinois", Region::Midwest),
        ];

        for (state, expected) in table {
            assert_eq!(Region::from_state(state), expected, "state {state}");
        }
    }

    #[test]
    fn test_unmapped_states_default_to_usa() {
        assert_eq!(Region::from_state(""), Region::Usa);
        assert_eq!(Region::from_state("Texas"), Region::Usa);
        assert_eq!(Region::from_state("florida"), Region::Usa);
    }

    #[test]
    fn test_region_round_trips_through_text() {
        for region in [
            Region::West,
            Region::Northeast,
            Region::Southeast,
            Region::Pacific,
            Region::Midwest,
            Region::Usa,
        ] {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
        assert!("Atlantis".parse::<Region>().is_err());
    }

    #[test]
    fn test_region_serializes_usa_uppercase() {
        assert_eq!(serde_json::to_string(&Region::Usa).unwrap(), "\"USA\"");
        assert_eq!(serde_json::to_string(&Region::West).unwrap(), "\"West\"");
    }
}
