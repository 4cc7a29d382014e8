//! Per-stage result type
//!
//! Most pipeline stages are strict: an error aborts the run. A few are
//! best-effort (summary extraction, image download) and must never stop a
//! record from being built. [`StageOutcome`] keeps that difference in the
//! type rather than in scattered error suppression.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ResolveTitle,
    ExtractSummary,
    MaterializeImage,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ResolveTitle => "resolve_title",
            Self::ExtractSummary => "extract_summary",
            Self::MaterializeImage => "materialize_image",
        };
        f.write_str(name)
    }
}

/// How a stage treats its own errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePolicy {
    /// Errors abort the run
    Strict,
    /// Errors are recorded and the pipeline carries on
    Tolerant,
}

impl Stage {
    pub fn policy(self) -> StagePolicy {
        match self {
            Self::ExtractSummary | Self::MaterializeImage => StagePolicy::Tolerant,
            Self::ResolveTitle => StagePolicy::Strict,
        }
    }
}

/// Result of running one stage for one destination
#[derive(Debug)]
pub enum StageOutcome<T, E> {
    /// Stage produced a value
    Completed(T),
    /// Stage had nothing to do (e.g. no thumbnail to download)
    Skipped(&'static str),
    /// Stage failed under a tolerant policy
    Tolerated(E),
    /// Stage failed under a strict policy
    Fatal(E),
}

impl<T, E> StageOutcome<T, E> {
    /// Classify a stage result according to the stage's policy
    pub fn from_result(stage: Stage, result: Result<T, E>) -> Self {
        match (result, stage.policy()) {
            (Ok(value), _) => Self::Completed(value),
            (Err(err), StagePolicy::Tolerant) => Self::Tolerated(err),
            (Err(err), StagePolicy::Strict) => Self::Fatal(err),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Completed(_) => "completed",
            Self::Skipped(_) => "skipped",
            Self::Tolerated(_) => "tolerated",
            Self::Fatal(_) => "fatal",
        }
    }

    /// Only a fatal outcome becomes an error; anything else is `Ok`, with the
    /// value present when the stage completed.
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Self::Completed(value) => Ok(Some(value)),
            Self::Skipped(_) | Self::Tolerated(_) => Ok(None),
            Self::Fatal(err) => Err(err),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies() {
        assert_eq!(Stage::ResolveTitle.policy(), StagePolicy::Strict);
        assert_eq!(Stage::ExtractSummary.policy(), StagePolicy::Tolerant);
        assert_eq!(Stage::MaterializeImage.policy(), StagePolicy::Tolerant);
    }

    #[test]
    fn test_tolerant_stage_swallows_error() {
        let outcome: StageOutcome<u8, &str> =
            StageOutcome::from_result(Stage::MaterializeImage, Err("boom"));
        assert_eq!(outcome.status(), "tolerated");
        assert_eq!(outcome.into_result(), Ok(None));
    }

    #[test]
    fn test_strict_stage_propagates_error() {
        let outcome: StageOutcome<u8, &str> =
            StageOutcome::from_result(Stage::ResolveTitle, Err("boom"));
        assert!(matches!(outcome, StageOutcome::Fatal("boom")));
        assert_eq!(outcome.into_result(), Err("boom"));
    }

    #[test]
    fn test_completed_and_skipped() {
        let done: StageOutcome<u8, &str> = StageOutcome::from_result(Stage::ResolveTitle, Ok(7));
        assert_eq!(done.status(), "completed");
        assert_eq!(done.into_option(), Some(7));

        let skipped: StageOutcome<u8, &str> = StageOutcome::Skipped("no thumbnail");
        assert_eq!(skipped.into_result(), Ok(None));
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::MaterializeImage.to_string(), "materialize_image");
        assert_eq!(Stage::ResolveTitle.to_string(), "resolve_title");
    }
}
