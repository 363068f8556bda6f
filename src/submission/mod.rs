// src/submission/mod.rs

pub mod store;

pub use store::{JsonFileStore, SubmissionStore};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Shortest explanation the survey page accepts, in UTF-16 code units.
pub const MIN_EXPLANATION_LEN: usize = 10;

/// How many explanations the results page shows.
pub const RECENT_LIMIT: usize = 15;

/// One stored visitor explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub explanation: String,
    pub timestamp: DateTime<Utc>,
}

/// Why an explanation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// No explanation text at all.
    MissingExplanation,
    /// Shorter than [`MIN_EXPLANATION_LEN`].
    TooShort { len: usize },
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::MissingExplanation => write!(f, "explanation is required"),
            SubmissionError::TooShort { len } => write!(
                f,
                "explanation must be at least {} characters, got {}",
                MIN_EXPLANATION_LEN, len
            ),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Accept an explanation of at least [`MIN_EXPLANATION_LEN`] code units.
///
/// The text is taken as typed: surrounding whitespace counts toward the length.
pub fn validate_explanation(explanation: &str) -> Result<(), SubmissionError> {
    if explanation.is_empty() {
        return Err(SubmissionError::MissingExplanation);
    }
    let len = explanation.encode_utf16().count();
    if len < MIN_EXPLANATION_LEN {
        return Err(SubmissionError::TooShort { len });
    }
    Ok(())
}

/// Validate `explanation`, stamp it with the current time and store it.
pub fn submit<S: SubmissionStore + ?Sized>(store: &S, explanation: &str) -> Result<Submission> {
    validate_explanation(explanation)?;
    let saved = store.insert(explanation.to_string(), Utc::now())?;
    info!(id = saved.id, "stored submission");
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_explanation_is_missing() {
        assert_eq!(
            validate_explanation(""),
            Err(SubmissionError::MissingExplanation)
        );
    }

    #[test]
    fn short_explanations_are_rejected() {
        assert_eq!(
            validate_explanation("too short"),
            Err(SubmissionError::TooShort { len: 9 })
        );
        // counted in UTF-16 units: each of these is one unit
        assert_eq!(
            validate_explanation(&"\u{e9}".repeat(9)),
            Err(SubmissionError::TooShort { len: 9 })
        );
    }

    #[test]
    fn ten_units_is_enough() {
        assert_eq!(validate_explanation("confounder"), Ok(()));
        // two surrogate pairs plus seven ascii chars
        assert_eq!(validate_explanation("🍫🏅 wealth"), Ok(()));
    }

    #[test]
    fn submit_rejects_without_touching_store() -> Result<()> {
        let dir = tempdir()?;
        let store = JsonFileStore::open(dir.path().join("subs.json"))?;

        let err = submit(&store, "short").unwrap_err();
        assert_eq!(
            err.downcast_ref::<SubmissionError>(),
            Some(&SubmissionError::TooShort { len: 5 })
        );
        assert!(store.recent(RECENT_LIMIT)?.is_empty());
        Ok(())
    }

    #[test]
    fn submit_stores_and_returns_entry() -> Result<()> {
        let dir = tempdir()?;
        let store = JsonFileStore::open(dir.path().join("subs.json"))?;

        let saved = submit(&store, "wealthy countries buy chocolate")?;
        assert_eq!(saved.id, 1);
        assert_eq!(store.recent(RECENT_LIMIT)?, vec![saved]);
        Ok(())
    }
}
