//! Real-change vs no-op classification of extracted keys.

use super::char_diff::diff_chars;
use super::extract::KeyCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// New key, or a value whose text actually changed.
    Real,
    /// Removed and re-added with the same text.
    Noop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedKey {
    pub candidate: KeyCandidate,
    pub classification: Classification,
}

impl ClassifiedKey {
    pub fn is_real(&self) -> bool {
        self.classification == Classification::Real
    }
}

/// Classify a candidate by comparing its added value to its removed value
/// character by character.
///
/// A key with no removed value is always a real change. Otherwise it is a
/// no-op exactly when the edit script contains nothing but equal text.
pub fn classify(candidate: KeyCandidate) -> ClassifiedKey {
    let classification = match &candidate.removed_value {
        None => Classification::Real,
        Some(removed) => {
            let ops = diff_chars(&candidate.added_value, removed);
            if ops.iter().all(|op| op.is_equal()) {
                Classification::Noop
            } else {
                Classification::Real
            }
        }
    };

    ClassifiedKey {
        candidate,
        classification,
    }
}
