//! Error types for the theory engine
//!
//! Lookups fail only at the boundary, when a caller hands in text that is not
//! one of the fixed spellings or key names. Once a value has been parsed into
//! one of the model enums, the interval and transposition arithmetic is total.

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Note or instrument-key spelling that matches no chromatic table entry
    #[error("Unknown spelling: '{0}'")]
    UnknownSpelling(String),

    /// Key-signature name that is not one of the 15 catalog entries
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),

    /// Scale family name the practice picker does not know
    #[error("Unknown scale family: '{0}'")]
    UnknownScaleFamily(String),

    /// The practice picker was asked to choose from an empty selection
    #[error("No scale types selected")]
    NoScalesSelected,

    /// The platform random source failed
    #[error("Random source unavailable: {0}")]
    Entropy(String),
}

impl TheoryError {
    /// True for the two errors raised by the chromatic/key boundary
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            TheoryError::UnknownSpelling(_) | TheoryError::UnknownKey(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TheoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_quote_input() {
        assert_eq!(
            TheoryError::UnknownSpelling("H".into()).to_string(),
            "Unknown spelling: 'H'"
        );
        assert_eq!(
            TheoryError::UnknownKey("E♯".into()).to_string(),
            "Unknown key: 'E♯'"
        );
    }

    #[test]
    fn test_lookup_classification() {
        assert!(TheoryError::UnknownSpelling("x".into()).is_lookup_error());
        assert!(TheoryError::UnknownKey("x".into()).is_lookup_error());
        assert!(!TheoryError::NoScalesSelected.is_lookup_error());
    }
}
