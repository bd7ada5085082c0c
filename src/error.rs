use strum::IntoStaticStr;
use thiserror::Error;

/// Stable, label-friendly name of the rule a candidate failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RejectionReason {
    Missing,
    Empty,
    InvalidLength,
    InvalidCharacter,
    ChecksumMismatch,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaxCodeError {
    /// No candidate was given at all
    #[error("no tax code was provided")]
    Missing,
    /// Nothing is left once whitespace is removed
    #[error("tax code is empty")]
    Empty,
    #[error("tax code must be {expected} characters long, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// `position` is 1-based and counts characters of the normalized candidate
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("wrong check character: expected {expected}, found {found}")]
    ChecksumMismatch { expected: char, found: char },
}

impl TaxCodeError {
    pub fn reason(&self) -> RejectionReason {
        match self {
            TaxCodeError::Missing => RejectionReason::Missing,
            TaxCodeError::Empty => RejectionReason::Empty,
            TaxCodeError::InvalidLength { .. } => RejectionReason::InvalidLength,
            TaxCodeError::InvalidCharacter { .. } => RejectionReason::InvalidCharacter,
            TaxCodeError::ChecksumMismatch { .. } => RejectionReason::ChecksumMismatch,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reasons_are_snake_case() {
        let errors = vec![
            (TaxCodeError::Missing, "missing"),
            (TaxCodeError::Empty, "empty"),
            (
                TaxCodeError::InvalidLength {
                    expected: 16,
                    actual: 3,
                },
                "invalid_length",
            ),
            (
                TaxCodeError::InvalidCharacter {
                    character: '-',
                    position: 7,
                },
                "invalid_character",
            ),
            (
                TaxCodeError::ChecksumMismatch {
                    expected: 'S',
                    found: 'T',
                },
                "checksum_mismatch",
            ),
        ];
        for (error, reason) in errors {
            assert_eq!(error.reason().as_str(), reason);
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TaxCodeError::InvalidLength {
                expected: 16,
                actual: 15
            }
            .to_string(),
            "tax code must be 16 characters long, got 15"
        );
        assert_eq!(
            TaxCodeError::InvalidCharacter {
                character: '_',
                position: 2
            }
            .to_string(),
            "invalid character '_' at position 2"
        );
        assert_eq!(
            TaxCodeError::ChecksumMismatch {
                expected: 'S',
                found: 'A'
            }
            .to_string(),
            "wrong check character: expected S, found A"
        );
    }
}
