use crate::normalization::normalize_candidate;
use crate::secondary_validation::{
    check_character_of, check_structure, TAX_CODE_LENGTH, TAX_CODE_PREFIX_LENGTH,
};
use crate::TaxCodeError;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// A normalized Italian fiscal code whose check character has been verified.
///
/// The segment accessors return the raw characters only. Digits of a real code can be
/// replaced by letters when two people would otherwise share a code, so the segments are not
/// decoded into dates or numbers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct TaxCode(String);

impl TaxCode {
    pub fn parse(candidate: &str) -> Result<TaxCode, TaxCodeError> {
        let normalized = normalize_candidate(candidate);
        check_structure(&normalized, TAX_CODE_LENGTH)?;

        // `check_structure` guarantees ASCII, byte indexing is safe from here on
        let bytes = normalized.as_bytes();
        let expected = check_character_of(&bytes[..TAX_CODE_PREFIX_LENGTH]);
        let found = bytes[TAX_CODE_PREFIX_LENGTH] as char;
        if expected != found {
            return Err(TaxCodeError::ChecksumMismatch { expected, found });
        }
        Ok(TaxCode(normalized))
    }

    /// Builds a code from its first 15 characters by appending the check character.
    pub fn from_prefix(prefix: &str) -> Result<TaxCode, TaxCodeError> {
        let mut normalized = normalize_candidate(prefix);
        check_structure(&normalized, TAX_CODE_PREFIX_LENGTH)?;
        let check_character = check_character_of(normalized.as_bytes());
        normalized.push(check_character);
        Ok(TaxCode(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn surname_code(&self) -> &str {
        &self.0[0..3]
    }

    pub fn given_name_code(&self) -> &str {
        &self.0[3..6]
    }

    pub fn birth_year_code(&self) -> &str {
        &self.0[6..8]
    }

    pub fn birth_month_code(&self) -> char {
        self.0.as_bytes()[8] as char
    }

    /// Day of birth, with 40 added for women.
    pub fn birth_day_code(&self) -> &str {
        &self.0[9..11]
    }

    /// Cadastral code of the municipality, or of the foreign country of birth.
    pub fn municipality_code(&self) -> &str {
        &self.0[11..15]
    }

    pub fn check_character(&self) -> char {
        self.0.as_bytes()[TAX_CODE_PREFIX_LENGTH] as char
    }
}

impl FromStr for TaxCode {
    type Err = TaxCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaxCode::parse(s)
    }
}

impl fmt::Display for TaxCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaxCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
