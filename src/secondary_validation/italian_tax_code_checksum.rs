use crate::normalization::normalize_candidate;
use crate::secondary_validation::Validator;
use crate::{TaxCode, TaxCodeError};

pub const TAX_CODE_LENGTH: usize = 16;
pub(crate) const TAX_CODE_PREFIX_LENGTH: usize = TAX_CODE_LENGTH - 1;

const CHECK_CHARACTER_MODULUS: u32 = 26;

// Values of the characters at odd positions (1-based), indexed by `alphabet_index`.
const ODD_POSITION_VALUES: [u32; 36] = [
    // '0'..='9'
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21,
    // 'A'..='Z'
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

pub struct ItalianTaxCodeChecksum;

impl Validator for ItalianTaxCodeChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        TaxCode::parse(regex_match).is_ok()
    }
}

/// Returns true if the candidate is a well-formed Italian fiscal code with a correct check
/// character. Whitespace anywhere and letter case are ignored. Never panics.
pub fn is_valid_tax_code(candidate: Option<&str>) -> bool {
    candidate.is_some_and(|candidate| ItalianTaxCodeChecksum.is_valid_match(candidate))
}

/// Computes the check character for the first 15 characters of a fiscal code.
pub fn compute_check_character(prefix: &str) -> Result<char, TaxCodeError> {
    let normalized = normalize_candidate(prefix);
    check_structure(&normalized, TAX_CODE_PREFIX_LENGTH)?;
    Ok(check_character_of(normalized.as_bytes()))
}

pub(crate) fn is_tax_code_character(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

/// Checks that a normalized candidate is made of exactly `expected_length` characters from
/// `[A-Z0-9]`. On success the candidate is pure ASCII.
pub(crate) fn check_structure(
    normalized: &str,
    expected_length: usize,
) -> Result<(), TaxCodeError> {
    if normalized.is_empty() {
        return Err(TaxCodeError::Empty);
    }

    let actual = normalized.chars().count();
    if actual != expected_length {
        return Err(TaxCodeError::InvalidLength {
            expected: expected_length,
            actual,
        });
    }

    if let Some((idx, character)) = normalized
        .chars()
        .enumerate()
        .find(|(_, c)| !is_tax_code_character(*c))
    {
        return Err(TaxCodeError::InvalidCharacter {
            character,
            position: idx + 1,
        });
    }
    Ok(())
}

/// Computes the check letter from the first 15 bytes of `code`.
///
/// Bytes outside of `[A-Z0-9]` contribute 0 to the sum. Callers go through `check_structure`
/// first so this never happens in practice.
pub(crate) fn check_character_of(code: &[u8]) -> char {
    let sum: u32 = code
        .iter()
        .take(TAX_CODE_PREFIX_LENGTH)
        .enumerate()
        .map(|(idx, &c)| {
            // 0-based even indices are the odd positions of the official algorithm
            let value = if idx % 2 == 0 {
                odd_position_value(c)
            } else {
                even_position_value(c)
            };
            value.unwrap_or(0)
        })
        .sum();

    (b'A' + (sum % CHECK_CHARACTER_MODULUS) as u8) as char
}

#[inline]
fn alphabet_index(c: u8) -> Option<usize> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as usize),
        b'A'..=b'Z' => Some((c - b'A') as usize + 10),
        _ => None,
    }
}

#[inline]
fn odd_position_value(c: u8) -> Option<u32> {
    alphabet_index(c).map(|idx| ODD_POSITION_VALUES[idx])
}

#[inline]
fn even_position_value(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u32),
        b'A'..=b'Z' => Some((c - b'A') as u32),
        _ => None,
    }
}
