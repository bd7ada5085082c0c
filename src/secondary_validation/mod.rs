mod italian_tax_code_checksum;

use crate::checker::config::SecondaryValidator;
use crate::{TaxCode, TaxCodeError};

pub(crate) use crate::secondary_validation::italian_tax_code_checksum::{
    check_character_of, check_structure, TAX_CODE_PREFIX_LENGTH,
};
pub use crate::secondary_validation::italian_tax_code_checksum::{
    compute_check_character, is_valid_tax_code, ItalianTaxCodeChecksum, TAX_CODE_LENGTH,
};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::ItalianTaxCodeChecksum => {
                ItalianTaxCodeChecksum.is_valid_match(regex_match)
            }
        }
    }
}

impl SecondaryValidator {
    /// Same decision as [Validator::is_valid_match], with the reason of a rejection.
    pub fn explain(&self, candidate: &str) -> Result<TaxCode, TaxCodeError> {
        match self {
            SecondaryValidator::ItalianTaxCodeChecksum => TaxCode::parse(candidate),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    #[test]
    fn secondary_validator_dispatches_to_checksum() {
        let validator = SecondaryValidator::ItalianTaxCodeChecksum;
        assert!(validator.is_valid_match("RSSMRA85T10A562S"));
        assert!(!validator.is_valid_match("RSSMRA85T10A562A"));
    }

    #[test]
    fn explain_agrees_with_is_valid_match() {
        let validator = SecondaryValidator::ItalianTaxCodeChecksum;
        let candidates = vec![
            "RSSMRA85T10A562S",
            "rss mra 85t10 a562s",
            "RSSMRA85T10A562A",
            "RSSMRA85T10A562",
            "RSSMRA85T10A56-S",
            "",
        ];
        for candidate in candidates {
            assert_eq!(
                validator.explain(candidate).is_ok(),
                validator.is_valid_match(candidate),
                "candidate: {candidate:?}"
            );
        }
    }

    #[test]
    fn validators_are_usable_as_trait_objects() {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(ItalianTaxCodeChecksum),
            Box::new(SecondaryValidator::ItalianTaxCodeChecksum),
        ];
        for validator in validators {
            assert!(validator.is_valid_match("MRTMTT91D08F205J"));
            assert!(!validator.is_valid_match("MRTMTT91D08F205V"));
        }
    }
}
