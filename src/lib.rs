// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checker;
mod error;
mod normalization;
mod observability;
mod secondary_validation;
mod tax_code;

// This is the public API of the tax code validation library
pub use checker::config::{CheckerConfig, SecondaryValidator};
pub use checker::TaxCodeChecker;
pub use error::{RejectionReason, TaxCodeError};
pub use normalization::normalize_candidate;
pub use observability::labels::Labels;
pub use secondary_validation::{
    compute_check_character, is_valid_tax_code, ItalianTaxCodeChecksum, Validator,
    TAX_CODE_LENGTH,
};
pub use tax_code::TaxCode;
