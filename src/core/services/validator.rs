//! Identifier validation
//!
//! [`is_valid`] is the boolean entry point used by the field controller and
//! the CLI. It never fails: anything that is not a well-formed CPF is simply
//! `false`. [`validate`] returns the same verdict with the reason attached.

use crate::core::models::{Cpf, ParseError};

/// Strip every non-digit character from a candidate
///
/// Only ASCII digits are kept; other numeric scripts count as formatting.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Validate a candidate, returning the parsed CPF or the reason it failed
pub fn validate(raw: &str) -> Result<Cpf, ParseError> {
    let result = Cpf::parse(raw);
    match &result {
        Ok(cpf) => log::debug!("{raw:?} is valid ({cpf})"),
        Err(e) => log::debug!("{raw:?} is invalid: {e}"),
    }
    result
}

/// Check whether a candidate is a valid CPF
///
/// ```
/// use cpfcheck::is_valid;
///
/// assert!(is_valid("529.982.247-25"));
/// assert!(!is_valid("12345678900"));
/// assert!(!is_valid(""));
/// ```
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_ok()
}

/// Like [`is_valid`], treating an absent value as invalid
#[must_use]
pub fn is_valid_opt(raw: Option<&str>) -> bool {
    raw.is_some_and(is_valid)
}
