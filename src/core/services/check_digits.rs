//! Check digit arithmetic
//!
//! Each CPF check digit is a mod-11 weighted sum over the digits before it.
//! Weights run from `len + 1` down to 2, so the first check digit uses
//! weights 10..=2 over nine digits and the second uses 11..=2 over ten.

use crate::core::models::cpf::collect_digits;
use crate::core::models::{BASE_LEN, Cpf, ParseError};

/// Compute the check digit for a run of preceding digits
///
/// A remainder below 2 maps to 0; any other remainder `r` maps to `11 - r`.
#[must_use]
pub fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() + 1;
    let sum: usize = digits
        .iter()
        .enumerate()
        .map(|(i, d)| usize::from(*d) * (top - i))
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        // r is in 2..=10 here, so the result fits in a digit
        #[allow(clippy::cast_possible_truncation)]
        r => (11 - r) as u8,
    }
}

/// Compute both check digits for a nine-digit base
#[must_use]
pub fn check_digits(base: &[u8; BASE_LEN]) -> [u8; 2] {
    let first = check_digit(base);

    let mut extended = [0u8; BASE_LEN + 1];
    extended[..BASE_LEN].copy_from_slice(base);
    extended[BASE_LEN] = first;

    [first, check_digit(&extended)]
}

/// Complete a nine-digit base (formatting allowed) into a valid CPF
pub fn complete(raw: &str) -> Result<Cpf, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::Empty);
    }
    let base: [u8; BASE_LEN] = collect_digits(raw)?;
    let cpf = Cpf::from_base(base)?;
    log::debug!("completed base {raw:?} into {cpf}");
    Ok(cpf)
}
