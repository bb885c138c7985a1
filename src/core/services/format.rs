//! Display formatting for CPF input

use super::validator::normalize;
use crate::core::models::CPF_LEN;

/// Format a candidate as `000.000.000-00`
///
/// Only the digit count matters; the check digits are not verified. Input
/// that does not hold exactly eleven digits is returned unchanged.
///
/// ```
/// use cpfcheck::core::services::format;
///
/// assert_eq!(format("12345678900"), "123.456.789-00");
/// assert_eq!(format("1234"), "1234");
/// ```
#[must_use]
pub fn format(raw: &str) -> String {
    let digits = normalize(raw);
    if digits.len() == CPF_LEN {
        format!("{}.{}.{}-{}", &digits[..3], &digits[3..6], &digits[6..9], &digits[9..])
    } else {
        raw.to_string()
    }
}
