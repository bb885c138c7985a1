//! CPF model
//!
//! A [`Cpf`] is an 11-digit Brazilian taxpayer identifier. The last two
//! digits are checksums over the preceding ones. Values of this type only
//! come out of a successful validation, so holding one means the
//! identifier is well-formed.
//!
//! # Examples
//!
//! ```
//! use cpfcheck::core::models::{Cpf, ParseError};
//!
//! let cpf = Cpf::parse("529.982.247-25").unwrap();
//! assert_eq!(cpf.to_string(), "529.982.247-25");
//! assert_eq!(cpf.as_digits(), "52998224725");
//!
//! assert_eq!(Cpf::parse("11111111111"), Err(ParseError::RepeatedDigits));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::core::services::check_digits::check_digit;

/// Number of digits in a complete CPF
pub const CPF_LEN: usize = 11;

/// Number of base digits, before the two check digits
pub const BASE_LEN: usize = 9;

/// Reasons a candidate string is not a valid CPF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input string was empty
    #[error("empty input")]
    Empty,

    /// Wrong number of digits after stripping formatting
    #[error("expected {expected} digits, found {found}")]
    WrongLength {
        /// Digits required
        expected: usize,
        /// Digits present in the input
        found: usize,
    },

    /// A base digit outside `0..=9`
    #[error("invalid digit: {0}")]
    InvalidDigit(u8),

    /// Every digit is the same (e.g. `000.000.000-00`)
    #[error("all digits are identical")]
    RepeatedDigits,

    /// A check digit does not match the checksum of the digits before it
    #[error("check digit {position} mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// 1 for the first check digit, 2 for the second
        position: u8,
        /// Digit computed from the checksum
        expected: u8,
        /// Digit present in the input
        found: u8,
    },
}

/// A validated CPF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf {
    digits: [u8; CPF_LEN],
}

impl Cpf {
    /// Parse and validate a candidate string
    ///
    /// Any non-digit character (dots, dashes, spaces, letters) is ignored.
    /// The remaining digits must number exactly eleven, must not all be
    /// equal, and must carry matching check digits.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        let digits: [u8; CPF_LEN] = collect_digits(raw)?;

        if is_repeated(&digits) {
            return Err(ParseError::RepeatedDigits);
        }

        for (position, end) in [(1, BASE_LEN), (2, BASE_LEN + 1)] {
            let expected = check_digit(&digits[..end]);
            let found = digits[end];
            if expected != found {
                return Err(ParseError::CheckDigitMismatch {
                    position,
                    expected,
                    found,
                });
            }
        }

        Ok(Self { digits })
    }

    /// Build a CPF from nine base digits by appending both check digits
    pub fn from_base(base: [u8; BASE_LEN]) -> Result<Self, ParseError> {
        if let Some(&digit) = base.iter().find(|d| **d > 9) {
            return Err(ParseError::InvalidDigit(digit));
        }
        if is_repeated(&base) {
            return Err(ParseError::RepeatedDigits);
        }

        let mut digits = [0u8; CPF_LEN];
        digits[..BASE_LEN].copy_from_slice(&base);
        digits[BASE_LEN] = check_digit(&digits[..BASE_LEN]);
        digits[BASE_LEN + 1] = check_digit(&digits[..=BASE_LEN]);

        Ok(Self { digits })
    }

    /// The eleven digits as numbers
    #[must_use]
    pub const fn digits(&self) -> &[u8; CPF_LEN] {
        &self.digits
    }

    /// The two check digits
    #[must_use]
    pub const fn check_digits(&self) -> [u8; 2] {
        [self.digits[BASE_LEN], self.digits[BASE_LEN + 1]]
    }

    /// The bare 11-digit string, without punctuation
    #[must_use]
    pub fn as_digits(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

/// Strip formatting and require exactly `N` digits
pub(crate) fn collect_digits<const N: usize>(raw: &str) -> Result<[u8; N], ParseError> {
    let digits: Vec<u8> = raw.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();
    let found = digits.len();
    digits.try_into().map_err(|_| ParseError::WrongLength { expected: N, found })
}

fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

impl fmt::Display for Cpf {
    /// Formats as `000.000.000-00`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.as_digits();
        write!(f, "{}.{}.{}-{}", &s[..3], &s[3..6], &s[6..9], &s[9..])
    }
}

impl FromStr for Cpf {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_digits())
    }
}
