//! Business logic services
//!
//! Pure functions over candidate strings. No I/O.
//!
//! - [`validator`] - Decide whether a candidate is a valid CPF
//! - [`check_digits`] - Mod-11 check digit arithmetic
//! - [`format`](mod@format) - Display formatting

pub mod check_digits;
pub mod format;
pub mod validator;

pub use check_digits::{check_digit, check_digits, complete};
pub use format::format;
pub use validator::{is_valid, is_valid_opt, normalize, validate};
