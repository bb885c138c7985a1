//! Property-based tests for the validator
//!
//! Uses proptest to verify properties that should hold for all inputs.

use cpfcheck::core::models::Cpf;
use cpfcheck::{format, is_valid, normalize};
use proptest::prelude::*;

fn digit_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

fn non_repeated_base() -> impl Strategy<Value = [u8; 9]> {
    prop::array::uniform9(0u8..10).prop_filter("repeated base", |b| b.iter().any(|d| *d != b[0]))
}

proptest! {
    /// Any digit count other than eleven is invalid
    #[test]
    fn wrong_digit_count_is_invalid(s in "[0-9]{0,10}|[0-9]{12,20}") {
        prop_assert!(!is_valid(&s));
    }

    /// Eleven copies of one digit are invalid, formatted or not
    #[test]
    fn repeated_digit_is_invalid(d in 0u8..10) {
        let bare = digit_string(&[d; 11]);
        prop_assert!(!is_valid(&bare));
        prop_assert!(!is_valid(&format(&bare)));
    }

    /// Only the digits of a candidate matter
    #[test]
    fn result_depends_only_on_digits(s in any::<String>()) {
        prop_assert_eq!(is_valid(&s), is_valid(&normalize(&s)));
    }

    /// Separators between digits never change the verdict
    #[test]
    fn separators_are_ignored(
        digits in "[0-9]{11}",
        sep in "[ ./-]{0,2}"
    ) {
        let spaced: String = digits.chars().flat_map(|c| std::iter::once(c).chain(sep.chars())).collect();
        prop_assert_eq!(is_valid(&spaced), is_valid(&digits));
    }

    /// Completing any non-degenerate base yields a valid identifier
    #[test]
    fn completed_base_is_valid(base in non_repeated_base()) {
        let cpf = Cpf::from_base(base).unwrap();
        prop_assert!(is_valid(&cpf.as_digits()));
        prop_assert!(is_valid(&cpf.to_string()));
    }

    /// Changing either check digit invalidates the identifier
    #[test]
    fn altered_check_digit_is_invalid(
        base in non_repeated_base(),
        position in 9usize..11,
        shift in 1u8..10
    ) {
        let mut digits = *Cpf::from_base(base).unwrap().digits();
        digits[position] = (digits[position] + shift) % 10;
        prop_assert!(!is_valid(&digit_string(&digits)));
    }

    /// Validation is deterministic
    #[test]
    fn validation_is_deterministic(s in "[0-9.\\- ]{0,16}") {
        prop_assert_eq!(is_valid(&s), is_valid(&s));
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn digit_string_renders_digits() {
        assert_eq!(digit_string(&[5, 2, 9]), "529");
    }
}
