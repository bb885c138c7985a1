//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use cpfcheck::output::{
    DigitsResult, FormatItem, FormatResult, OperationResult, OutputMode, ValidateResult,
    ValidationReport,
};
use colored::Color;

fn valid_report() -> ValidationReport {
    ValidationReport {
        input: "529.982.247-25".to_string(),
        valid: true,
        digits: "52998224725".to_string(),
        formatted: Some("529.982.247-25".to_string()),
        reason: None,
    }
}

fn invalid_report() -> ValidationReport {
    ValidationReport {
        input: "123".to_string(),
        valid: false,
        digits: "123".to_string(),
        formatted: None,
        reason: Some("expected 11 digits, found 3".to_string()),
    }
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// ValidateResult Tests
// =============================================================================

#[test]
fn validate_result_counts() {
    let result = ValidateResult::from_reports(vec![valid_report(), invalid_report()]);
    assert!(!result.passed);
    assert_eq!(result.valid_count, 1);
    assert_eq!(result.invalid_count, 1);
}

#[test]
fn validate_result_empty_passes() {
    let result = ValidateResult::from_reports(vec![]);
    assert!(result.passed);
    assert_eq!(result.valid_count, 0);
}

#[test]
fn validate_result_serialization() {
    let result = ValidateResult::from_reports(vec![valid_report()]);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"passed\":true"));
    assert!(json.contains("\"formatted\":\"529.982.247-25\""));
    assert!(!json.contains("reason"));
}

#[test]
fn invalid_report_serializes_reason() {
    let json = serde_json::to_string(&invalid_report()).unwrap();
    assert!(json.contains("\"valid\":false"));
    assert!(json.contains("expected 11 digits, found 3"));
    assert!(!json.contains("formatted"));
}

// =============================================================================
// Other results
// =============================================================================

#[test]
fn format_result_serialization() {
    let result = FormatResult {
        items: vec![FormatItem {
            input: "52998224725".to_string(),
            formatted: "529.982.247-25".to_string(),
        }],
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"items\""));
    assert!(json.contains("529.982.247-25"));
}

#[test]
fn digits_result_serialization() {
    let result = DigitsResult {
        base: "529982247".to_string(),
        check_digits: "25".to_string(),
        cpf: "52998224725".to_string(),
        formatted: "529.982.247-25".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"check_digits\":\"25\""));
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Created config".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Created config"));
}

// =============================================================================
// Human Rendering Tests
// =============================================================================

#[test]
fn human_lines_without_colors() {
    let result = ValidateResult::from_reports(vec![valid_report(), invalid_report()]);
    assert_eq!(
        result.human_lines(None),
        vec![
            "  VALID    529.982.247-25".to_string(),
            "  INVALID  123 (expected 11 digits, found 3)".to_string(),
            String::new(),
            "1 valid, 1 invalid".to_string(),
        ]
    );
}

#[test]
fn human_lines_color_only_the_tags() {
    colored::control::set_override(true);
    let result = ValidateResult::from_reports(vec![valid_report(), invalid_report()]);
    let lines = result.human_lines(Some((Color::Blue, Color::Magenta)));
    assert_eq!(lines[0], "  \x1b[34mVALID\x1b[0m    529.982.247-25");
    assert_eq!(lines[1], "  \x1b[35mINVALID\x1b[0m  123 (expected 11 digits, found 3)");
}

#[test]
fn human_lines_empty_input() {
    let result = ValidateResult::from_reports(vec![]);
    assert_eq!(result.human_lines(None), vec!["No input.".to_string()]);
}
