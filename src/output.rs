//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{Color, Colorize};
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a validate operation
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether every candidate was valid
    pub passed: bool,
    /// Number of valid candidates
    pub valid_count: usize,
    /// Number of invalid candidates
    pub invalid_count: usize,
    /// One report per candidate, in input order
    pub reports: Vec<ValidationReport>,
}

/// Validation outcome for one candidate
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// The candidate as given
    pub input: String,
    /// Whether it is a valid CPF
    pub valid: bool,
    /// The candidate's digits, formatting stripped
    pub digits: String,
    /// Display form (`000.000.000-00`) for valid candidates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Why an invalid candidate was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of a format operation
#[derive(Debug, Serialize)]
pub struct FormatResult {
    /// One entry per input
    pub items: Vec<FormatItem>,
}

/// A single formatted input
#[derive(Debug, Serialize)]
pub struct FormatItem {
    /// The input as given
    pub input: String,
    /// The formatted form, or the input unchanged
    pub formatted: String,
}

/// Result of a check digit computation
#[derive(Debug, Serialize)]
pub struct DigitsResult {
    /// The nine base digits
    pub base: String,
    /// The two computed check digits
    pub check_digits: String,
    /// The complete identifier, bare digits
    pub cpf: String,
    /// The complete identifier, formatted
    pub formatted: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl ValidateResult {
    /// Build a result from individual reports
    #[must_use]
    pub fn from_reports(reports: Vec<ValidationReport>) -> Self {
        let valid_count = reports.iter().filter(|r| r.valid).count();
        let invalid_count = reports.len() - valid_count;
        Self {
            passed: invalid_count == 0,
            valid_count,
            invalid_count,
            reports,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        self.render_colored(mode, None);
    }

    /// Render with the VALID/INVALID tags colored `(valid, invalid)`
    pub fn render_colored(&self, mode: OutputMode, colors: Option<(Color, Color)>) {
        match mode {
            OutputMode::Human => {
                for line in self.human_lines(colors) {
                    println!("{line}");
                }
            },
            OutputMode::Json => self.render_json(),
        }
    }

    /// The human-readable report, one entry per printed line
    #[must_use]
    pub fn human_lines(&self, colors: Option<(Color, Color)>) -> Vec<String> {
        if self.reports.is_empty() {
            return vec!["No input.".to_string()];
        }

        let tag = |text: &str, color: Option<Color>| match color {
            Some(c) => text.color(c).to_string(),
            None => text.to_string(),
        };

        let mut lines: Vec<String> = self
            .reports
            .iter()
            .map(|r| {
                if r.valid {
                    format!(
                        "  {}    {}",
                        tag("VALID", colors.map(|(valid, _)| valid)),
                        r.formatted.as_deref().unwrap_or(&r.digits)
                    )
                } else {
                    format!(
                        "  {}  {} ({})",
                        tag("INVALID", colors.map(|(_, invalid)| invalid)),
                        r.input,
                        r.reason.as_deref().unwrap_or("invalid")
                    )
                }
            })
            .collect();

        lines.push(String::new());
        lines.push(format!("{} valid, {} invalid", self.valid_count, self.invalid_count));
        lines
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl FormatResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for item in &self.items {
                    println!("{}", item.formatted);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl DigitsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Check digits: {}", self.check_digits);
                println!("CPF: {}", self.formatted);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
