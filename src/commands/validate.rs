//! Validate CPFs from arguments or stdin

use std::io::{self, BufRead};

use cpfcheck::config::Config;
use cpfcheck::output::{OutputMode, ValidateResult, ValidationReport};
use cpfcheck::{normalize, validate as validate_cpf};

/// Validate each candidate and fail if any is invalid
pub fn validate(cpfs: &[String], config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let inputs = if cpfs.is_empty() {
        log::debug!("no arguments, reading candidates from stdin");
        read_stdin()?
    } else {
        cpfs.to_vec()
    };

    let reports = inputs.iter().map(|raw| report(raw, config.display.formatted)).collect();
    let result = ValidateResult::from_reports(reports);
    let colors = if config.display.color {
        Some(config.feedback.colors()?)
    } else {
        None
    };
    result.render_colored(mode, colors);

    if !result.passed {
        anyhow::bail!("{} invalid CPF(s)", result.invalid_count);
    }

    Ok(())
}

fn read_stdin() -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

fn report(raw: &str, formatted: bool) -> ValidationReport {
    match validate_cpf(raw) {
        Ok(cpf) => ValidationReport {
            input: raw.to_string(),
            valid: true,
            digits: cpf.as_digits(),
            formatted: formatted.then(|| cpf.to_string()),
            reason: None,
        },
        Err(e) => ValidationReport {
            input: raw.to_string(),
            valid: false,
            digits: normalize(raw),
            formatted: None,
            reason: Some(e.to_string()),
        },
    }
}
