//! Compute check digits for a base

use anyhow::Context;

use cpfcheck::core::services::complete;
use cpfcheck::output::{DigitsResult, OutputMode};

/// Complete a nine-digit base into a full CPF
pub fn digits(base: &str, mode: OutputMode) -> anyhow::Result<()> {
    let cpf = complete(base).with_context(|| format!("Invalid base {base:?}"))?;
    let [first, second] = cpf.check_digits();
    let bare = cpf.as_digits();

    DigitsResult {
        base: bare[..9].to_string(),
        check_digits: format!("{first}{second}"),
        cpf: bare,
        formatted: cpf.to_string(),
    }
    .render(mode);

    Ok(())
}
