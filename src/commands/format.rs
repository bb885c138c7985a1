//! Format CPFs for display

use cpfcheck::output::{FormatItem, FormatResult, OutputMode};

/// Print each input as `000.000.000-00` where it has eleven digits
pub fn format(cpfs: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let items = cpfs
        .iter()
        .map(|raw| FormatItem {
            input: raw.clone(),
            formatted: cpfcheck::format(raw),
        })
        .collect();

    FormatResult { items }.render(mode);
    Ok(())
}
