//! Config command - inspect and initialize configuration

use std::path::Path;

use cpfcheck::config::Config;
use cpfcheck::output::{OperationResult, OutputMode};

use crate::cli::{ConfigAction, load_config};

/// Handle config subcommands
///
/// Only `show` parses the config file, so `init --force` and `path` still
/// work when the file is broken.
pub fn config_cmd(
    action: ConfigAction,
    explicit: Option<&Path>,
    path: &Path,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init { force } => init(path, force, mode),
        ConfigAction::Show => {
            let config = load_config(explicit)?;
            match mode {
                OutputMode::Human => print!("{}", config.to_toml()?),
                OutputMode::Json => println!("{}", serde_json::to_string_pretty(&config)?),
            }
            Ok(())
        },
        ConfigAction::Path => {
            OperationResult {
                success: true,
                message: path.display().to_string(),
            }
            .render(mode);
            Ok(())
        },
    }
}

fn init(path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Config already exists at {}. Use --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    Config::default().save_to(path)?;
    log::debug!("wrote default config to {}", path.display());

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
