//! CLI definitions and entry point

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::commands;
use cpfcheck::config::Config;
use cpfcheck::output::OutputMode;

/// cpfcheck - CPF validation with live field feedback
#[derive(Parser, Debug)]
#[command(
    name = "cpfcheck",
    version,
    about = "Validate Brazilian CPF identifiers",
    long_about = "Validate Brazilian CPF identifiers.\n\n\
                  Formatting characters are ignored; the eleven digits must carry\n\
                  matching check digits and must not all be identical."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of ~/.cpfcheck/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate CPFs given as arguments, or one per line on stdin
    Validate {
        /// Candidates to validate
        cpfs: Vec<String>,
    },

    /// Format CPFs as 000.000.000-00
    Format {
        /// Candidates to format
        #[arg(required = true)]
        cpfs: Vec<String>,
    },

    /// Compute the check digits for a nine-digit base
    Digits {
        /// The first nine digits (formatting allowed)
        base: String,
    },

    /// Interactive field: type a CPF per line and watch the feedback
    Watch,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write the default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let explicit = cli.config.as_deref();
    let config_path = cli.config.clone().unwrap_or_else(cpfcheck::paths::global_config);

    match cli.command {
        Some(Command::Validate { cpfs }) => {
            commands::validate(&cpfs, &load_config(explicit)?, output_mode)
        },
        Some(Command::Format { cpfs }) => commands::format(&cpfs, output_mode),
        Some(Command::Digits { base }) => commands::digits(&base, output_mode),
        Some(Command::Watch) => commands::watch(&load_config(explicit)?, output_mode),
        Some(Command::Config { action }) => {
            commands::config_cmd(action, explicit, &config_path, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": cpfcheck::VERSION
                    })
                );
            } else {
                println!("cpfcheck v{}", cpfcheck::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": cpfcheck::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("cpfcheck v{}", cpfcheck::VERSION);
                println!("\nRun 'cpfcheck --help' for usage");
                println!("Run 'cpfcheck validate <CPF>' to check an identifier");
            }
            Ok(())
        },
    }
}

/// Load the effective config
///
/// An explicit path that exists must parse; one that does not exist yields
/// defaults. Without an explicit path, the default location is used and any
/// problem with it falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    match explicit {
        Some(path) if path.exists() => Config::load_from(path),
        Some(path) => {
            log::debug!("{} does not exist, using defaults", path.display());
            Ok(Config::default())
        },
        None => Ok(Config::load()),
    }
}
