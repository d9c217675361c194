//! Error handling for the packwire CLI.
//!
//! `CliError` wraps the library's `ConfigError` and adds the failures only the
//! CLI can hit (working directory lookup, writing to stdout). `main` converts
//! it into a miette report.

use miette::Report;
use packwire_config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Assembly, override, or validation errors from the library
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors (current directory, stdout)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Short remediation hint for the error, if one applies
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Config(ConfigError::UnknownMode(_)) => {
                Some("Pass --mode production or --mode development")
            }
            CliError::Config(ConfigError::InvalidOverride { .. } | ConfigError::Load(_)) => {
                Some("Check packwire.toml and PACKWIRE_* environment variables")
            }
            CliError::Config(ConfigError::ContextNotFound { .. }) => {
                Some("Run from the project root or pass --root <DIR>")
            }
            CliError::Config(ConfigError::EntryNotFound { .. }) => {
                Some("Create the missing entry source or adjust source_dir")
            }
            _ => None,
        }
    }
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}
