//! Command-line interface definition.
//!
//! - `packwire print` - Print the assembled config as JSON
//! - `packwire check` - Validate the assembled config against the project on disk

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use packwire_config::BuildMode;

/// packwire - mode-aware build configuration for asset bundlers
#[derive(Parser, Debug)]
#[command(
    name = "packwire",
    version,
    about = "Assemble production/development bundler configs",
    long_about = "packwire assembles the bundler configuration for a project: entry groups,\n\
                  asset rules, plugins, source maps and dev server settings, all chosen\n\
                  by the build mode."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled build config as JSON
    ///
    /// The output is the descriptor handed to the external bundler.
    Print(PrintArgs),

    /// Validate the assembled config and check entry sources exist
    Check(CheckArgs),
}

/// Options shared by every command that assembles a config
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Build mode: production or development
    #[arg(short, long, value_parser = parse_mode, value_name = "MODE")]
    pub mode: BuildMode,

    /// Project root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Override file (defaults to <root>/packwire.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

/// Parse a build mode, rejecting anything but `production`/`development`.
///
/// # Errors
///
/// Returns an error message naming the rejected value.
pub fn parse_mode(s: &str) -> Result<BuildMode, String> {
    s.parse::<BuildMode>().map_err(|e| e.to_string())
}
