//! packwire CLI - command-line front end for the build config assembler.
//!
//! The assembler in `packwire-config` has no I/O of its own; this crate is the
//! enclosing tool that supplies the mode flag, loads overrides from disk and
//! the environment, and hands the assembled config to stdout or the
//! filesystem validator.
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `print` and `check`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status lines on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
