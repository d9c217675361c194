//! Command implementations.

mod check;
mod print;

pub use check::execute as check_execute;
pub use print::{execute as print_execute, render};

use std::path::PathBuf;

use packwire_config::{BuildConfig, ConfigAssembler, Overrides};
use tracing::debug;

use crate::cli::TargetArgs;
use crate::error::Result;

/// Resolve the root, load overrides, and assemble the config for `target`.
pub fn assemble_target(target: &TargetArgs) -> Result<BuildConfig> {
    let root = resolve_root(target.root.as_ref())?;

    let overrides = match &target.config {
        Some(path) => Overrides::load_file(root.join(path))?,
        None => Overrides::load(&root)?,
    };
    debug!(?overrides, "loaded overrides");

    let assembler = ConfigAssembler::with_overrides(overrides)?;
    Ok(assembler.assemble(target.mode, &root))
}

fn resolve_root(root: Option<&PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match root {
        Some(path) => cwd.join(path),
        None => cwd,
    })
}
