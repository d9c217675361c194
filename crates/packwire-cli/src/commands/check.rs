//! Check command implementation.
//!
//! Validates the assembled config and the project layout without printing it.

use packwire_config::{ConfigValidator, FsValidator};
use tracing::debug;

use crate::cli::CheckArgs;
use crate::commands::assemble_target;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// 1. Load overrides and assemble the config
/// 2. Check mode invariants (plugins, rules, dev server, source maps)
/// 3. Check the context directory and entry sources exist
///
/// Steps 2 and 3 both run inside [`FsValidator`].
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info(&format!("Checking {} configuration...", args.target.mode));

    let config = assemble_target(&args.target)?;

    FsValidator.validate(&config)?;
    debug!(context = %config.context.display(), "project layout checks passed");

    for group in &config.entries {
        ui::success(&format!(
            "  entry '{}' ({} sources)",
            group.name,
            group.sources.len()
        ));
    }

    ui::success(&format!(
        "Configuration is valid: {} rules, {} plugins",
        config.rules.len(),
        config.plugins.len()
    ));
    Ok(())
}
