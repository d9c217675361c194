//! Print command: write the assembled config to stdout as JSON.

use std::io::Write;

use packwire_config::BuildConfig;
use tracing::info;

use crate::cli::PrintArgs;
use crate::commands::assemble_target;
use crate::error::Result;

pub fn execute(args: PrintArgs) -> Result<()> {
    let config = assemble_target(&args.target)?;
    info!(
        mode = %config.mode,
        plugins = config.plugins.len(),
        "printing build config"
    );

    let json = render(&config, args.compact)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Serialize the config, pretty-printed unless `compact`
pub fn render(config: &BuildConfig, compact: bool) -> Result<String> {
    let json = if compact {
        config.to_json()?
    } else {
        config.to_json_pretty()?
    };
    Ok(json)
}
