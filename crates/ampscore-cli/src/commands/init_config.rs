//! `ampscore init-config` — emit a template scoring configuration.

use ampscore_common::ScoringConfig;
use anyhow::{bail, Result};
use tracing::info;

use crate::cli::InitConfigArgs;

pub fn run(args: InitConfigArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }

    ScoringConfig::default().to_yaml(&args.output)?;
    info!(path = %args.output.display(), "template configuration written");
    Ok(())
}
