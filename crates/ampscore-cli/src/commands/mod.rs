//! Subcommand implementations.

pub mod batch;
pub mod index;
pub mod init_config;
pub mod score;

use std::path::Path;

use ampscore_common::ScoringConfig;
use anyhow::{bail, Context, Result};
use tracing::info;

/// Load the scoring configuration, falling back to defaults when no path
/// is given. Weights that do not sum to 1 are renormalised with a notice
/// rather than rejected.
pub(crate) fn load_config(path: Option<&Path>) -> Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };

    let mut config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => ScoringConfig::from_json(path),
        _ => ScoringConfig::from_yaml(path),
    }
    .with_context(|| format!("failed to load scoring config from {}", path.display()))?;

    if !config.weights.validate() {
        let w = config.weights.as_array();
        if w.iter().any(|v| *v < 0.0) {
            bail!("scoring weights must be non-negative");
        }
        info!("weights do not sum to 1, renormalising");
        config.weights.normalise();
    }
    Ok(config)
}
