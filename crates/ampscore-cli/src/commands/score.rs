//! `ampscore score` — score one record file and emit JSON.

use ampscore_engine::{PeptideScorer, ScoreResult};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::cli::ScoreArgs;

pub fn run(args: ScoreArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let scorer = PeptideScorer::new(config);

    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let parsed: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;
    let fallback = args.id.clone().or_else(|| {
        args.input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
    });

    let results: Vec<ScoreResult> = match &parsed {
        Value::Array(items) => items
            .iter()
            .map(|rec| scorer.score(rec, fallback.as_deref()))
            .collect(),
        single => vec![scorer.score(single, fallback.as_deref())],
    };

    // A single-record file prints a single object, not a one-element array.
    let rendered = if results.len() == 1 {
        serde_json::to_string_pretty(&results[0])?
    } else {
        serde_json::to_string_pretty(&results)?
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(records = results.len(), path = %path.display(), "results written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
