//! `ampscore index` — build the peptide index without scoring.

use ampscore_batch::{run_batch, BatchJob, BatchMode};
use ampscore_common::ScoringConfig;
use anyhow::Result;
use tracing::info;

use crate::cli::IndexArgs;

pub async fn run(args: IndexArgs) -> Result<()> {
    let job = BatchJob {
        input_dir: args.input,
        output_dir: args.output,
        workers: args.workers,
        mode: BatchMode::Index,
        ..Default::default()
    };

    let summary = run_batch(job, ScoringConfig::default()).await?;
    info!(
        processed = summary.processed,
        errors = summary.errors,
        "index build finished"
    );
    Ok(())
}
