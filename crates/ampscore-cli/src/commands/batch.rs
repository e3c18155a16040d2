//! `ampscore batch` — score a directory of record files.

use ampscore_batch::{run_batch, BatchJob, BatchMode};
use anyhow::Result;
use tracing::{info, warn};

use crate::cli::{BatchArgs, OutputMode};

pub async fn run(args: BatchArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let job = BatchJob {
        input_dir: args.input,
        output_dir: args.output,
        workers: args.workers,
        mode: match args.mode {
            OutputMode::Score => BatchMode::Score,
            OutputMode::Index => BatchMode::Index,
            OutputMode::Both => BatchMode::Both,
        },
        pattern: args.pattern,
    };

    let summary = run_batch(job, config).await?;
    info!(
        processed = summary.processed,
        errors = summary.errors,
        elapsed_secs = format!("{:.2}", summary.elapsed_secs),
        files_per_second = format!("{:.1}", summary.files_per_second),
        "batch finished"
    );
    for file in &summary.error_files {
        warn!(file = %file, "failed during batch");
    }
    Ok(())
}
