//! Directory batch pipeline.
//!
//! Flow for one batch run:
//!   1. Discover input files (`SPADE_N`/`SPADE_UN` subdirectories when
//!      present, otherwise `*.json` directly under the input dir)
//!   2. Fan files out over a bounded pool of scoring tasks
//!   3. Persist one `scored_<id>.json` per record
//!   4. Merge artefacts: `all_scores.json` ranked by total descending,
//!      `peptide_index.json` sorted by ID
//!   5. Summarise counts and throughput
//!
//! Per-file failures (unreadable, malformed JSON) are logged and counted
//! in the summary; they never abort the batch.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use ampscore_common::{AmpscoreError, Result, ScoringConfig};
use ampscore_engine::{PeptideScorer, ScoreResult};
use chrono::Utc;
use futures_util::{stream, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::index::IndexEntry;

/// Curated source subdirectories checked before falling back to a flat
/// input directory.
const PREFERRED_SUBDIRS: [&str; 2] = ["SPADE_N", "SPADE_UN"];

/// Merged ranked-score artefact filename.
pub const ALL_SCORES_FILE: &str = "all_scores.json";
/// Merged index artefact filename.
pub const PEPTIDE_INDEX_FILE: &str = "peptide_index.json";

// ── Job config ────────────────────────────────────────────────────────────────

/// What a batch run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    Score,
    Index,
    Both,
}

impl BatchMode {
    pub fn wants_scores(&self) -> bool {
        matches!(self, BatchMode::Score | BatchMode::Both)
    }

    pub fn wants_index(&self) -> bool {
        matches!(self, BatchMode::Index | BatchMode::Both)
    }
}

/// Parameters for a single batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchJob {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Upper bound on concurrently processed files.
    pub workers: usize,
    pub mode: BatchMode,
    /// Substring filter on filenames; `None` keeps everything.
    pub pattern: Option<String>,
}

impl Default for BatchJob {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("scoring_results"),
            workers: 8,
            mode: BatchMode::Both,
            pattern: None,
        }
    }
}

// ── Result summary ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub total_files: usize,
    pub processed: usize,
    pub errors: usize,
    pub elapsed_secs: f64,
    pub files_per_second: f64,
    pub error_files: Vec<String>,
}

/// Per-file processing outcome, merged after the concurrent phase.
struct FileOutcome {
    filename: String,
    results: Vec<ScoreResult>,
    entries: Vec<IndexEntry>,
    error: Option<String>,
}

// ── Pipeline orchestrator ─────────────────────────────────────────────────────

/// Runs one batch job to completion and returns the summary.
///
/// Fails only on environment-level problems (missing input directory,
/// unwritable output directory, unwritable merged artefacts); individual
/// record files degrade to summary error entries.
pub async fn run_batch(job: BatchJob, config: ScoringConfig) -> Result<BatchSummary> {
    let t0 = Instant::now();

    let files = discover_files(&job.input_dir, job.pattern.as_deref()).await?;
    let total_files = files.len();
    info!(
        files = total_files,
        input = %job.input_dir.display(),
        output = %job.output_dir.display(),
        mode = ?job.mode,
        "starting batch run"
    );

    tokio::fs::create_dir_all(&job.output_dir).await?;

    let scorer = Arc::new(PeptideScorer::new(config));
    let workers = job.workers.max(1);
    let mode = job.mode;

    let outcomes: Vec<FileOutcome> = stream::iter(files)
        .map(|path| {
            let scorer = Arc::clone(&scorer);
            let out_dir = job.output_dir.clone();
            async move { process_file(&path, &scorer, &out_dir, mode).await }
        })
        .buffer_unordered(workers)
        .collect()
        .await;

    let mut all_results = Vec::new();
    let mut entries = Vec::new();
    let mut error_files = Vec::new();
    for outcome in outcomes {
        match outcome.error {
            Some(err) => {
                warn!(file = %outcome.filename, error = %err, "file failed, skipping");
                error_files.push(outcome.filename);
            }
            None => {
                all_results.extend(outcome.results);
                entries.extend(outcome.entries);
            }
        }
    }
    error_files.sort();

    if mode.wants_scores() {
        all_results.sort_by(|a, b| b.total.total_cmp(&a.total));
        let path = job.output_dir.join(ALL_SCORES_FILE);
        tokio::fs::write(&path, serde_json::to_vec_pretty(&all_results)?).await?;
        info!(records = all_results.len(), path = %path.display(), "merged scores written");
    }

    if mode.wants_index() {
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        let path = job.output_dir.join(PEPTIDE_INDEX_FILE);
        tokio::fs::write(&path, serde_json::to_vec_pretty(&entries)?).await?;
        info!(entries = entries.len(), path = %path.display(), "peptide index written");
    }

    let elapsed_secs = t0.elapsed().as_secs_f64();
    let processed = total_files - error_files.len();
    let summary = BatchSummary {
        total_files,
        processed,
        errors: error_files.len(),
        elapsed_secs,
        files_per_second: if elapsed_secs > 0.0 {
            processed as f64 / elapsed_secs
        } else {
            0.0
        },
        error_files,
    };
    info!(
        processed = summary.processed,
        errors = summary.errors,
        elapsed_secs = summary.elapsed_secs,
        "batch run complete"
    );
    Ok(summary)
}

/// Input discovery. Prefers the curated subdirectories when at least one
/// exists; otherwise takes `*.json` directly under the input dir. Paths
/// come back sorted so runs are reproducible.
async fn discover_files(input_dir: &Path, pattern: Option<&str>) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(AmpscoreError::Batch(format!(
            "input directory not found: {}",
            input_dir.display()
        )));
    }

    let mut roots: Vec<PathBuf> = PREFERRED_SUBDIRS
        .iter()
        .map(|sub| input_dir.join(sub))
        .filter(|p| p.is_dir())
        .collect();
    if roots.is_empty() {
        roots.push(input_dir.to_path_buf());
    }

    let mut files = Vec::new();
    for root in roots {
        let mut dir = tokio::fs::read_dir(&root).await?;
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(pat) = pattern {
                if !entry.file_name().to_string_lossy().contains(pat) {
                    continue;
                }
            }
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

async fn process_file(
    path: &Path,
    scorer: &PeptideScorer,
    out_dir: &Path,
    mode: BatchMode,
) -> FileOutcome {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match score_file(path, &filename, scorer, out_dir, mode).await {
        Ok((results, entries)) => FileOutcome {
            filename,
            results,
            entries,
            error: None,
        },
        Err(e) => FileOutcome {
            filename,
            results: Vec::new(),
            entries: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}

/// Score and/or index every record in one file. A file holds either a
/// single record object or an array of records.
async fn score_file(
    path: &Path,
    filename: &str,
    scorer: &PeptideScorer,
    out_dir: &Path,
    mode: BatchMode,
) -> Result<(Vec<ScoreResult>, Vec<IndexEntry>)> {
    let bytes = tokio::fs::read(path).await?;
    let parsed: Value = serde_json::from_slice(&bytes)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned());

    let records: Vec<&Value> = match &parsed {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    let mut results = Vec::new();
    let mut entries = Vec::new();
    for rec in records {
        if mode.wants_index() {
            if let Some(entry) = IndexEntry::from_record(rec, filename) {
                entries.push(entry);
            }
        }
        if mode.wants_scores() {
            let mut result = scorer.score(rec, stem.as_deref());
            result.timestamp = Some(Utc::now().to_rfc3339());

            let out_path = out_dir.join(format!("scored_{}.json", safe_stem(&result.identifier)));
            tokio::fs::write(&out_path, serde_json::to_vec_pretty(&result)?).await?;
            debug!(identifier = %result.identifier, total = result.total, "record scored and written");
            results.push(result);
        }
    }
    Ok((results, entries))
}

/// Identifiers can contain characters unsafe in filenames; collapse
/// everything outside `[A-Za-z0-9_-]` to underscores.
fn safe_stem(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_stem() {
        assert_eq!(safe_stem("DRAMP00001"), "DRAMP00001");
        assert_eq!(safe_stem("Magainin 2 (frog)"), "Magainin_2__frog_");
    }

    #[test]
    fn test_mode_flags() {
        assert!(BatchMode::Both.wants_scores() && BatchMode::Both.wants_index());
        assert!(BatchMode::Score.wants_scores() && !BatchMode::Score.wants_index());
        assert!(!BatchMode::Index.wants_scores() && BatchMode::Index.wants_index());
    }
}
