//! ampscore-batch — Batch scoring and index generation over record files.
//!
//! The engine scores one record at a time and performs no I/O; this crate
//! is the external driver: it walks a directory of JSON records, fans
//! scoring out over a bounded number of concurrent tasks, and persists
//! per-record results plus merged artefacts (ranked score list, peptide
//! index). Individual record failures are counted and logged, never fatal
//! to the batch.

pub mod index;
pub mod pipeline;

pub use index::IndexEntry;
pub use pipeline::{run_batch, BatchJob, BatchMode, BatchSummary};
