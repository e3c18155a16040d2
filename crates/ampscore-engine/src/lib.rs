//! ampscore-engine — Peptide desirability scoring engine.
//!
//! Turns one JSON-shaped peptide record (arbitrary nesting, four origin
//! schemas) into a `ScoreResult`: five rule-based sub-scores combined by a
//! fixed weight vector into a total in [0, 10] and an ordinal category.
//!
//! Scoring a record is a pure computation: no I/O, no shared mutable
//! state, no randomness. A `PeptideScorer` built from one `ScoringConfig`
//! may be shared freely across threads.

pub mod annotations;
pub mod features;
pub mod keys;
pub mod organisms;
pub mod result;
pub mod scorer;
pub mod scorers;

pub use features::FeatureSet;
pub use result::{ScoreCategory, ScoreResult};
pub use scorer::PeptideScorer;
pub use scorers::{Criterion, ScoreBreakdown};
