//! ampscore-common — Shared types, errors, and configuration used across all AMPscore crates.

pub mod config;
pub mod error;
pub mod record;
pub mod weights;

// Re-export commonly used types
pub use config::ScoringConfig;
pub use error::{AmpscoreError, Result};
pub use weights::WeightVector;
