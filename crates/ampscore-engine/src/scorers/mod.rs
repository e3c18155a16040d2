//! The five rule-based sub-scorers.
//!
//! Every sub-scorer is a free function `(record, features, config) →
//! ScoreBreakdown`; no trait object or inheritance is involved. The
//! aggregator walks `Criterion::ALL` through the strategy table below, so
//! adding a criterion means adding an enum variant, a function, and a
//! weight field — no branching anywhere else.

pub mod efficacy;
pub mod novelty;
pub mod selectivity;
pub mod stability;
pub mod synthesis;

use ampscore_common::config::ScoringConfig;
use ampscore_common::weights::WeightVector;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::features::FeatureSet;

/// Scoring criterion. Order matches the weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Efficacy,
    Selectivity,
    Stability,
    Synthesis,
    Novelty,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Efficacy,
        Criterion::Selectivity,
        Criterion::Stability,
        Criterion::Synthesis,
        Criterion::Novelty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Efficacy => "efficacy",
            Criterion::Selectivity => "selectivity",
            Criterion::Stability => "stability",
            Criterion::Synthesis => "synthesis",
            Criterion::Novelty => "novelty",
        }
    }

    pub fn weight(&self, weights: &WeightVector) -> f64 {
        match self {
            Criterion::Efficacy => weights.efficacy,
            Criterion::Selectivity => weights.selectivity,
            Criterion::Stability => weights.stability,
            Criterion::Synthesis => weights.synthesis,
            Criterion::Novelty => weights.novelty,
        }
    }

    /// Strategy lookup: the sub-scorer implementing this criterion.
    pub fn scorer(&self) -> ScoreFn {
        match self {
            Criterion::Efficacy => efficacy::score,
            Criterion::Selectivity => selectivity::score,
            Criterion::Stability => stability::score,
            Criterion::Synthesis => synthesis::score,
            Criterion::Novelty => novelty::score,
        }
    }
}

/// Uniform sub-scorer signature.
pub type ScoreFn = fn(&Value, &FeatureSet, &ScoringConfig) -> ScoreBreakdown;

/// Score plus rationale trace shared by all criteria.
///
/// `details` records which path was taken (experimental vs predicted) and
/// which thresholds fired. It is informational only — audit and debugging —
/// never an input to downstream computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub details: Value,
}

impl ScoreBreakdown {
    pub fn new(score: f64, details: Value) -> Self {
        Self { score, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criterion_order_matches_weight_array() {
        let w = WeightVector::default();
        let by_criterion: Vec<f64> = Criterion::ALL.iter().map(|c| c.weight(&w)).collect();
        assert_eq!(by_criterion, w.as_array().to_vec());
    }

    #[test]
    fn test_criterion_names_stable() {
        let names: Vec<&str> = Criterion::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["efficacy", "selectivity", "stability", "synthesis", "novelty"]);
    }
}
