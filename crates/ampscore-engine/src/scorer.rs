//! Composite score computation: runs the five sub-scorers through the
//! strategy table and aggregates via the weight vector.

use std::collections::BTreeMap;

use ampscore_common::config::ScoringConfig;
use ampscore_common::record;
use serde_json::Value;
use tracing::debug;

use crate::features::FeatureSet;
use crate::keys;
use crate::organisms;
use crate::result::{resolve_identifier, round2, ScoreCategory, ScoreResult, SCHEMA_VERSION};
use crate::scorers::Criterion;

/// The scoring engine. Holds one immutable configuration; safe to share
/// across threads for concurrent scoring of disjoint records.
#[derive(Debug, Clone)]
pub struct PeptideScorer {
    config: ScoringConfig,
}

impl PeptideScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one record.
    ///
    /// `fallback_id` is the caller-supplied identifier (typically the
    /// source filename stem) used when the record lacks a canonical ID.
    ///
    /// Never fails: a record without a sequence field yields a zeroed
    /// result with an explicit error marker. A present-but-empty sequence
    /// is scored normally through the predictive paths.
    pub fn score(&self, rec: &Value, fallback_id: Option<&str>) -> ScoreResult {
        let identifier = resolve_identifier(rec, fallback_id);

        let Some(sequence) = record::locate_str(rec, keys::SEQUENCE) else {
            debug!(identifier = %identifier, "record has no sequence field");
            return self.no_sequence_result(identifier);
        };

        let features = FeatureSet::from_sequence(sequence);

        let mut sub_scores = BTreeMap::new();
        let mut weighted_sub_scores = BTreeMap::new();
        let mut breakdown = BTreeMap::new();
        let mut total = 0.0;

        for criterion in Criterion::ALL {
            let result = (criterion.scorer())(rec, &features, &self.config);
            let weight = criterion.weight(&self.config.weights);
            total += result.score * weight;

            let name = criterion.as_str().to_string();
            sub_scores.insert(name.clone(), round2(result.score));
            weighted_sub_scores.insert(name.clone(), round2(result.score * weight));
            breakdown.insert(name, result.details);
        }

        let total = total.clamp(0.0, 10.0);
        let category = ScoreCategory::from_total(total);
        let buckets = organisms::classify_targets(rec, &self.config.organisms);

        debug!(identifier = %identifier, total, category = category.as_str(), "record scored");

        ScoreResult {
            identifier,
            total: round2(total),
            category,
            sub_scores,
            weighted_sub_scores,
            weights: self.config.weights.clone(),
            features,
            breakdown,
            target_organisms: organisms::buckets_to_json(&buckets),
            schema_version: SCHEMA_VERSION.to_string(),
            timestamp: None,
            error: None,
        }
    }

    fn no_sequence_result(&self, identifier: String) -> ScoreResult {
        let zeroes: BTreeMap<String, f64> = Criterion::ALL
            .iter()
            .map(|c| (c.as_str().to_string(), 0.0))
            .collect();

        ScoreResult {
            identifier,
            total: 0.0,
            category: ScoreCategory::from_total(0.0),
            sub_scores: zeroes.clone(),
            weighted_sub_scores: zeroes,
            weights: self.config.weights.clone(),
            features: FeatureSet::default(),
            breakdown: BTreeMap::new(),
            target_organisms: Value::Object(serde_json::Map::new()),
            schema_version: SCHEMA_VERSION.to_string(),
            timestamp: None,
            error: Some("No sequence found".to_string()),
        }
    }
}

impl Default for PeptideScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_is_clamped_weighted_sum() {
        let scorer = PeptideScorer::default();
        let rec = json!({
            "Sequence": "GIGKFLHSAGKFGKAFVGEIMKS",
            "Target Organism": [{"name": "E.coli", "mic_value": 2.0}]
        });
        let result = scorer.score(&rec, None);

        let weights = scorer.config().weights.as_array();
        let recomputed: f64 = Criterion::ALL
            .iter()
            .zip(weights.iter())
            .map(|(c, w)| result.sub_scores[c.as_str()] * w)
            .sum();
        // Rounded sub-scores can shift the recomputed total slightly.
        assert!((result.total - recomputed).abs() < 0.05);
        assert!(result.total >= 0.0 && result.total <= 10.0);
    }

    #[test]
    fn test_missing_sequence_marks_error() {
        let scorer = PeptideScorer::default();
        let result = scorer.score(&json!({"DRAMP ID": "DRAMP9"}), None);
        assert_eq!(result.error.as_deref(), Some("No sequence found"));
        assert_eq!(result.total, 0.0);
        assert!(result.sub_scores.values().all(|&s| s == 0.0));
        assert_eq!(result.identifier, "DRAMP9");
    }

    #[test]
    fn test_empty_sequence_is_scored_not_error() {
        let scorer = PeptideScorer::default();
        let result = scorer.score(&json!({"Sequence": ""}), Some("stem"));
        assert!(result.error.is_none());
        // Predictive paths still produce non-zero sub-scores.
        assert!(result.sub_scores["efficacy"] > 0.0);
    }

    #[test]
    fn test_idempotent() {
        let scorer = PeptideScorer::default();
        let rec = json!({
            "Sequence": "KWKLFKKIGAVLKVL",
            "Hemolysis": 12.0,
            "Biological Activity": ["Antibacterial", "Antifungal"]
        });
        let a = serde_json::to_value(scorer.score(&rec, Some("x"))).unwrap();
        let b = serde_json::to_value(scorer.score(&rec, Some("x"))).unwrap();
        assert_eq!(a, b);
    }
}
