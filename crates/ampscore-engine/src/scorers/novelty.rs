//! Novelty sub-scorer.
//!
//! Base 5.0, replaced by `10 − max_similarity / 10` when nearest-neighbour
//! similarity records exist. Recognised bioactivity categories add a
//! multifunction bonus; compositional diversity adds a normalised Shannon
//! entropy bonus.

use ampscore_common::config::ScoringConfig;
use ampscore_common::record;
use serde_json::{json, Value};
use std::collections::{BTreeSet, HashMap};

use crate::annotations::extract_similarities;
use crate::features::FeatureSet;
use crate::keys;
use crate::scorers::ScoreBreakdown;

/// Shannon entropy (bits) of the residue distribution. Zero for an empty
/// sequence.
fn sequence_entropy(sequence: &str) -> f64 {
    let length = sequence.chars().count();
    if length == 0 {
        return 0.0;
    }
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in sequence.chars() {
        *counts.entry(c.to_ascii_uppercase()).or_insert(0) += 1;
    }
    let len_f = length as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / len_f;
            -p * p.log2()
        })
        .sum()
}

pub fn score(rec: &Value, _features: &FeatureSet, cfg: &ScoringConfig) -> ScoreBreakdown {
    let nov = &cfg.novelty;
    let mut details = serde_json::Map::new();
    let mut base_score = nov.base;

    let similarities = extract_similarities(rec, nov.max_neighbours);
    if !similarities.is_empty() {
        let max_similarity = similarities.iter().cloned().fold(f64::MIN, f64::max);
        let avg_similarity = similarities.iter().sum::<f64>() / similarities.len() as f64;
        base_score = 10.0 - max_similarity / nov.similarity_divisor;
        details.insert("max_similarity".into(), json!(max_similarity));
        details.insert("avg_similarity".into(), json!(avg_similarity));
        details.insert("novelty_from_similarity".into(), json!(base_score));
    }

    // Multifunctionality: distinct recognised bioactivity categories,
    // substring-matched over the free-text activity tags.
    let mut activities: BTreeSet<&str> = BTreeSet::new();
    if let Some(Value::Array(tags)) = record::locate(rec, keys::BIOLOGICAL_ACTIVITY) {
        for tag in tags {
            let Some(text) = tag.as_str() else { continue };
            let lower = text.to_lowercase();
            for marker in &nov.activity_markers {
                if lower.contains(marker.as_str()) {
                    activities.insert(marker.as_str());
                }
            }
        }
    }
    let multifunction_bonus = activities.len() as f64 * nov.multifunction_bonus;
    details.insert("unique_activities".into(), json!(activities));
    details.insert("multifunction_bonus".into(), json!(multifunction_bonus));

    let sequence = record::locate_str(rec, keys::SEQUENCE).unwrap_or_default();
    let entropy = sequence_entropy(sequence);
    let composition_bonus = entropy / nov.entropy_norm * nov.entropy_weight;
    details.insert("composition_entropy".into(), json!(entropy));
    details.insert("composition_bonus".into(), json!(composition_bonus));

    let final_score = (base_score + multifunction_bonus + composition_bonus).clamp(0.0, 10.0);
    details.insert("final_score".into(), json!(final_score));

    ScoreBreakdown::new(final_score, Value::Object(details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cfg() -> ScoringConfig {
        ScoringConfig::default()
    }

    fn run(rec: Value) -> ScoreBreakdown {
        let seq = rec
            .get("Sequence")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        score(&rec, &FeatureSet::from_sequence(&seq), &cfg())
    }

    #[test]
    fn test_entropy_zero_for_monotone_sequence() {
        assert_eq!(sequence_entropy("AAAA"), 0.0);
        assert_eq!(sequence_entropy(""), 0.0);
    }

    #[test]
    fn test_entropy_maximal_for_uniform_alphabet() {
        // All 20 residues once: entropy = log2(20) ≈ 4.3219
        let e = sequence_entropy("ACDEFGHIKLMNPQRSTVWY");
        assert!((e - 20.0f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_overrides_base() {
        let rec = json!({
            "Sequence": "AAAA",
            "Similar Sequences": [
                {"similarity": 80.0},
                {"similarity": 40.0}
            ]
        });
        let b = run(rec);
        // base 10 − 80/10 = 2.0; monotone sequence adds no entropy bonus
        assert!((b.score - 2.0).abs() < 1e-9);
        assert_eq!(b.details["max_similarity"], json!(80.0));
    }

    #[test]
    fn test_multifunction_bonus_counts_distinct_categories() {
        let rec = json!({
            "Sequence": "AAAA",
            "Biological Activity": [
                "Antibacterial (Gram+)",
                "antibacterial again",
                "Antifungal",
                "Insecticidal"
            ]
        });
        let b = run(rec);
        // base 5.0 + 2 × 0.5; "insecticidal" is not a recognised category
        assert!((b.score - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_composition_bonus_added_to_base() {
        let rec = json!({ "Sequence": "ACDEFGHIKLMNPQRSTVWY" });
        let b = run(rec);
        // 5.0 + log2(20)/4.32 × 2 ≈ 7.0
        let expected = 5.0 + 20.0f64.log2() / 4.32 * 2.0;
        assert!((b.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_no_sequence_no_entropy_bonus() {
        let rec = json!({ "Similar Sequences": [{"similarity": 10}] });
        let b = run(rec);
        assert!((b.score - 9.0).abs() < 1e-9);
    }
}
