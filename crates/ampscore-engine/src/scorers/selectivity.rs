//! Selectivity sub-scorer: antimicrobial activity versus host toxicity.
//!
//! Experimental path when hemolysis data exists (direct percentage or the
//! HC50-derived estimate); predictive path penalises excess
//! hydrophobicity and rewards moderate cationic charge. A diversity bonus
//! per distinct target group (bacteria / fungi / cancer) applies on top
//! of either path.

use ampscore_common::config::ScoringConfig;
use serde_json::{json, Value};
use std::collections::BTreeSet;

use crate::annotations::extract_hemolysis;
use crate::features::FeatureSet;
use crate::organisms::classify_targets;
use crate::scorers::ScoreBreakdown;

pub fn score(rec: &Value, features: &FeatureSet, cfg: &ScoringConfig) -> ScoreBreakdown {
    let sel = &cfg.selectivity;
    let mut details = serde_json::Map::new();

    let hemolysis = extract_hemolysis(rec, sel);
    details.insert("hemolysis_data".into(), json!(hemolysis));

    let base_score = if let Some(pct) = hemolysis {
        let hemolysis_score = sel.hemolysis_tiers.score(pct);
        details.insert("path".into(), json!("experimental"));
        details.insert("hemolysis_score".into(), json!(hemolysis_score));
        hemolysis_score
    } else {
        let excess = (features.hydrophobicity - sel.hydrophobicity_ceiling).max(0.0);
        let hydro_penalty = excess * sel.hydrophobicity_penalty_slope;

        let charge_bonus = if features.net_charge >= sel.charge_bonus_range.0
            && features.net_charge <= sel.charge_bonus_range.1
        {
            sel.charge_bonus
        } else if features.net_charge > sel.charge_excess_threshold {
            -sel.charge_excess_penalty
        } else {
            0.0
        };

        let base = sel.predicted_base - hydro_penalty + charge_bonus;
        details.insert("path".into(), json!("predicted"));
        details.insert("hydrophobicity_penalty".into(), json!(hydro_penalty));
        details.insert("charge_bonus".into(), json!(charge_bonus));
        details.insert("predicted_selectivity".into(), json!(base));
        base
    };

    // Activity against several target kingdoms signals a favourable
    // therapeutic window.
    let groups: BTreeSet<&str> = classify_targets(rec, &cfg.organisms)
        .keys()
        .filter_map(|bucket| bucket.diversity_group())
        .collect();
    let diversity_bonus = groups.len() as f64 * sel.diversity_bonus_per_group;

    let final_score = (base_score + diversity_bonus).clamp(0.0, 10.0);
    details.insert("target_groups".into(), json!(groups));
    details.insert("diversity_bonus".into(), json!(diversity_bonus));
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

    #[test]
    fn test_experimental_hemolysis_tiers() {
        let rec = json!({"Sequence": "KWK", "Hemolysis": 4.0});
        let b = score(&rec, &FeatureSet::from_sequence("KWK"), &cfg());
        assert!((b.score - 10.0).abs() < 1e-9);

        let rec = json!({"Sequence": "KWK", "Hemolysis": 30.0});
        let b = score(&rec, &FeatureSet::from_sequence("KWK"), &cfg());
        assert!((b.score - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_predictive_hydrophobicity_penalty_and_charge_bonus() {
        // AVILWFYMKK: 8 hydrophobic of 10 → 0.8; penalty (0.8−0.7)×10 = 1.0.
        // Net charge 2 → bonus +2.0. Base 7 − 1 + 2 = 8.0.
        let seq = "AVILWFYMKK";
        let rec = json!({ "Sequence": seq });
        let b = score(&rec, &FeatureSet::from_sequence(seq), &cfg());
        assert!((b.score - 8.0).abs() < 1e-6);
        assert_eq!(b.details["path"], "predicted");
    }

    #[test]
    fn test_predictive_excess_charge_penalised() {
        // KKKKKKKKK: net charge 9 > 8 → −1.0; no hydrophobicity penalty.
        let seq = "KKKKKKKKK";
        let rec = json!({ "Sequence": seq });
        let b = score(&rec, &FeatureSet::from_sequence(seq), &cfg());
        assert!((b.score - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_diversity_bonus_counts_groups_once() {
        // Gram+ and Gram− collapse into one bacteria group; fungi adds one.
        let rec = json!({
            "Sequence": "KWK",
            "Hemolysis": 4.0,
            "Target Organism": [
                {"name": "Staphylococcus aureus"},
                {"name": "E.coli"},
                {"name": "Candida albicans"}
            ]
        });
        let b = score(&rec, &FeatureSet::from_sequence("KWK"), &cfg());
        // 10.0 base clamps back to 10 even with +1.0 bonus
        assert!((b.score - 10.0).abs() < 1e-9);
        assert_eq!(b.details["diversity_bonus"], json!(1.0));
    }

    #[test]
    fn test_score_clamped_to_range() {
        let rec = json!({"Sequence": "WWWWWWWWWW"});
        let b = score(&rec, &FeatureSet::from_sequence("WWWWWWWWWW"), &cfg());
        assert!(b.score >= 0.0 && b.score <= 10.0);
    }
}
