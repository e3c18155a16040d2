//! Efficacy sub-scorer.
//!
//! Experimental path when MIC measurements exist: each measurement maps
//! through the configured MIC tier table and the per-measurement scores
//! are averaged. Predictive path otherwise: peaked windows over net
//! charge and hydrophobic ratio, averaged. Either way the base score is
//! then damped by a sequence-length factor and clamped to [0, 10].

use ampscore_common::config::ScoringConfig;
use ampscore_common::record;
use serde_json::{json, Value};

use crate::annotations::extract_mic_values;
use crate::features::FeatureSet;
use crate::keys;
use crate::scorers::ScoreBreakdown;

pub fn score(rec: &Value, features: &FeatureSet, cfg: &ScoringConfig) -> ScoreBreakdown {
    let eff = &cfg.efficacy;
    let mut details = serde_json::Map::new();

    let mic_values = extract_mic_values(rec);
    details.insert("mic_data".into(), json!(mic_values));

    let base_score = if !mic_values.is_empty() {
        let mic_scores: Vec<f64> = mic_values
            .iter()
            .map(|m| eff.mic_tiers.score(m.value))
            .collect();
        let base = mic_scores.iter().sum::<f64>() / mic_scores.len() as f64;
        details.insert("path".into(), json!("experimental"));
        details.insert("mic_based_score".into(), json!(base));
        base
    } else {
        let charge_score = eff.charge_window.score(features.net_charge as f64);
        let hydro_score = eff.hydrophobicity_window.score(features.hydrophobicity);
        let base = (charge_score + hydro_score) / 2.0;
        details.insert("path".into(), json!("predicted"));
        details.insert("charge_score".into(), json!(charge_score));
        details.insert("hydrophobicity_score".into(), json!(hydro_score));
        details.insert("predicted_score".into(), json!(base));
        base
    };

    let length = record::locate_str(rec, keys::SEQUENCE)
        .map(|s| s.chars().count())
        .unwrap_or(0);
    let length_factor = if length >= eff.length_optimal.0 && length <= eff.length_optimal.1 {
        1.0
    } else if length >= eff.length_acceptable.0 && length <= eff.length_acceptable.1 {
        eff.length_factor_acceptable
    } else {
        eff.length_factor_poor
    };

    let final_score = (base_score * length_factor).clamp(0.0, 10.0);
    details.insert("length_factor".into(), json!(length_factor));
    details.insert("final_score".into(), json!(final_score));

    ScoreBreakdown::new(final_score, Value::Object(details))
}
