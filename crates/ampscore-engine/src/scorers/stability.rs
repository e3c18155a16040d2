//! Stability sub-scorer.
//!
//! Structure-driven: disulfide potential adds rigidity, moderate proline
//! helps, excess glycine hurts. Any experimental stability annotation
//! (regardless of its value) adds a flat confidence bonus.

use ampscore_common::config::ScoringConfig;
use serde_json::{json, Value};

use crate::annotations::has_stability_annotation;
use crate::features::FeatureSet;
use crate::scorers::ScoreBreakdown;

pub fn score(rec: &Value, features: &FeatureSet, cfg: &ScoringConfig) -> ScoreBreakdown {
    let stab = &cfg.stability;
    let mut details = serde_json::Map::new();
    let mut base_score = stab.base;

    let potential_bonds = features.cys_bonds_potential;
    let disulfide_bonus = if potential_bonds >= 2 {
        (potential_bonds as f64 * stab.disulfide_bonus_per_bond).min(stab.disulfide_bonus_cap)
    } else if potential_bonds == 1 {
        stab.single_bond_bonus
    } else {
        0.0
    };
    details.insert("disulfide_bonds".into(), json!(potential_bonds));
    details.insert("disulfide_bonus".into(), json!(disulfide_bonus));

    let proline_bonus = if features.proline_ratio >= stab.proline_optimal.0
        && features.proline_ratio <= stab.proline_optimal.1
    {
        stab.proline_bonus
    } else if features.proline_ratio > stab.proline_excess_threshold {
        -stab.proline_excess_penalty
    } else {
        0.0
    };

    let glycine_penalty =
        ((features.glycine_ratio - stab.glycine_threshold) * stab.glycine_penalty_slope).max(0.0);

    details.insert("proline_bonus".into(), json!(proline_bonus));
    details.insert("glycine_penalty".into(), json!(glycine_penalty));

    let experimental = has_stability_annotation(rec);
    if experimental {
        base_score += stab.experimental_bonus;
    }
    details.insert("experimental_data".into(), json!(experimental));

    let final_score =
        (base_score + disulfide_bonus + proline_bonus - glycine_penalty).clamp(0.0, 10.0);
    details.insert("final_score".into(), json!(final_score));

    ScoreBreakdown::new(final_score, Value::Object(details))
}
