//! Synthesizability sub-scorer.
//!
//! Solid-phase synthesis difficulty: short sequences score high, rare
//! residues (Trp/Tyr/Cys) and disulfide pairing complexity subtract,
//! repetitive composition adds. The score is floored — synthesis is never
//! impossible, only maximally difficult.

use ampscore_common::config::ScoringConfig;
use ampscore_common::record;
use serde_json::{json, Value};
use std::collections::BTreeSet;

use crate::features::FeatureSet;
use crate::keys;
use crate::scorers::ScoreBreakdown;

pub fn score(rec: &Value, features: &FeatureSet, cfg: &ScoringConfig) -> ScoreBreakdown {
    let syn = &cfg.synthesis;
    let mut details = serde_json::Map::new();

    let sequence: String = record::locate_str(rec, keys::SEQUENCE)
        .unwrap_or_default()
        .to_uppercase();
    let length = sequence.chars().count();

    let length_score = syn.length_tiers.score(length as f64);
    details.insert("length".into(), json!(length));
    details.insert("length_score".into(), json!(length_score));

    let rare_count = sequence
        .chars()
        .filter(|c| syn.rare_residues.contains(*c))
        .count();
    let rare_penalty = rare_count as f64 * syn.rare_residue_penalty;
    details.insert("rare_amino_acids".into(), json!(rare_count));
    details.insert("rare_penalty".into(), json!(rare_penalty));

    let unique: BTreeSet<char> = sequence.chars().collect();
    let repetition_bonus = (syn.repetition_baseline.saturating_sub(unique.len())) as f64
        * syn.repetition_bonus_step;
    details.insert("unique_amino_acids".into(), json!(unique.len()));
    details.insert("repetition_bonus".into(), json!(repetition_bonus));

    let disulfide_penalty = features
        .cysteine_count
        .saturating_sub(syn.tolerated_cysteines) as f64
        * syn.disulfide_penalty_step;
    details.insert("disulfide_penalty".into(), json!(disulfide_penalty));

    let final_score =
        (length_score - rare_penalty + repetition_bonus - disulfide_penalty).clamp(syn.floor, 10.0);
    details.insert("final_score".into(), json!(final_score));

    ScoreBreakdown::new(final_score, Value::Object(details))
}
