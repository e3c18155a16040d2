//! Scoring configuration: weights, threshold tables, and lexical vocabularies.
//!
//! All numeric cut-offs used by the sub-scorers live here rather than as
//! literals in the scoring code, so alternative configurations (e.g. for
//! A/B comparison of threshold sets) can coexist under concurrent use.
//! A `ScoringConfig` is built once, passed into the engine at construction,
//! and never mutated afterwards.
//!
//! Two values deserve a health warning: `hc50_to_percent_divisor` /
//! `hemolysis_estimate_cap` (the HC50→hemolysis-percent estimate) are
//! unverified domain approximations inherited from the curation pipeline,
//! not derived constants. They are configurable precisely because they are
//! heuristics.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::weights::WeightVector;

/// Complete engine configuration. Immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: WeightVector,

    #[serde(default)]
    pub efficacy: EfficacyConfig,

    #[serde(default)]
    pub selectivity: SelectivityConfig,

    #[serde(default)]
    pub stability: StabilityConfig,

    #[serde(default)]
    pub synthesis: SynthesisConfig,

    #[serde(default)]
    pub novelty: NoveltyConfig,

    #[serde(default)]
    pub organisms: OrganismLexicon,
}

impl ScoringConfig {
    /// Load from YAML file (the batch tool's weights file format).
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load from JSON file.
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save to YAML file (used by `init-config` to emit a template).
    pub fn to_yaml(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ── Tier and window tables ────────────────────────────────────────────────────

/// One tier of a "value ≤ max → score" table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tier {
    pub max: f64,
    pub score: f64,
}

/// Ordered tier table: first tier whose `max` bounds the value wins,
/// otherwise `fallback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierTable {
    pub tiers: Vec<Tier>,
    pub fallback: f64,
}

impl TierTable {
    pub fn score(&self, value: f64) -> f64 {
        for tier in &self.tiers {
            if value <= tier.max {
                return tier.score;
            }
        }
        self.fallback
    }
}

/// Peaked scoring window: best inside the innermost range, degrading
/// through two wider ranges, floor outside all three. All bounds inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeakWindow {
    pub best: (f64, f64),
    pub good: (f64, f64),
    pub fair: (f64, f64),
    pub best_score: f64,
    pub good_score: f64,
    pub fair_score: f64,
    pub floor_score: f64,
}

impl PeakWindow {
    pub fn score(&self, value: f64) -> f64 {
        if value >= self.best.0 && value <= self.best.1 {
            self.best_score
        } else if value >= self.good.0 && value <= self.good.1 {
            self.good_score
        } else if value >= self.fair.0 && value <= self.fair.1 {
            self.fair_score
        } else {
            self.floor_score
        }
    }
}

// ── Efficacy ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficacyConfig {
    /// MIC (μg/ml) → score tiers; lower MIC is more potent.
    #[serde(default = "default_mic_tiers")]
    pub mic_tiers: TierTable,

    /// Net-charge window for the predictive path.
    #[serde(default = "default_charge_window")]
    pub charge_window: PeakWindow,

    /// Hydrophobic-ratio window for the predictive path.
    #[serde(default = "default_hydrophobicity_window")]
    pub hydrophobicity_window: PeakWindow,

    /// Optimal sequence-length range → factor 1.0.
    #[serde(default = "default_length_optimal")]
    pub length_optimal: (usize, usize),

    /// Acceptable length range → factor 0.9.
    #[serde(default = "default_length_acceptable")]
    pub length_acceptable: (usize, usize),

    #[serde(default = "default_length_factor_acceptable")]
    pub length_factor_acceptable: f64,

    #[serde(default = "default_length_factor_poor")]
    pub length_factor_poor: f64,
}

fn default_mic_tiers() -> TierTable {
    TierTable {
        tiers: vec![
            Tier { max: 2.0, score: 10.0 },
            Tier { max: 8.0, score: 8.5 },
            Tier { max: 32.0, score: 6.0 },
            Tier { max: 128.0, score: 3.5 },
        ],
        fallback: 1.0,
    }
}

fn default_charge_window() -> PeakWindow {
    PeakWindow {
        best: (2.0, 6.0),
        good: (1.0, 7.0),
        fair: (0.0, 8.0),
        best_score: 10.0,
        good_score: 8.0,
        fair_score: 6.0,
        floor_score: 3.0,
    }
}

fn default_hydrophobicity_window() -> PeakWindow {
    PeakWindow {
        best: (0.3, 0.6),
        good: (0.2, 0.7),
        fair: (0.1, 0.8),
        best_score: 10.0,
        good_score: 8.0,
        fair_score: 6.0,
        floor_score: 3.0,
    }
}

fn default_length_optimal() -> (usize, usize) { (10, 50) }
fn default_length_acceptable() -> (usize, usize) { (8, 80) }
fn default_length_factor_acceptable() -> f64 { 0.9 }
fn default_length_factor_poor() -> f64 { 0.7 }

impl Default for EfficacyConfig {
    fn default() -> Self {
        Self {
            mic_tiers: default_mic_tiers(),
            charge_window: default_charge_window(),
            hydrophobicity_window: default_hydrophobicity_window(),
            length_optimal: default_length_optimal(),
            length_acceptable: default_length_acceptable(),
            length_factor_acceptable: default_length_factor_acceptable(),
            length_factor_poor: default_length_factor_poor(),
        }
    }
}

// ── Selectivity ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectivityConfig {
    /// Hemolysis percentage → score tiers; lower hemolysis is safer.
    #[serde(default = "default_hemolysis_tiers")]
    pub hemolysis_tiers: TierTable,

    /// HC50/HD50 concentration → estimated hemolysis percent divisor.
    /// UNVERIFIED approximation carried over from the curation pipeline.
    #[serde(default = "default_hc50_divisor")]
    pub hc50_to_percent_divisor: f64,

    /// Cap for the estimated hemolysis percentage.
    #[serde(default = "default_hemolysis_cap")]
    pub hemolysis_estimate_cap: f64,

    /// Base score for the predictive path.
    #[serde(default = "default_selectivity_base")]
    pub predicted_base: f64,

    /// Hydrophobicity above this ratio is penalised.
    #[serde(default = "default_hydro_ceiling")]
    pub hydrophobicity_ceiling: f64,

    /// Penalty slope per unit of excess hydrophobicity.
    #[serde(default = "default_hydro_penalty_slope")]
    pub hydrophobicity_penalty_slope: f64,

    /// Net-charge range earning the charge bonus (inclusive).
    #[serde(default = "default_charge_bonus_range")]
    pub charge_bonus_range: (i64, i64),

    #[serde(default = "default_charge_bonus")]
    pub charge_bonus: f64,

    /// Net charge above this threshold is penalised.
    #[serde(default = "default_charge_excess_threshold")]
    pub charge_excess_threshold: i64,

    #[serde(default = "default_charge_excess_penalty")]
    pub charge_excess_penalty: f64,

    /// Bonus per distinct target group (bacteria / fungi / cancer).
    #[serde(default = "default_diversity_bonus")]
    pub diversity_bonus_per_group: f64,
}

fn default_hemolysis_tiers() -> TierTable {
    TierTable {
        tiers: vec![
            Tier { max: 5.0, score: 10.0 },
            Tier { max: 10.0, score: 8.5 },
            Tier { max: 25.0, score: 6.0 },
            Tier { max: 50.0, score: 3.5 },
        ],
        fallback: 1.0,
    }
}

fn default_hc50_divisor() -> f64 { 10.0 }
fn default_hemolysis_cap() -> f64 { 100.0 }
fn default_selectivity_base() -> f64 { 7.0 }
fn default_hydro_ceiling() -> f64 { 0.7 }
fn default_hydro_penalty_slope() -> f64 { 10.0 }
fn default_charge_bonus_range() -> (i64, i64) { (2, 5) }
fn default_charge_bonus() -> f64 { 2.0 }
fn default_charge_excess_threshold() -> i64 { 8 }
fn default_charge_excess_penalty() -> f64 { 1.0 }
fn default_diversity_bonus() -> f64 { 0.5 }

impl Default for SelectivityConfig {
    fn default() -> Self {
        Self {
            hemolysis_tiers: default_hemolysis_tiers(),
            hc50_to_percent_divisor: default_hc50_divisor(),
            hemolysis_estimate_cap: default_hemolysis_cap(),
            predicted_base: default_selectivity_base(),
            hydrophobicity_ceiling: default_hydro_ceiling(),
            hydrophobicity_penalty_slope: default_hydro_penalty_slope(),
            charge_bonus_range: default_charge_bonus_range(),
            charge_bonus: default_charge_bonus(),
            charge_excess_threshold: default_charge_excess_threshold(),
            charge_excess_penalty: default_charge_excess_penalty(),
            diversity_bonus_per_group: default_diversity_bonus(),
        }
    }
}

// ── Stability ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityConfig {
    #[serde(default = "default_stability_base")]
    pub base: f64,

    /// Bonus per potential disulfide bond, when ≥2 bonds are possible.
    #[serde(default = "default_disulfide_per_bond")]
    pub disulfide_bonus_per_bond: f64,

    #[serde(default = "default_disulfide_cap")]
    pub disulfide_bonus_cap: f64,

    /// Bonus when exactly one disulfide bond is possible.
    #[serde(default = "default_single_bond_bonus")]
    pub single_bond_bonus: f64,

    /// Proline ratio range earning the rigidity bonus (inclusive).
    #[serde(default = "default_proline_optimal")]
    pub proline_optimal: (f64, f64),

    #[serde(default = "default_proline_bonus")]
    pub proline_bonus: f64,

    /// Proline ratio above this is penalised.
    #[serde(default = "default_proline_excess")]
    pub proline_excess_threshold: f64,

    #[serde(default = "default_proline_excess_penalty")]
    pub proline_excess_penalty: f64,

    /// Glycine ratio above this incurs a sliding penalty.
    #[serde(default = "default_glycine_threshold")]
    pub glycine_threshold: f64,

    #[serde(default = "default_glycine_slope")]
    pub glycine_penalty_slope: f64,

    /// Flat bonus when any experimental stability annotation is present.
    #[serde(default = "default_experimental_bonus")]
    pub experimental_bonus: f64,
}

fn default_stability_base() -> f64 { 5.0 }
fn default_disulfide_per_bond() -> f64 { 1.0 }
fn default_disulfide_cap() -> f64 { 3.0 }
fn default_single_bond_bonus() -> f64 { 1.5 }
fn default_proline_optimal() -> (f64, f64) { (0.05, 0.15) }
fn default_proline_bonus() -> f64 { 1.0 }
fn default_proline_excess() -> f64 { 0.20 }
fn default_proline_excess_penalty() -> f64 { 0.5 }
fn default_glycine_threshold() -> f64 { 0.10 }
fn default_glycine_slope() -> f64 { 5.0 }
fn default_experimental_bonus() -> f64 { 1.0 }

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            base: default_stability_base(),
            disulfide_bonus_per_bond: default_disulfide_per_bond(),
            disulfide_bonus_cap: default_disulfide_cap(),
            single_bond_bonus: default_single_bond_bonus(),
            proline_optimal: default_proline_optimal(),
            proline_bonus: default_proline_bonus(),
            proline_excess_threshold: default_proline_excess(),
            proline_excess_penalty: default_proline_excess_penalty(),
            glycine_threshold: default_glycine_threshold(),
            glycine_penalty_slope: default_glycine_slope(),
            experimental_bonus: default_experimental_bonus(),
        }
    }
}

// ── Synthesis ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Sequence length → score tiers; shorter is easier to synthesise.
    #[serde(default = "default_length_tiers")]
    pub length_tiers: TierTable,

    /// Residues that are expensive or awkward in solid-phase synthesis.
    #[serde(default = "default_rare_residues")]
    pub rare_residues: String,

    #[serde(default = "default_rare_penalty")]
    pub rare_residue_penalty: f64,

    /// Distinct-residue count below this baseline earns a repetition bonus.
    #[serde(default = "default_repetition_baseline")]
    pub repetition_baseline: usize,

    #[serde(default = "default_repetition_step")]
    pub repetition_bonus_step: f64,

    /// Cysteines beyond this count add disulfide-pairing complexity.
    #[serde(default = "default_free_cysteines")]
    pub tolerated_cysteines: usize,

    #[serde(default = "default_disulfide_penalty_step")]
    pub disulfide_penalty_step: f64,

    /// Synthesis is never scored impossible, only maximally difficult.
    #[serde(default = "default_synthesis_floor")]
    pub floor: f64,
}

fn default_length_tiers() -> TierTable {
    TierTable {
        tiers: vec![
            Tier { max: 20.0, score: 10.0 },
            Tier { max: 30.0, score: 8.0 },
            Tier { max: 40.0, score: 6.0 },
            Tier { max: 50.0, score: 4.0 },
        ],
        fallback: 2.0,
    }
}

fn default_rare_residues() -> String { "WYC".to_string() }
fn default_rare_penalty() -> f64 { 0.5 }
fn default_repetition_baseline() -> usize { 20 }
fn default_repetition_step() -> f64 { 0.1 }
fn default_free_cysteines() -> usize { 4 }
fn default_disulfide_penalty_step() -> f64 { 0.5 }
fn default_synthesis_floor() -> f64 { 1.0 }

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            length_tiers: default_length_tiers(),
            rare_residues: default_rare_residues(),
            rare_residue_penalty: default_rare_penalty(),
            repetition_baseline: default_repetition_baseline(),
            repetition_bonus_step: default_repetition_step(),
            tolerated_cysteines: default_free_cysteines(),
            disulfide_penalty_step: default_disulfide_penalty_step(),
            floor: default_synthesis_floor(),
        }
    }
}

// ── Novelty ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoveltyConfig {
    #[serde(default = "default_novelty_base")]
    pub base: f64,

    /// Only the closest N similarity records are considered.
    #[serde(default = "default_max_neighbours")]
    pub max_neighbours: usize,

    /// Similarity (0–100) → novelty: 10 − max_similarity / divisor.
    #[serde(default = "default_similarity_divisor")]
    pub similarity_divisor: f64,

    /// Bonus per distinct recognised bioactivity category.
    #[serde(default = "default_multifunction_bonus")]
    pub multifunction_bonus: f64,

    /// Recognised bioactivity categories, matched by substring.
    #[serde(default = "default_activity_markers")]
    pub activity_markers: Vec<String>,

    /// Maximum Shannon entropy of a 20-letter alphabet, log2(20).
    #[serde(default = "default_entropy_norm")]
    pub entropy_norm: f64,

    #[serde(default = "default_entropy_weight")]
    pub entropy_weight: f64,
}

fn default_novelty_base() -> f64 { 5.0 }
fn default_max_neighbours() -> usize { 5 }
fn default_similarity_divisor() -> f64 { 10.0 }
fn default_multifunction_bonus() -> f64 { 0.5 }
fn default_entropy_norm() -> f64 { 4.32 }
fn default_entropy_weight() -> f64 { 2.0 }

fn default_activity_markers() -> Vec<String> {
    vec![
        "antibacterial".to_string(),
        "antifungal".to_string(),
        "antiviral".to_string(),
        "anticancer".to_string(),
        "anti-inflammatory".to_string(),
    ]
}

impl Default for NoveltyConfig {
    fn default() -> Self {
        Self {
            base: default_novelty_base(),
            max_neighbours: default_max_neighbours(),
            similarity_divisor: default_similarity_divisor(),
            multifunction_bonus: default_multifunction_bonus(),
            activity_markers: default_activity_markers(),
            entropy_norm: default_entropy_norm(),
            entropy_weight: default_entropy_weight(),
        }
    }
}

// ── Organism lexicon ──────────────────────────────────────────────────────────

/// Lexical markers for bucketing free-text organism names. Matched by
/// lower-cased substring, bucket priority: Gram-positive, Gram-negative,
/// fungi, cancer, then Other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganismLexicon {
    #[serde(default = "default_gram_positive")]
    pub gram_positive: Vec<String>,

    #[serde(default = "default_gram_negative")]
    pub gram_negative: Vec<String>,

    #[serde(default = "default_fungi")]
    pub fungi: Vec<String>,

    #[serde(default = "default_cancer")]
    pub cancer: Vec<String>,
}

fn default_gram_positive() -> Vec<String> {
    ["staphyl", "strept", "bacill", "enteroc", "gram+"]
        .iter().map(|s| s.to_string()).collect()
}

fn default_gram_negative() -> Vec<String> {
    ["e.coli", "pseudom", "gram-", "salmonella"]
        .iter().map(|s| s.to_string()).collect()
}

fn default_fungi() -> Vec<String> {
    ["candida", "fungal", "yeast"]
        .iter().map(|s| s.to_string()).collect()
}

fn default_cancer() -> Vec<String> {
    ["cancer", "tumor", "cell line", "hela"]
        .iter().map(|s| s.to_string()).collect()
}

impl Default for OrganismLexicon {
    fn default() -> Self {
        Self {
            gram_positive: default_gram_positive(),
            gram_negative: default_gram_negative(),
            fungi: default_fungi(),
            cancer: default_cancer(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
