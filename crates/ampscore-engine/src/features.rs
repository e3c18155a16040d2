//! Residue-composition feature derivation.
//!
//! A `FeatureSet` is computed once per record from its sequence and shared
//! read-only by all sub-scorers. Class membership uses the fixed
//! letter-set tables below; unknown letters simply count towards length.

use serde::{Deserialize, Serialize};

/// Residue-class letter sets.
const HYDROPHOBIC: &str = "AVILMFYW";
const HYDROPHILIC: &str = "NQST";
const POSITIVE: &str = "KRH";
const NEGATIVE: &str = "DE";
const AROMATIC: &str = "FYW";
const CYSTEINE: &str = "C";
const PROLINE: &str = "P";
const GLYCINE: &str = "G";

/// Fixed residue-composition features of one sequence.
///
/// An empty sequence yields an all-zero `FeatureSet` (ratios guarded
/// against division by zero), not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureSet {
    pub hydrophobic_count: usize,
    pub hydrophobic_ratio: f64,
    pub hydrophilic_count: usize,
    pub hydrophilic_ratio: f64,
    pub positive_count: usize,
    pub positive_ratio: f64,
    pub negative_count: usize,
    pub negative_ratio: f64,
    pub aromatic_count: usize,
    pub aromatic_ratio: f64,
    pub cysteine_count: usize,
    pub cysteine_ratio: f64,
    pub proline_count: usize,
    pub proline_ratio: f64,
    pub glycine_count: usize,
    pub glycine_ratio: f64,

    /// positive_count − negative_count
    pub net_charge: i64,
    /// Alias for hydrophobic_ratio, kept under the name the scorers use.
    pub hydrophobicity: f64,
    /// hydrophobic_ratio × hydrophilic_ratio
    pub amphipathicity: f64,
    /// Alias for aromatic_ratio.
    pub aromaticity: f64,
    /// cysteine_count / 2, integer division
    pub cys_bonds_potential: usize,
    /// glycine_count + proline_count
    pub flexibility: usize,
}

fn count_class(sequence: &str, class: &str) -> usize {
    sequence
        .chars()
        .filter(|c| class.contains(c.to_ascii_uppercase()))
        .count()
}

impl FeatureSet {
    pub fn from_sequence(sequence: &str) -> Self {
        let length = sequence.chars().count();
        if length == 0 {
            return Self::default();
        }
        let len_f = length as f64;
        let ratio = |count: usize| count as f64 / len_f;

        let hydrophobic_count = count_class(sequence, HYDROPHOBIC);
        let hydrophilic_count = count_class(sequence, HYDROPHILIC);
        let positive_count = count_class(sequence, POSITIVE);
        let negative_count = count_class(sequence, NEGATIVE);
        let aromatic_count = count_class(sequence, AROMATIC);
        let cysteine_count = count_class(sequence, CYSTEINE);
        let proline_count = count_class(sequence, PROLINE);
        let glycine_count = count_class(sequence, GLYCINE);

        let hydrophobic_ratio = ratio(hydrophobic_count);
        let hydrophilic_ratio = ratio(hydrophilic_count);
        let aromatic_ratio = ratio(aromatic_count);

        Self {
            hydrophobic_count,
            hydrophobic_ratio,
            hydrophilic_count,
            hydrophilic_ratio,
            positive_count,
            positive_ratio: ratio(positive_count),
            negative_count,
            negative_ratio: ratio(negative_count),
            aromatic_count,
            aromatic_ratio,
            cysteine_count,
            cysteine_ratio: ratio(cysteine_count),
            proline_count,
            proline_ratio: ratio(proline_count),
            glycine_count,
            glycine_ratio: ratio(glycine_count),
            net_charge: positive_count as i64 - negative_count as i64,
            hydrophobicity: hydrophobic_ratio,
            amphipathicity: hydrophobic_ratio * hydrophilic_ratio,
            aromaticity: aromatic_ratio,
            cys_bonds_potential: cysteine_count / 2,
            flexibility: glycine_count + proline_count,
        }
    }
}
