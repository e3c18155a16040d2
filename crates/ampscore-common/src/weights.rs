//! Weight vector for composite peptide scoring.

use serde::{Deserialize, Serialize};

/// The 5-criterion weight vector. Weights sum to 1.0.
///
/// The defaults are fixed domain priors: experimental efficacy data is the
/// strongest desirability signal, selectivity (toxicity) next, novelty the
/// weakest. The engine treats the sum-to-one property as a caller
/// precondition and does not re-validate it per scoring call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightVector {
    /// Antimicrobial efficacy (MIC data or charge/hydrophobicity prediction)
    pub efficacy: f64,
    /// Selectivity for pathogens over host cells (hemolysis)
    pub selectivity: f64,
    /// Structural stability (disulfides, proline/glycine content)
    pub stability: f64,
    /// Synthesis feasibility (length, rare residues)
    pub synthesis: f64,
    /// Novelty versus known sequences
    pub novelty: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            efficacy:    0.35,
            selectivity: 0.25,
            stability:   0.20,
            synthesis:   0.12,
            novelty:     0.08,
        }
    }
}

impl WeightVector {
    /// Validate that all weights sum to ~1.0
    pub fn validate(&self) -> bool {
        let sum = self.efficacy
            + self.selectivity
            + self.stability
            + self.synthesis
            + self.novelty;
        (sum - 1.0).abs() < 1e-6
    }

    /// Renormalise weights so they sum to 1.0
    pub fn normalise(&mut self) {
        let sum = self.efficacy
            + self.selectivity
            + self.stability
            + self.synthesis
            + self.novelty;
        if sum > 0.0 {
            self.efficacy    /= sum;
            self.selectivity /= sum;
            self.stability   /= sum;
            self.synthesis   /= sum;
            self.novelty     /= sum;
        }
    }

    /// Convert to array for iteration (criterion order: efficacy,
    /// selectivity, stability, synthesis, novelty).
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.efficacy,
            self.selectivity,
            self.stability,
            self.synthesis,
            self.novelty,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = WeightVector::default();
        assert!(w.validate(), "Default weights must sum to 1.0");
    }

    #[test]
    fn test_normalise_restores_sum() {
        let mut w = WeightVector::default();
        w.efficacy += 0.10; // deliberately break sum
        assert!(!w.validate());
        w.normalise();
        assert!(w.validate());
    }
}
