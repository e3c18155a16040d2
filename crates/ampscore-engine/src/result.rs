//! Score result assembly: ordinal categories, identifier resolution, and
//! the serialisable `ScoreResult`.

use std::collections::BTreeMap;

use ampscore_common::record;
use ampscore_common::weights::WeightVector;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::features::FeatureSet;
use crate::keys;

/// Result schema version, bumped when the output shape changes.
pub const SCHEMA_VERSION: &str = "2.0";

/// Ordinal desirability category. Boundaries are inclusive on the lower
/// bound of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Excellent,
    Good,
    #[serde(rename = "Above Average")]
    AboveAverage,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl ScoreCategory {
    pub fn from_total(total: f64) -> Self {
        if total >= 8.5 {
            ScoreCategory::Excellent
        } else if total >= 7.5 {
            ScoreCategory::Good
        } else if total >= 6.5 {
            ScoreCategory::AboveAverage
        } else if total >= 5.5 {
            ScoreCategory::Average
        } else if total >= 4.5 {
            ScoreCategory::BelowAverage
        } else if total >= 3.5 {
            ScoreCategory::Fair
        } else if total >= 2.5 {
            ScoreCategory::Poor
        } else {
            ScoreCategory::VeryPoor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "Excellent",
            ScoreCategory::Good => "Good",
            ScoreCategory::AboveAverage => "Above Average",
            ScoreCategory::Average => "Average",
            ScoreCategory::BelowAverage => "Below Average",
            ScoreCategory::Fair => "Fair",
            ScoreCategory::Poor => "Poor",
            ScoreCategory::VeryPoor => "Very Poor",
        }
    }
}

/// Resolve the record identifier.
///
/// Precedence: cross-database canonical ID, then the caller-supplied
/// fallback (usually the source filename stem), then peptide name /
/// generic ID / generic name, then "Unknown".
pub fn resolve_identifier(rec: &Value, fallback: Option<&str>) -> String {
    if let Some(id) = record::locate_str(rec, keys::DRAMP_ID) {
        return id.to_string();
    }
    if let Some(fb) = fallback {
        if !fb.is_empty() {
            return fb.to_string();
        }
    }
    for key in [keys::PEPTIDE_NAME, keys::GENERIC_ID, keys::GENERIC_NAME] {
        if let Some(v) = record::locate_str(rec, key) {
            return v.to_string();
        }
    }
    "Unknown".to_string()
}

/// Complete scoring output for one record. Created once per scoring call
/// and immutable afterwards; persistence is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub identifier: String,
    pub total: f64,
    pub category: ScoreCategory,
    /// Per-criterion scores, rounded to 2 decimals.
    pub sub_scores: BTreeMap<String, f64>,
    /// Per-criterion score × weight, rounded to 2 decimals.
    pub weighted_sub_scores: BTreeMap<String, f64>,
    pub weights: WeightVector,
    pub features: FeatureSet,
    /// Audit trace per criterion; informational only.
    pub breakdown: BTreeMap<String, Value>,
    /// Organism-info entries keyed by bucket display name; empty buckets
    /// omitted.
    pub target_organisms: Value,
    pub schema_version: String,
    /// Informational timestamp attached by the caller, never set by the
    /// engine itself (scoring is wall-clock independent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Set when the record carries no sequence field at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Round to 2 decimals for presentation fields.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
