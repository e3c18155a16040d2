//! Experimental-annotation extraction from uncurated records.
//!
//! MIC measurements and hemolysis data appear either as structured fields
//! or buried in free-text activity strings, depending on the origin
//! database. Extraction is best-effort: anything that does not parse is
//! skipped, never an error.

use ampscore_common::config::SelectivityConfig;
use ampscore_common::record::{self, as_f64};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keys;

lazy_static! {
    /// "MIC: 4 μg/ml", "mic 0.5 mg/ml" — applied to lower-cased text.
    static ref MIC_RE: Regex =
        Regex::new(r"mic[:\s]*([0-9.]+)\s*([μu]g/ml|mg/ml)").unwrap();
    /// "12.5 %" hemolysis percentage.
    static ref PERCENT_RE: Regex = Regex::new(r"([0-9.]+)\s*%").unwrap();
    /// Bare concentration, e.g. "HC50 = 120 μg/ml".
    static ref CONC_RE: Regex =
        Regex::new(r"([0-9.]+)\s*([μu]g/ml|mg/ml)").unwrap();
}

/// One extracted MIC measurement, normalised to μg/ml.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MicMeasurement {
    /// Organism name or the raw activity string the value came from.
    pub organism: String,
    pub value: f64,
    pub unit: String,
}

/// Collect every numeric MIC measurement in the record.
///
/// Two sources, in order: structured `mic_value` fields on "Target
/// Organism" entries (taken as-is, unit recorded), and free-text
/// "Biological Activity" strings parsed with a unit-aware regex
/// (mg/ml values ×1000 into μg/ml).
pub fn extract_mic_values(rec: &Value) -> Vec<MicMeasurement> {
    let mut mic_values = Vec::new();

    if let Some(Value::Array(targets)) = record::locate(rec, keys::TARGET_ORGANISM) {
        for target in targets {
            let Value::Object(map) = target else { continue };
            let Some(value) = map.get("mic_value").and_then(Value::as_f64) else {
                continue;
            };
            let organism = map
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let unit = map
                .get("unit")
                .and_then(Value::as_str)
                .unwrap_or("μg/ml")
                .to_string();
            mic_values.push(MicMeasurement { organism, value, unit });
        }
    }

    if let Some(Value::Array(activities)) = record::locate(rec, keys::BIOLOGICAL_ACTIVITY) {
        for activity in activities {
            let Some(text) = activity.as_str() else { continue };
            let lower = text.to_lowercase();
            if !lower.contains("mic") {
                continue;
            }
            if let Some(caps) = MIC_RE.captures(&lower) {
                let Ok(mut value) = caps[1].parse::<f64>() else { continue };
                if caps[2].contains("mg/ml") {
                    value *= 1000.0;
                }
                mic_values.push(MicMeasurement {
                    organism: text.to_string(),
                    value,
                    unit: "μg/ml".to_string(),
                });
            }
        }
    }

    mic_values
}

/// Extract a hemolysis percentage, probing the hemolysis keys in order.
///
/// A numeric value is taken as percent directly. Strings are tried as a
/// percentage first; failing that, as an HC50/HD50 concentration which is
/// converted with the configured `min(cap, conc / divisor)` estimate — an
/// unverified approximation, see `SelectivityConfig`.
pub fn extract_hemolysis(rec: &Value, cfg: &SelectivityConfig) -> Option<f64> {
    for key in keys::HEMOLYSIS_KEYS {
        let Some(value) = record::locate(rec, key) else { continue };

        if let Some(n) = value.as_f64() {
            return Some(n);
        }
        let Some(text) = value.as_str() else { continue };

        if let Some(caps) = PERCENT_RE.captures(text) {
            if let Ok(pct) = caps[1].parse::<f64>() {
                return Some(pct);
            }
        }

        let lower = text.to_lowercase();
        if let Some(caps) = CONC_RE.captures(&lower) {
            if let Ok(mut conc) = caps[1].parse::<f64>() {
                if caps[2].contains("mg/ml") {
                    conc *= 1000.0;
                }
                return Some(
                    cfg.hemolysis_estimate_cap
                        .min(conc / cfg.hc50_to_percent_divisor),
                );
            }
        }
    }

    None
}

/// Nearest-neighbour similarity values (0–100), capped at `max_neighbours`.
pub fn extract_similarities(rec: &Value, max_neighbours: usize) -> Vec<f64> {
    let Some(Value::Array(similar)) = record::locate(rec, keys::SIMILAR_SEQUENCES) else {
        return Vec::new();
    };
    similar
        .iter()
        .take(max_neighbours)
        .filter_map(|entry| match entry {
            Value::Object(map) => map.get("similarity").and_then(as_f64),
            _ => None,
        })
        .collect()
}

/// Whether the record carries any experimental stability annotation.
/// The value itself is irrelevant; presence signals measured confidence.
pub fn has_stability_annotation(rec: &Value) -> bool {
    record::locate(rec, keys::STABILITY).is_some()
        || record::locate(rec, keys::HALF_LIFE).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_mic_values() {
        let rec = json!({
            "Target Organism": [
                {"name": "E.coli", "mic_value": 4.0, "unit": "μg/ml"},
                {"name": "no measurement"},
                {"name": "bad value", "mic_value": "high"}
            ]
        });
        let mics = extract_mic_values(&rec);
        assert_eq!(mics.len(), 1);
        assert_eq!(mics[0].value, 4.0);
        assert_eq!(mics[0].organism, "E.coli");
    }

    #[test]
    fn test_free_text_mic_with_unit_conversion() {
        let rec = json!({
            "Biological Activity": [
                "Antibacterial, MIC: 0.5 mg/ml against S. aureus",
                "MIC 16 ug/ml (E. coli)",
                "Antifungal, potent"
            ]
        });
        let mics = extract_mic_values(&rec);
        assert_eq!(mics.len(), 2);
        assert_eq!(mics[0].value, 500.0);
        assert_eq!(mics[0].unit, "μg/ml");
        assert_eq!(mics[1].value, 16.0);
    }

    #[test]
    fn test_hemolysis_numeric_and_percent_string() {
        let cfg = SelectivityConfig::default();
        let rec = json!({"Hemolysis": 12.5});
        assert_eq!(extract_hemolysis(&rec, &cfg), Some(12.5));

        let rec = json!({"Hemolytic": "about 8.0 % at 100 μM"});
        assert_eq!(extract_hemolysis(&rec, &cfg), Some(8.0));
    }

    #[test]
    fn test_hc50_concentration_estimate() {
        let cfg = SelectivityConfig::default();
        // 120 μg/ml / 10 = 12 percent
        let rec = json!({"HC50": "120 μg/ml"});
        assert_eq!(extract_hemolysis(&rec, &cfg), Some(12.0));

        // mg/ml converts first, then caps at 100
        let rec = json!({"HD50": "5 mg/ml"});
        assert_eq!(extract_hemolysis(&rec, &cfg), Some(100.0));
    }

    #[test]
    fn test_hemolysis_absent_or_garbage() {
        let cfg = SelectivityConfig::default();
        let rec = json!({"Sequence": "KWK"});
        assert_eq!(extract_hemolysis(&rec, &cfg), None);

        let rec = json!({"Hemolysis": "not measured"});
        assert_eq!(extract_hemolysis(&rec, &cfg), None);
    }

    #[test]
    fn test_similarities_capped_and_filtered() {
        let rec = json!({
            "Similar Sequences": [
                {"similarity": 80},
                {"similarity": 75.5},
                "junk",
                {"similarity": "60"},
                {"no_similarity": 1},
                {"similarity": 50},
                {"similarity": 40}
            ]
        });
        // Cap of 5 applies to list entries, then non-numeric are dropped.
        let sims = extract_similarities(&rec, 5);
        assert_eq!(sims, vec![80.0, 75.5, 60.0]);
    }

    #[test]
    fn test_stability_annotation_presence() {
        assert!(has_stability_annotation(&json!({"Stability": "stable at pH 7"})));
        assert!(has_stability_annotation(&json!({"props": {"Half-life": 3.2}})));
        assert!(!has_stability_annotation(&json!({"Sequence": "KWK"})));
    }
}
