//! Target-organism bucketing.
//!
//! Organism names in the source records are free text ("Staphylococcus
//! aureus ATCC 25923", "Gram+ bacteria", "HeLa cells"). Each entry is
//! matched against the configured marker vocabularies in fixed priority
//! order; the first bucket whose marker substring-matches the lower-cased
//! name wins.

use std::collections::BTreeMap;

use ampscore_common::config::OrganismLexicon;
use ampscore_common::record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keys;

/// Organism bucket, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrganismBucket {
    GramPositive,
    GramNegative,
    Fungi,
    Cancer,
    Other,
}

impl OrganismBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganismBucket::GramPositive => "Gram-positive",
            OrganismBucket::GramNegative => "Gram-negative",
            OrganismBucket::Fungi => "Fungi",
            OrganismBucket::Cancer => "Cancer",
            OrganismBucket::Other => "Other",
        }
    }

    /// Collapse to the coarse target group used by the selectivity
    /// diversity bonus. `Other` maps to no group.
    pub fn diversity_group(&self) -> Option<&'static str> {
        match self {
            OrganismBucket::GramPositive | OrganismBucket::GramNegative => Some("bacteria"),
            OrganismBucket::Fungi => Some("fungi"),
            OrganismBucket::Cancer => Some("cancer"),
            OrganismBucket::Other => None,
        }
    }
}

/// One organism entry as reported by the source record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganismInfo {
    pub name: String,
    pub activity: String,
}

/// Bucket one organism name.
pub fn classify_name(name: &str, lexicon: &OrganismLexicon) -> OrganismBucket {
    let lower = name.to_lowercase();
    let matches = |markers: &[String]| markers.iter().any(|m| lower.contains(m.as_str()));

    if matches(&lexicon.gram_positive) {
        OrganismBucket::GramPositive
    } else if matches(&lexicon.gram_negative) {
        OrganismBucket::GramNegative
    } else if matches(&lexicon.fungi) {
        OrganismBucket::Fungi
    } else if matches(&lexicon.cancer) {
        OrganismBucket::Cancer
    } else {
        OrganismBucket::Other
    }
}

/// Bucket every entry of the record's "Target Organism" list.
///
/// Non-mapping items are skipped; empty buckets are omitted from the
/// output. Returns an empty map when the field is missing entirely.
pub fn classify_targets(
    rec: &Value,
    lexicon: &OrganismLexicon,
) -> BTreeMap<OrganismBucket, Vec<OrganismInfo>> {
    let mut buckets: BTreeMap<OrganismBucket, Vec<OrganismInfo>> = BTreeMap::new();

    let Some(Value::Array(targets)) = record::locate(rec, keys::TARGET_ORGANISM) else {
        return buckets;
    };

    for target in targets {
        let Value::Object(map) = target else { continue };
        let name = map
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let activity = map
            .get("activity")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();

        let bucket = classify_name(&name, lexicon);
        buckets
            .entry(bucket)
            .or_default()
            .push(OrganismInfo { name, activity });
    }

    buckets
}

/// Serialise buckets under their display names for the score result.
pub fn buckets_to_json(buckets: &BTreeMap<OrganismBucket, Vec<OrganismInfo>>) -> Value {
    let mut out = serde_json::Map::new();
    for (bucket, entries) in buckets {
        out.insert(
            bucket.as_str().to_string(),
            serde_json::to_value(entries).unwrap_or(Value::Null),
        );
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lexicon() -> OrganismLexicon {
        OrganismLexicon::default()
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // "gram+" marker outranks the cancer vocabulary even if both match.
        let bucket = classify_name("gram+ tumor isolate", &lexicon());
        assert_eq!(bucket, OrganismBucket::GramPositive);
    }

    #[test]
    fn test_common_pathogens() {
        assert_eq!(classify_name("Staphylococcus aureus", &lexicon()), OrganismBucket::GramPositive);
        assert_eq!(classify_name("E.coli K12", &lexicon()), OrganismBucket::GramNegative);
        assert_eq!(classify_name("Candida albicans", &lexicon()), OrganismBucket::Fungi);
        assert_eq!(classify_name("HeLa cells", &lexicon()), OrganismBucket::Cancer);
        assert_eq!(classify_name("Totally unknown", &lexicon()), OrganismBucket::Other);
    }

    #[test]
    fn test_classify_targets_omits_empty_buckets() {
        let rec = json!({
            "Target Organism": [
                {"name": "Streptococcus pyogenes", "activity": "MIC=4"},
                {"name": "Candida albicans"},
                "not a mapping",
                42
            ]
        });
        let buckets = classify_targets(&rec, &lexicon());
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&OrganismBucket::GramPositive].len(), 1);
        assert_eq!(buckets[&OrganismBucket::Fungi][0].activity, "N/A");
        assert!(!buckets.contains_key(&OrganismBucket::Cancer));
    }

    #[test]
    fn test_missing_field_yields_empty_map() {
        let rec = json!({"Sequence": "KWK"});
        assert!(classify_targets(&rec, &lexicon()).is_empty());
    }

    #[test]
    fn test_diversity_groups_collapse_bacteria() {
        assert_eq!(OrganismBucket::GramPositive.diversity_group(), Some("bacteria"));
        assert_eq!(OrganismBucket::GramNegative.diversity_group(), Some("bacteria"));
        assert_eq!(OrganismBucket::Other.diversity_group(), None);
    }
}
