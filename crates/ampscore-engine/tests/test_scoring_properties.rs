//! End-to-end properties of the scoring engine over realistic records.

use ampscore_common::config::ScoringConfig;
use ampscore_engine::{Criterion, PeptideScorer};
use serde_json::json;

fn scorer() -> PeptideScorer {
    PeptideScorer::new(ScoringConfig::default())
}

#[test]
fn magainin_like_record_takes_predictive_paths() {
    // No MIC / hemolysis data anywhere: both efficacy and selectivity must
    // fall back to prediction, and the 23-residue length lands in the
    // (20, 30] synthesis tier.
    let rec = json!({
        "DRAMP ID": "DRAMP18083",
        "Sequence": "GIGKFLHSAGKFGKAFVGEIMKS",
        "Source": "Frog skin secretion"
    });
    let result = scorer().score(&rec, None);

    assert_eq!(result.identifier, "DRAMP18083");
    assert_eq!(result.breakdown["efficacy"]["path"], "predicted");
    assert_eq!(result.breakdown["selectivity"]["path"], "predicted");
    assert_eq!(result.breakdown["synthesis"]["length_score"], json!(8.0));
    assert!(result.error.is_none());
}

#[test]
fn all_sub_scores_bounded() {
    let records = vec![
        json!({"Sequence": ""}),
        json!({"Sequence": "W"}),
        json!({"Sequence": "KKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKKK"}),
        json!({"Sequence": "GIGKFLHSAGKFGKAFVGEIMKS", "Hemolysis": 99.0}),
        json!({
            "Sequence": "CCCCCCCCCCWWWWWWWWWW",
            "Target Organism": [{"name": "E.coli", "mic_value": 500.0}]
        }),
    ];

    for rec in records {
        let result = scorer().score(&rec, Some("t"));
        for criterion in Criterion::ALL {
            let s = result.sub_scores[criterion.as_str()];
            assert!((0.0..=10.0).contains(&s), "{criterion:?} out of range: {s}");
        }
        assert!(result.sub_scores["synthesis"] >= 1.0, "synthesis has a floor");
        assert!((0.0..=10.0).contains(&result.total));
    }
}

#[test]
fn five_cysteine_record_matches_worked_example() {
    let rec = json!({"Sequence": "CCCCC"});
    let result = scorer().score(&rec, Some("cys5"));

    assert_eq!(result.features.cys_bonds_potential, 2);
    assert_eq!(result.breakdown["stability"]["disulfide_bonus"], json!(2.0));
    assert_eq!(result.breakdown["synthesis"]["disulfide_penalty"], json!(0.5));
}

#[test]
fn similarity_eighty_sets_novelty_base_two() {
    let rec = json!({
        "Sequence": "AAAA",
        "Similar Sequences": [{"similarity": 80.0}]
    });
    let result = scorer().score(&rec, Some("sim"));
    assert_eq!(
        result.breakdown["novelty"]["novelty_from_similarity"],
        json!(2.0)
    );
}

#[test]
fn nested_schema_variants_resolve_identically() {
    // The same logical record nested two different ways must score the
    // same: the locator is schema-agnostic.
    let flat = json!({
        "DRAMP ID": "D1",
        "Sequence": "KWKLFKKIGAVLKVL",
        "Hemolysis": 12.0
    });
    let nested = json!({
        "header": {"DRAMP ID": "D1"},
        "sections": [
            {"body": {"Sequence": "KWKLFKKIGAVLKVL"}},
            {"assay": {"Hemolysis": 12.0}}
        ]
    });

    let a = scorer().score(&flat, None);
    let b = scorer().score(&nested, None);
    assert_eq!(a.total, b.total);
    assert_eq!(a.sub_scores, b.sub_scores);
    assert_eq!(a.identifier, b.identifier);
}

#[test]
fn malformed_annotations_degrade_quietly() {
    let rec = json!({
        "Sequence": "GIGKFLHSAGKFGKAFVGEIMKS",
        "Target Organism": ["free text", 17, {"name": "E.coli", "mic_value": "n/a"}],
        "Similar Sequences": "not a list",
        "Hemolysis": {"unexpected": "shape"}
    });
    let result = scorer().score(&rec, Some("messy"));
    // Everything unparseable is treated as absent, so predictive paths run.
    assert_eq!(result.breakdown["efficacy"]["path"], "predicted");
    assert!(result.error.is_none());
}

#[test]
fn organism_buckets_reported_with_display_names() {
    let rec = json!({
        "Sequence": "KWK",
        "Target Organism": [
            {"name": "Staphylococcus aureus", "activity": "MIC 4 μg/ml"},
            {"name": "HeLa cells"},
            {"name": "unclassified isolate"}
        ]
    });
    let result = scorer().score(&rec, None);
    let buckets = result.target_organisms.as_object().unwrap();
    assert!(buckets.contains_key("Gram-positive"));
    assert!(buckets.contains_key("Cancer"));
    assert!(buckets.contains_key("Other"));
    assert!(!buckets.contains_key("Fungi"));
}
