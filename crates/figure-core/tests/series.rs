// File: crates/figure-core/tests/series.rs
// Purpose: Validate the labeled-series invariant and the fixed datasets.

use figure_core::datasets::{
    dora_metrics, framework_rows, methodology_scores, metric_evolution, METHODOLOGY_CATEGORIES,
    MONTHS, TEAMS,
};
use figure_core::{DataError, Series};

#[test]
fn constructor_rejects_length_mismatch() {
    let err = Series::from_pairs("bad", &["a", "b"], &[1.0]).unwrap_err();
    assert!(matches!(err, DataError::InvalidArgument(_)));
}

#[test]
fn pairs_iterate_in_order() {
    let s = Series::from_pairs("s", &["a", "b", "c"], &[1.0, 2.0, 3.0]).expect("series");
    let pairs: Vec<(&str, f64)> = s.iter().collect();
    assert_eq!(pairs, vec![("a", 1.0), ("b", 2.0), ("c", 3.0)]);
    assert_eq!(s.min_value(), Some(1.0));
    assert_eq!(s.max_value(), Some(3.0));
}

#[test]
fn empty_series_has_no_extrema() {
    let s = Series::new("empty", vec![], vec![]).expect("series");
    assert!(s.is_empty());
    assert_eq!(s.min_value(), None);
    assert_eq!(s.max_value(), None);
}

#[test]
fn dora_dataset_matches_team_count() {
    let dora = dora_metrics().expect("dataset");
    assert_eq!(dora.deployment_frequency.len(), TEAMS.len());
    assert_eq!(dora.lead_time.len(), TEAMS.len());
    assert_eq!(dora.deployment_frequency.labels()[2], "Team Gamma");
}

#[test]
fn evolution_dataset_covers_twelve_months() {
    let evo = metric_evolution().expect("dataset");
    for s in [&evo.test_coverage, &evo.team_velocity, &evo.production_defects] {
        assert_eq!(s.len(), MONTHS.len());
    }
    // coverage climbs, defects fall
    assert_eq!(evo.test_coverage.values().first(), Some(&68.0));
    assert_eq!(evo.test_coverage.values().last(), Some(&95.0));
    assert_eq!(evo.production_defects.values().first(), Some(&28.0));
    assert_eq!(evo.production_defects.values().last(), Some(&4.0));
}

#[test]
fn methodology_scores_span_all_categories() {
    let scores = methodology_scores().expect("dataset");
    assert_eq!(scores.len(), 3);
    for s in &scores {
        assert_eq!(s.len(), METHODOLOGY_CATEGORIES.len());
        assert!(s.values().iter().all(|v| (1.0..=10.0).contains(v)));
    }
    assert_eq!(scores[0].name(), "Scrum");
}

#[test]
fn framework_table_has_seven_rows() {
    let rows = framework_rows();
    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|r| (0.0..=10.0).contains(&r.score)));
}
