// File: crates/figure-core/tests/population.rs
// Purpose: Validate the seeded synthetic team population (counts, bounds, determinism).

use rand::rngs::StdRng;
use rand::SeedableRng;

use figure_core::synth::{AUTOMATION_RANGE, PERFORMANCE_RANGE, TEAM_SIZE_RANGE};
use figure_core::{generate_team_population, linear_fit, pearson_correlation, DataError};

#[test]
fn returns_exactly_n_records() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [1usize, 2, 25, 100] {
        let teams = generate_team_population(&mut rng, n).expect("generate");
        assert_eq!(teams.len(), n);
    }
}

#[test]
fn rejects_empty_population() {
    let mut rng = StdRng::seed_from_u64(7);
    let err = generate_team_population(&mut rng, 0).unwrap_err();
    assert!(matches!(err, DataError::InvalidArgument(_)));
}

#[test]
fn values_stay_within_clip_bounds() {
    let mut rng = StdRng::seed_from_u64(1234);
    let teams = generate_team_population(&mut rng, 500).expect("generate");
    for t in &teams {
        assert!(t.automation_level >= AUTOMATION_RANGE.0 && t.automation_level <= AUTOMATION_RANGE.1);
        assert!(t.performance_index >= PERFORMANCE_RANGE.0 && t.performance_index <= PERFORMANCE_RANGE.1);
        assert!(t.team_size >= TEAM_SIZE_RANGE.0 && t.team_size < TEAM_SIZE_RANGE.1);
    }
}

#[test]
fn same_seed_reproduces_population_bitwise() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let pa = generate_team_population(&mut a, 25).expect("generate");
    let pb = generate_team_population(&mut b, 25).expect("generate");
    assert_eq!(pa, pb);
}

#[test]
fn different_seeds_diverge() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(43);
    let pa = generate_team_population(&mut a, 25).expect("generate");
    let pb = generate_team_population(&mut b, 25).expect("generate");
    assert_ne!(pa, pb);
}

#[test]
fn population_recovers_generating_slope() {
    // performance is 0.8 * automation + 10 plus sigma-8 noise; over a large
    // population the fit lands near the generating slope and the correlation
    // is strongly positive. Clipping skews the tails slightly, hence the
    // loose tolerances.
    let mut rng = StdRng::seed_from_u64(42);
    let teams = generate_team_population(&mut rng, 2000).expect("generate");
    let points: Vec<(f64, f64)> = teams.iter().map(|t| t.point()).collect();

    let fit = linear_fit(&points).expect("fit");
    assert!((fit.slope - 0.8).abs() < 0.15, "slope {}", fit.slope);

    let r = pearson_correlation(&points).expect("correlation");
    assert!(r > 0.6, "r = {r}");
}
