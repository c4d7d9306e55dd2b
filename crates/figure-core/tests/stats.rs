// File: crates/figure-core/tests/stats.rs
// Purpose: Validate least-squares fit and Pearson correlation on canonical inputs.

use figure_core::{linear_fit, pearson_correlation, DataError};

#[test]
fn fit_identity_line() {
    let fit = linear_fit(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).expect("fit");
    assert!((fit.slope - 1.0).abs() < 1e-9, "slope {}", fit.slope);
    assert!(fit.intercept.abs() < 1e-9, "intercept {}", fit.intercept);
}

#[test]
fn fit_affine_line() {
    // y = -2x + 5, exactly
    let pts: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, -2.0 * i as f64 + 5.0)).collect();
    let fit = linear_fit(&pts).expect("fit");
    assert!((fit.slope + 2.0).abs() < 1e-9);
    assert!((fit.intercept - 5.0).abs() < 1e-9);
    assert!((fit.at(3.0) + 1.0).abs() < 1e-9);
}

#[test]
fn fit_rejects_single_point() {
    let err = linear_fit(&[(1.0, 1.0)]).unwrap_err();
    assert!(matches!(err, DataError::InsufficientData(_)));
}

#[test]
fn fit_rejects_vertical_line() {
    let err = linear_fit(&[(2.0, 1.0), (2.0, 3.0), (2.0, 5.0)]).unwrap_err();
    assert!(matches!(err, DataError::InsufficientData(_)));
}

#[test]
fn correlation_perfect_positive() {
    let pts: Vec<(f64, f64)> = (0..20).map(|i| (i as f64, 3.0 * i as f64 + 1.0)).collect();
    let r = pearson_correlation(&pts).expect("correlation");
    assert!((r - 1.0).abs() < 1e-9, "r = {r}");
}

#[test]
fn correlation_perfect_negative() {
    let pts: Vec<(f64, f64)> = (0..20).map(|i| (i as f64, -0.5 * i as f64)).collect();
    let r = pearson_correlation(&pts).expect("correlation");
    assert!((r + 1.0).abs() < 1e-9, "r = {r}");
}

#[test]
fn correlation_rejects_zero_variance() {
    // flat y axis
    let err = pearson_correlation(&[(0.0, 4.0), (1.0, 4.0), (2.0, 4.0)]).unwrap_err();
    assert!(matches!(err, DataError::InsufficientData(_)));
    // flat x axis
    let err = pearson_correlation(&[(4.0, 0.0), (4.0, 1.0), (4.0, 2.0)]).unwrap_err();
    assert!(matches!(err, DataError::InsufficientData(_)));
}

#[test]
fn correlation_rejects_single_point() {
    let err = pearson_correlation(&[(1.0, 1.0)]).unwrap_err();
    assert!(matches!(err, DataError::InsufficientData(_)));
}

#[test]
fn correlation_is_bounded() {
    let pts = [(0.0, 2.0), (1.0, 1.0), (2.0, 4.0), (3.0, 3.0), (4.0, 8.0)];
    let r = pearson_correlation(&pts).expect("correlation");
    assert!((-1.0..=1.0).contains(&r), "r = {r}");
}
