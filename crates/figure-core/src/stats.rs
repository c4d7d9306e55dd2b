// File: crates/figure-core/src/stats.rs
// Summary: Derived statistics (ordinary least squares fit, Pearson correlation).

use crate::error::DataError;

/// Degree-1 least-squares fit `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least-squares fit over `(x, y)` pairs.
/// Fails with `InsufficientData` for fewer than 2 points or an x axis with
/// zero variance (a vertical line has no finite slope).
pub fn linear_fit(points: &[(f64, f64)]) -> Result<LinearFit, DataError> {
    if points.len() < 2 {
        return Err(DataError::insufficient_data(format!(
            "linear fit needs at least 2 points, got {}",
            points.len()
        )));
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for &(x, y) in points {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }
    if sxx == 0.0 {
        return Err(DataError::insufficient_data(
            "x values have zero variance".to_string(),
        ));
    }

    let slope = sxy / sxx;
    Ok(LinearFit { slope, intercept: mean_y - slope * mean_x })
}

/// Pearson correlation coefficient over `(x, y)` pairs, in [-1, 1].
/// Fails with `InsufficientData` for fewer than 2 points or when either
/// axis has zero variance (correlation undefined).
pub fn pearson_correlation(points: &[(f64, f64)]) -> Result<f64, DataError> {
    if points.len() < 2 {
        return Err(DataError::insufficient_data(format!(
            "correlation needs at least 2 points, got {}",
            points.len()
        )));
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for &(x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(DataError::insufficient_data(
            "one axis has zero variance, correlation undefined".to_string(),
        ));
    }

    Ok(sxy / (sxx.sqrt() * syy.sqrt()))
}
