// File: crates/figure-core/src/synth.rs
// Summary: Seeded synthetic team population for the automation/performance scatter.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::DataError;

/// Lower/upper clip bounds for the automation level, in percent.
pub const AUTOMATION_RANGE: (f64, f64) = (20.0, 95.0);
/// Lower/upper clip bounds for the performance index.
pub const PERFORMANCE_RANGE: (f64, f64) = (30.0, 100.0);
/// Team sizes are uniform integers in [3, 15).
pub const TEAM_SIZE_RANGE: (u32, u32) = (3, 15);

/// One fabricated engineering team.
/// performance_index is a noisy linear function of automation_level
/// (slope 0.8, intercept 10, Gaussian noise sigma 8), so a regression over
/// the population recovers the slope within tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Team {
    pub automation_level: f64,
    pub performance_index: f64,
    pub team_size: u32,
}

impl Team {
    /// The `(automation_level, performance_index)` pair used for fits.
    pub fn point(&self) -> (f64, f64) {
        (self.automation_level, self.performance_index)
    }
}

/// Generate `n` synthetic teams from the given random source.
///
/// automation_level ~ Normal(70, 15) clipped to [20, 95];
/// performance_index = clip(0.8 * automation + Normal(0, 8) + 10, 30, 100);
/// team_size uniform in [3, 15).
///
/// Values are clipped after sampling rather than drawn from a truncated
/// distribution; the tails are biased toward the bounds on purpose and the
/// regression fixtures assume that shape.
///
/// Draw order is fixed (all automation levels, then all noise terms, then
/// all team sizes) so a seeded RNG reproduces the same population bitwise.
pub fn generate_team_population<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Result<Vec<Team>, DataError> {
    if n == 0 {
        return Err(DataError::invalid_argument("population size must be >= 1"));
    }

    let automation_dist = Normal::new(70.0, 15.0)
        .map_err(|e| DataError::invalid_argument(e.to_string()))?;
    let noise_dist = Normal::new(0.0, 8.0)
        .map_err(|e| DataError::invalid_argument(e.to_string()))?;

    let automation: Vec<f64> = (0..n)
        .map(|_| clip(automation_dist.sample(rng), AUTOMATION_RANGE.0, AUTOMATION_RANGE.1))
        .collect();
    let noise: Vec<f64> = (0..n).map(|_| noise_dist.sample(rng)).collect();
    let sizes: Vec<u32> = (0..n)
        .map(|_| rng.gen_range(TEAM_SIZE_RANGE.0..TEAM_SIZE_RANGE.1))
        .collect();

    Ok(automation
        .into_iter()
        .zip(noise)
        .zip(sizes)
        .map(|((a, e), s)| Team {
            automation_level: a,
            performance_index: clip(0.8 * a + e + 10.0, PERFORMANCE_RANGE.0, PERFORMANCE_RANGE.1),
            team_size: s,
        })
        .collect())
}

#[inline]
fn clip(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo { lo } else if v > hi { hi } else { v }
}
