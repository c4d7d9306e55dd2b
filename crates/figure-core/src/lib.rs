// File: crates/figure-core/src/lib.rs
// Summary: Core library entry point; exports datasets, synthetic generation, and statistics.

pub mod datasets;
pub mod error;
pub mod series;
pub mod stats;
pub mod synth;

pub use error::DataError;
pub use series::Series;
pub use stats::{linear_fit, pearson_correlation, LinearFit};
pub use synth::{generate_team_population, Team};
