// File: crates/figure-core/src/series.rs
// Summary: Labeled series model for category charts.
// Notes:
// - A `Series` pairs each numeric sample with a category/ordinal label
//   (team name, month, ...). The constructor enforces equal lengths so
//   rendering code can index either side without re-checking.

use crate::error::DataError;

#[derive(Clone, Debug)]
pub struct Series {
    name: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    /// Construct a labeled series. Fails with `InvalidArgument` when the
    /// label and value sequences differ in length.
    pub fn new(
        name: impl Into<String>,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, DataError> {
        if labels.len() != values.len() {
            return Err(DataError::invalid_argument(format!(
                "label/value length mismatch: {} labels vs {} values",
                labels.len(),
                values.len()
            )));
        }
        Ok(Self { name: name.into(), labels, values })
    }

    /// Convenience constructor from `&str` labels.
    pub fn from_pairs(
        name: impl Into<String>,
        labels: &[&str],
        values: &[f64],
    ) -> Result<Self, DataError> {
        Self::new(
            name,
            labels.iter().map(|s| s.to_string()).collect(),
            values.to_vec(),
        )
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn labels(&self) -> &[String] { &self.labels }

    pub fn values(&self) -> &[f64] { &self.values }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Iterate `(label, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels.iter().map(|s| s.as_str()).zip(self.values.iter().copied())
    }

    /// Minimum value, or `None` for an empty series.
    pub fn min_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Maximum value, or `None` for an empty series.
    pub fn max_value(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}
