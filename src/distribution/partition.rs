//! # Partition
//!
//! $$
//! p_i=\min\{\,j:\ x_{(j)}>e_i\,\}
//! $$
//!
use ndarray::Array1;
use tracing::debug;

use crate::error::StatsError;

/// Population-share cut points for a decile partition of the weighted CDF.
pub const DECILE_CUTS: [f64; 9] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];

/// Population-share cut points for a quintile partition of the weighted CDF.
pub const QUINTILE_CUTS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Household-head age bracket endpoints for life-cycle groups.
pub const AGE_BRACKETS: [f64; 4] = [35.0, 45.0, 55.0, 65.0];

/// Assignment of an ascending-sorted sample to contiguous bins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
  /// 1-based bin label per observation, non-decreasing along the sample.
  pub labels: Vec<usize>,
  /// Number of bins, `endpoints.len() + 1`.
  pub bins: usize,
}

impl Partition {
  /// Splits an ascending-sorted sample at strictly increasing endpoints.
  ///
  /// Each endpoint's bin ends right before the first element strictly
  /// greater than it, so an element exactly equal to an endpoint stays in
  /// the lower bin. Everything above the last endpoint falls into bin
  /// `endpoints.len() + 1`.
  ///
  /// Both orderings are the caller's responsibility and are not
  /// re-validated here; an unsorted sample silently mis-assigns bins.
  /// Each endpoint is resolved by a fresh forward scan, so the cost is
  /// O(n·k) with k small in practice.
  ///
  /// # Errors
  /// [`StatsError::PartitionRange`] if an endpoint is at or above the
  /// sample maximum, leaving no valid split position.
  pub fn split(endpoints: &[f64], sorted_values: &Array1<f64>) -> Result<Self, StatsError> {
    let n = sorted_values.len();
    let mut labels = vec![0usize; n];
    let mut filled = 0usize;

    for (bin, &endpoint) in endpoints.iter().enumerate() {
      let position = sorted_values
        .iter()
        .position(|&value| value > endpoint)
        .ok_or(StatsError::PartitionRange { endpoint })?;
      let upper = position.max(filled);
      for label in &mut labels[filled..upper] {
        *label = bin + 1;
      }
      filled = upper;
    }
    for label in &mut labels[filled..] {
      *label = endpoints.len() + 1;
    }
    debug!(n, bins = endpoints.len() + 1, "partitioned sample");

    Ok(Self {
      labels,
      bins: endpoints.len() + 1,
    })
  }

  /// Number of observations per bin, indexed by bin label minus one.
  pub fn counts(&self) -> Vec<usize> {
    let mut counts = vec![0usize; self.bins];
    for &label in &self.labels {
      counts[label - 1] += 1;
    }
    counts
  }

  /// Labels as a float column, for merging back into a table.
  pub fn to_column(&self) -> Array1<f64> {
    self.labels.iter().map(|&label| label as f64).collect()
  }

  /// Number of labeled observations.
  pub fn len(&self) -> usize {
    self.labels.len()
  }

  /// Whether the partitioned sample was empty.
  pub fn is_empty(&self) -> bool {
    self.labels.is_empty()
  }
}
