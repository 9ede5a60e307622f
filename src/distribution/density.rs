//! # Density
//!
//! $$
//! \hat f_{(i)}=\frac{w_{(i)}}{\sum_j w_j},\qquad
//! \hat F_{(i)}=\frac{\sum_{j\le i}w_{(j)}}{\sum_j w_j}
//! $$
//!
use ndarray::Array1;
use tracing::debug;

use crate::error::StatsError;

/// Empirical weighted pdf/cdf of a sample, aligned to ascending order of
/// the target variable.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedDensity {
  /// Weight share of each observation; sums to one.
  pub pdf: Array1<f64>,
  /// Cumulative weight share up to each observation; ends at one.
  pub cdf: Array1<f64>,
}

impl WeightedDensity {
  /// Estimates the empirical pdf/cdf from raw sampling weights and the
  /// ascending sort order of the target variable.
  ///
  /// `order[k]` is the index into `weights` of the k-th smallest
  /// observation, as produced by [`crate::distribution::argsort`] on the
  /// variable under study.
  ///
  /// # Errors
  /// [`StatsError::DegenerateSample`] if `order` is not a permutation of
  /// `0..weights.len()`, plus everything [`Self::from_sorted_weights`]
  /// returns.
  pub fn from_weights(weights: &Array1<f64>, order: &[usize]) -> Result<Self, StatsError> {
    let n = weights.len();
    if order.len() != n {
      return Err(StatsError::DegenerateSample {
        reason: format!("sort order has length {}, sample has {n}", order.len()),
      });
    }
    let mut seen = vec![false; n];
    for &index in order {
      if index >= n || seen[index] {
        return Err(StatsError::DegenerateSample {
          reason: format!("sort order is not a permutation of 0..{n}"),
        });
      }
      seen[index] = true;
    }
    let sorted: Array1<f64> = order.iter().map(|&index| weights[index]).collect();
    Self::from_sorted_weights(&sorted)
  }

  /// Estimates the empirical pdf/cdf from weights the caller has already
  /// reordered into ascending order of the target variable.
  ///
  /// Prefix sums are normalized by the total, so replicate weights that
  /// do not add up to one are handled.
  ///
  /// # Errors
  /// [`StatsError::InvalidWeight`] for a negative or non-finite weight,
  /// [`StatsError::DegenerateSample`] if the total weight is zero.
  pub fn from_sorted_weights(weights: &Array1<f64>) -> Result<Self, StatsError> {
    for (index, &weight) in weights.iter().enumerate() {
      if !weight.is_finite() || weight < 0.0 {
        return Err(StatsError::InvalidWeight { index, weight });
      }
    }

    let mut cumulative = Array1::<f64>::zeros(weights.len());
    let mut total = 0.0;
    for (i, &weight) in weights.iter().enumerate() {
      total += weight;
      cumulative[i] = total;
    }
    if total == 0.0 {
      return Err(StatsError::DegenerateSample {
        reason: "total sample weight is zero".to_string(),
      });
    }
    debug!(n = weights.len(), total, "estimated weighted density");

    Ok(Self {
      pdf: weights / total,
      cdf: cumulative / total,
    })
  }
}
