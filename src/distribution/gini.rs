//! # Gini
//!
//! $$
//! G=\sum_{i=1}^{n-1}\left(L_i\,F_{i-1}-F_i\,L_{i-1}\right)
//! $$
//!
use ndarray::Array1;
use tracing::debug;

use crate::distribution::argsort;
use crate::error::StatsError;

/// How the discrete shoelace sum treats the segment closing the Lorenz
/// polygon at the corner (1, 1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GiniFormula {
  /// Sum over segments between consecutive sorted observations only,
  /// leaving the closing corner segment out. Reproduces the historical
  /// output values and is the default.
  #[default]
  Truncated,
  /// Also counts the closing segment to (1, 1). Differs from
  /// [`GiniFormula::Truncated`] only by the floating-point residue of the
  /// final cumulative shares.
  Closed,
}

/// Weighted Gini coefficient together with the discrete Lorenz curve.
#[derive(Clone, Debug, PartialEq)]
pub struct GiniLorenz {
  /// Weighted Gini coefficient.
  pub gini: f64,
  /// Lorenz curve of length n + 1, starting at zero and non-decreasing.
  pub lorenz: Array1<f64>,
}

impl GiniLorenz {
  /// Computes the weighted Gini coefficient and Lorenz curve with the
  /// default [`GiniFormula::Truncated`] summation.
  ///
  /// `weights` must be index-aligned with `values`. The ascending order
  /// is derived internally by a stable index sort of `values`, tied
  /// values keeping their original input order. Non-positive values are
  /// not rejected; they are the caller's domain concern and can push the
  /// coefficient outside [0, 1].
  pub fn compute(
    values: &Array1<f64>,
    weights: &Array1<f64>,
    n: usize,
  ) -> Result<Self, StatsError> {
    Self::compute_with(values, weights, n, GiniFormula::default())
  }

  /// Same as [`Self::compute`], with an explicit summation formula.
  ///
  /// # Errors
  /// [`StatsError::DegenerateSample`] if `n` disagrees with the input
  /// lengths or either normalizing total is zero;
  /// [`StatsError::InvalidWeight`] for a negative or non-finite weight.
  pub fn compute_with(
    values: &Array1<f64>,
    weights: &Array1<f64>,
    n: usize,
    formula: GiniFormula,
  ) -> Result<Self, StatsError> {
    if n != values.len() || weights.len() != values.len() {
      return Err(StatsError::DegenerateSample {
        reason: format!(
          "expected {n} observations, got {} values and {} weights",
          values.len(),
          weights.len()
        ),
      });
    }
    for (index, &weight) in weights.iter().enumerate() {
      if !weight.is_finite() || weight < 0.0 {
        return Err(StatsError::InvalidWeight { index, weight });
      }
    }

    let order = argsort(values);
    let mut pxi = Array1::<f64>::zeros(n);
    let mut pci = Array1::<f64>::zeros(n);
    let mut wxsum = 0.0;
    let mut wsum = 0.0;
    for (rank, &index) in order.iter().enumerate() {
      wxsum += values[index] * weights[index];
      wsum += weights[index];
      pxi[rank] = wxsum;
      pci[rank] = wsum;
    }
    if wsum == 0.0 {
      return Err(StatsError::DegenerateSample {
        reason: "total sample weight is zero".to_string(),
      });
    }
    if wxsum == 0.0 {
      return Err(StatsError::DegenerateSample {
        reason: "total weighted value is zero".to_string(),
      });
    }
    pxi.mapv_inplace(|share| share / wxsum);
    pci.mapv_inplace(|share| share / wsum);

    let mut gini = 0.0;
    for i in 1..n {
      gini += pxi[i] * pci[i - 1] - pci[i] * pxi[i - 1];
    }
    if formula == GiniFormula::Closed {
      gini += pci[n - 1] - pxi[n - 1];
    }

    let mut lorenz = Array1::<f64>::zeros(n + 1);
    for i in 0..n {
      lorenz[i + 1] = pxi[i];
    }
    debug!(n, gini, ?formula, "computed weighted gini");

    Ok(Self { gini, lorenz })
  }
}
