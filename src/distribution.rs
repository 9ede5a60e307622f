//! # Distribution
//!
//! $$
//! \hat F(x)=\frac{\sum_i w_i\,\mathbf{1}\{x_i\le x\}}{\sum_i w_i}
//! $$
//!
use ndarray::Array1;

pub mod density;
pub mod gini;
pub mod partition;

/// Indices that sort `values` ascending.
///
/// The sort is stable: tied values keep their original input order, so
/// statistics derived from the order are reproducible run to run.
pub fn argsort(values: &Array1<f64>) -> Vec<usize> {
  let mut indices: Vec<usize> = (0..values.len()).collect();
  indices.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
  indices
}
