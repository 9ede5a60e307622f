//! # Error
//!
//! Error taxonomy shared by every statistic in the crate. Each variant is
//! a precondition violation on otherwise well-formed numeric input; none
//! are recoverable inside the library, so computations fail at the point
//! of detection instead of returning partially filled or NaN results.

use thiserror::Error;

/// Errors surfaced by the distributional statistics routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
  /// A sampling weight is negative or non-finite.
  #[error("invalid sampling weight {weight} at index {index}")]
  InvalidWeight {
    /// Position of the offending weight in the input.
    index: usize,
    /// The offending weight value.
    weight: f64,
  },

  /// A normalizing total (weight sum, weighted value sum, or a group's
  /// weight sum) is zero, leaving the requested statistic undefined.
  #[error("degenerate sample: {reason}")]
  DegenerateSample {
    /// Which total degenerated.
    reason: String,
  },

  /// A partition endpoint at or beyond the sample maximum, so no valid
  /// split position exists.
  #[error("no observation exceeds partition endpoint {endpoint}")]
  PartitionRange {
    /// The endpoint with no element strictly above it.
    endpoint: f64,
  },

  /// A referenced column is missing from the table.
  #[error("column `{name}` not found in table")]
  ColumnNotFound {
    /// The requested column name.
    name: String,
  },
}
