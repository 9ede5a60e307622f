//! # Sorted
//!
use ndarray::Array1;

use crate::distribution::argsort;
use crate::distribution::density::WeightedDensity;
use crate::distribution::partition::Partition;
use crate::error::StatsError;
use crate::table::frame::Table;

/// A table paired with the variable it is ordered by.
///
/// Downstream grouping needs the sample sorted by the same variable the
/// bin labels were derived from. The view carries the key and its stable
/// permutation together, so labels can only be attached to rows in the
/// order they were derived in; a mismatched merge stops being expressible
/// instead of silently misaligning households.
#[derive(Clone, Debug)]
pub struct SortedView<'a> {
  table: &'a Table,
  key: String,
  order: Vec<usize>,
}

impl<'a> SortedView<'a> {
  /// Sorts `table` ascending by `key`, ties keeping original row order.
  ///
  /// # Errors
  /// [`StatsError::ColumnNotFound`] if `key` is not a column of `table`.
  pub fn by(table: &'a Table, key: &str) -> Result<Self, StatsError> {
    let order = argsort(table.column(key)?);
    Ok(Self {
      table,
      key: key.to_string(),
      order,
    })
  }

  /// The variable this view is sorted by.
  pub fn key(&self) -> &str {
    &self.key
  }

  /// Permutation mapping sorted rank to original row index.
  pub fn order(&self) -> &[usize] {
    &self.order
  }

  /// A column reordered into the view's ascending order.
  ///
  /// # Errors
  /// [`StatsError::ColumnNotFound`] if the table has no such column.
  pub fn sorted_column(&self, name: &str) -> Result<Array1<f64>, StatsError> {
    let column = self.table.column(name)?;
    Ok(self.order.iter().map(|&row| column[row]).collect())
  }

  /// Weighted pdf/cdf of the key variable.
  ///
  /// # Errors
  /// Everything [`WeightedDensity::from_weights`] returns, plus
  /// [`StatsError::ColumnNotFound`] for a missing weight column.
  pub fn density(&self, weight: &str) -> Result<WeightedDensity, StatsError> {
    WeightedDensity::from_weights(self.table.column(weight)?, &self.order)
  }

  /// Splits the view at cut points in the key variable's own domain,
  /// e.g. at [`AGE_BRACKETS`](crate::distribution::partition::AGE_BRACKETS)
  /// for life-cycle groups.
  ///
  /// # Errors
  /// Everything [`Partition::split`] returns.
  pub fn partition(&self, endpoints: &[f64]) -> Result<Partition, StatsError> {
    Partition::split(endpoints, &self.sorted_column(&self.key)?)
  }

  /// Splits the view into bins of given population shares by cutting the
  /// weighted CDF, e.g. at
  /// [`QUINTILE_CUTS`](crate::distribution::partition::QUINTILE_CUTS) for
  /// quintiles of equal population mass.
  ///
  /// # Errors
  /// Everything [`Self::density`] and [`Partition::split`] return.
  pub fn partition_by_population(
    &self,
    weight: &str,
    shares: &[f64],
  ) -> Result<Partition, StatsError> {
    Partition::split(shares, &self.density(weight)?.cdf)
  }

  /// Materializes the table in the view's row order.
  pub fn to_table(&self) -> Table {
    let mut sorted = Table::new();
    for (name, column) in self.table.iter() {
      let reordered: Array1<f64> = self.order.iter().map(|&row| column[row]).collect();
      sorted.insert(name, reordered);
    }
    sorted
  }

  /// Materializes the sorted table with the partition's labels appended
  /// as a new column, aligned by construction.
  ///
  /// # Panics
  /// Panics if the partition was derived from a sample of a different
  /// length than this view.
  pub fn with_labels(&self, name: &str, partition: &Partition) -> Table {
    let mut labeled = self.to_table();
    labeled.insert(name, partition.to_column());
    labeled
  }
}
