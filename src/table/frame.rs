//! # Frame
//!
use ndarray::Array1;

use crate::error::StatsError;

/// Column-oriented table of numeric survey variables.
///
/// Columns are named, equal-length `f64` arrays; rows are observations.
/// Every lookup goes through [`Table::column`], which fails eagerly on an
/// unknown name instead of producing an undefined column downstream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
  names: Vec<String>,
  columns: Vec<Array1<f64>>,
}

impl Table {
  /// Empty table.
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a table from `(name, column)` pairs, kept in insertion order.
  ///
  /// # Panics
  /// Panics if the columns differ in length or a name repeats.
  pub fn from_columns<N, I>(columns: I) -> Self
  where
    N: Into<String>,
    I: IntoIterator<Item = (N, Array1<f64>)>,
  {
    let mut table = Self::new();
    for (name, column) in columns {
      table.insert(name, column);
    }
    table
  }

  /// Appends a named column.
  ///
  /// # Panics
  /// Panics if the column's length disagrees with the table, or the name
  /// is already present.
  pub fn insert(&mut self, name: impl Into<String>, column: Array1<f64>) {
    let name = name.into();
    assert!(
      self.position(&name).is_none(),
      "column `{name}` inserted twice"
    );
    if let Some(first) = self.columns.first() {
      assert_eq!(
        first.len(),
        column.len(),
        "column `{name}` length disagrees with table"
      );
    }
    self.names.push(name);
    self.columns.push(column);
  }

  /// Column by name.
  ///
  /// # Errors
  /// [`StatsError::ColumnNotFound`] if the table has no such column.
  pub fn column(&self, name: &str) -> Result<&Array1<f64>, StatsError> {
    self
      .position(name)
      .map(|position| &self.columns[position])
      .ok_or_else(|| StatsError::ColumnNotFound {
        name: name.to_string(),
      })
  }

  /// Column names in insertion order.
  pub fn names(&self) -> &[String] {
    &self.names
  }

  /// Number of rows.
  pub fn n_rows(&self) -> usize {
    self.columns.first().map_or(0, Array1::len)
  }

  /// Number of columns.
  pub fn n_columns(&self) -> usize {
    self.columns.len()
  }

  /// Whether the table holds no columns.
  pub fn is_empty(&self) -> bool {
    self.columns.is_empty()
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &Array1<f64>)> {
    self.names.iter().map(String::as_str).zip(self.columns.iter())
  }

  fn position(&self, name: &str) -> Option<usize> {
    self.names.iter().position(|candidate| candidate == name)
  }
}
