//! # Averages
//!
//! $$
//! \bar v_g=\frac{\sum_{i\in g} v_i\,w_i}{\sum_{i\in g} w_i}
//! $$
//!
use ndarray::Array1;
use tracing::debug;

use crate::error::StatsError;
use crate::table::frame::Table;

impl Table {
  /// Weighted mean of every column, overall or within groups.
  ///
  /// Ungrouped, the result has a single row holding `Σ(v·w)/Σw` per
  /// column. The weight column itself is averaged by the same rule, so
  /// its entry is `Σw²/Σw` rather than the arithmetic mean of the
  /// weights; that is deliberate and kept as documented behavior.
  ///
  /// Grouped, rows are the distinct values of `group` in ascending
  /// order, each column averaged over that group's observations only.
  /// Group values are compared exactly, which is what small integer bin
  /// labels call for.
  ///
  /// # Errors
  /// [`StatsError::ColumnNotFound`] for a missing weight or group
  /// column; [`StatsError::DegenerateSample`] when the sample, or one
  /// group, has zero total weight.
  pub fn weighted_averages(
    &self,
    weight: &str,
    group: Option<&str>,
  ) -> Result<Table, StatsError> {
    let weights = self.column(weight)?;

    let groups: Vec<(Option<f64>, Vec<usize>)> = match group {
      None => vec![(None, (0..self.n_rows()).collect())],
      Some(name) => {
        let keys = self.column(name)?;
        let mut distinct: Vec<f64> = keys.to_vec();
        distinct.sort_by(f64::total_cmp);
        distinct.dedup();
        distinct
          .into_iter()
          .map(|key| {
            let rows = keys
              .iter()
              .enumerate()
              .filter(|(_, &value)| value == key)
              .map(|(row, _)| row)
              .collect();
            (Some(key), rows)
          })
          .collect()
      }
    };

    let mut totals = Vec::with_capacity(groups.len());
    for (key, rows) in &groups {
      let total: f64 = rows.iter().map(|&row| weights[row]).sum();
      if total == 0.0 {
        let reason = match (group, key) {
          (Some(name), Some(key)) => format!("group `{name}` == {key} has zero total weight"),
          _ => "total sample weight is zero".to_string(),
        };
        return Err(StatsError::DegenerateSample { reason });
      }
      totals.push(total);
    }

    let mut averages = Table::new();
    for (name, column) in self.iter() {
      let averaged: Array1<f64> = groups
        .iter()
        .zip(&totals)
        .map(|((_, rows), &total)| {
          rows.iter().map(|&row| column[row] * weights[row]).sum::<f64>() / total
        })
        .collect();
      averages.insert(name, averaged);
    }
    debug!(
      columns = self.n_columns(),
      groups = groups.len(),
      "computed weighted averages"
    );
    Ok(averages)
  }

  /// Re-expresses columns as a percentage of a denominator column, row
  /// by row: `100·v/d`. Columns not named stay unchanged. Typically run
  /// on an averages table, e.g. income sources against total income.
  ///
  /// # Errors
  /// [`StatsError::ColumnNotFound`] for a missing numerator or
  /// denominator column.
  pub fn percent_of(&self, numerators: &[&str], denominator: &str) -> Result<Table, StatsError> {
    let base = self.column(denominator)?.clone();
    for name in numerators {
      self.column(name)?;
    }

    let mut rescaled = Table::new();
    for (name, column) in self.iter() {
      if numerators.contains(&name) {
        let shares: Array1<f64> = column
          .iter()
          .zip(base.iter())
          .map(|(&value, &denom)| value / denom * 100.0)
          .collect();
        rescaled.insert(name, shares);
      } else {
        rescaled.insert(name, column.clone());
      }
    }
    Ok(rescaled)
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use ndarray::array;

  use crate::error::StatsError;
  use crate::table::frame::Table;

  fn household_sample() -> Table {
    Table::from_columns([
      ("net_worth", array![1.0, 2.0, 3.0, 4.0, 5.0]),
      ("income_total", array![1.0, 2.0, 3.0, 4.0, 5.0]),
      ("hh_age", array![27.0, 36.0, 53.0, 61.0, 78.0]),
      ("hh_weight", array![1.0, 1.0, 1.0, 1.0, 1.0]),
    ])
  }

  #[test]
  fn ungrouped_averages_collapse_to_one_row() {
    let averages = household_sample()
      .weighted_averages("hh_weight", None)
      .unwrap();

    assert_eq!(averages.n_rows(), 1);
    assert_abs_diff_eq!(averages.column("net_worth").unwrap()[0], 3.0);
    assert_abs_diff_eq!(averages.column("income_total").unwrap()[0], 3.0);
    assert_abs_diff_eq!(averages.column("hh_age").unwrap()[0], 51.0);
    assert_abs_diff_eq!(averages.column("hh_weight").unwrap()[0], 1.0);
  }

  #[test]
  fn weight_column_averages_to_its_own_second_moment() {
    let table = Table::from_columns([
      ("income_total", array![10.0, 20.0]),
      ("hh_weight", array![1.0, 3.0]),
    ]);
    let averages = table.weighted_averages("hh_weight", None).unwrap();

    // Σw²/Σw = (1 + 9) / 4, not the arithmetic mean 2.
    assert_abs_diff_eq!(averages.column("hh_weight").unwrap()[0], 2.5);
    assert_abs_diff_eq!(averages.column("income_total").unwrap()[0], 17.5);
  }

  #[test]
  fn grouped_averages_sort_groups_ascending() {
    let table = Table::from_columns([
      ("income_total", array![40.0, 10.0, 30.0, 20.0]),
      ("bin", array![2.0, 1.0, 2.0, 1.0]),
      ("hh_weight", array![1.0, 1.0, 3.0, 1.0]),
    ]);
    let averages = table.weighted_averages("hh_weight", Some("bin")).unwrap();

    assert_eq!(averages.n_rows(), 2);
    assert_eq!(averages.column("bin").unwrap(), &array![1.0, 2.0]);
    assert_abs_diff_eq!(averages.column("income_total").unwrap()[0], 15.0);
    assert_abs_diff_eq!(
      averages.column("income_total").unwrap()[1],
      (40.0 + 90.0) / 4.0
    );
  }

  #[test]
  fn missing_weight_column_is_reported() {
    let err = household_sample()
      .weighted_averages("weights", None)
      .unwrap_err();
    assert_eq!(
      err,
      StatsError::ColumnNotFound {
        name: "weights".to_string()
      }
    );
  }

  #[test]
  fn missing_group_column_is_reported() {
    let err = household_sample()
      .weighted_averages("hh_weight", Some("decile"))
      .unwrap_err();
    assert!(matches!(err, StatsError::ColumnNotFound { .. }));
  }

  #[test]
  fn zero_weight_group_is_rejected_not_nan() {
    let table = Table::from_columns([
      ("income_total", array![10.0, 20.0]),
      ("bin", array![1.0, 2.0]),
      ("hh_weight", array![1.0, 0.0]),
    ]);
    let err = table
      .weighted_averages("hh_weight", Some("bin"))
      .unwrap_err();
    match err {
      StatsError::DegenerateSample { reason } => {
        assert!(reason.contains("bin"), "reason should name the group: {reason}")
      }
      other => panic!("expected DegenerateSample, got {other:?}"),
    }
  }

  #[test]
  fn percent_of_rescales_named_columns_only() {
    let table = Table::from_columns([
      ("income_wage", array![30.0, 60.0]),
      ("income_capital", array![20.0, 40.0]),
      ("income_total", array![50.0, 100.0]),
    ]);
    let shares = table
      .percent_of(&["income_wage", "income_capital"], "income_total")
      .unwrap();

    assert_eq!(shares.column("income_wage").unwrap(), &array![60.0, 60.0]);
    assert_eq!(shares.column("income_capital").unwrap(), &array![40.0, 40.0]);
    assert_eq!(shares.column("income_total").unwrap(), &array![50.0, 100.0]);
  }

  #[test]
  fn percent_of_rejects_unknown_denominator() {
    let table = Table::from_columns([("income_wage", array![30.0])]);
    let err = table.percent_of(&["income_wage"], "income_total").unwrap_err();
    assert!(matches!(err, StatsError::ColumnNotFound { .. }));
  }
}
