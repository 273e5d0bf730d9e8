//! Spearman correlation over the numeric columns of a dataset.

use eda_model::{
    AnalysisOptions, CorrelationMatrix, CorrelationPair, CorrelationResult, VariableType,
};
use polars::prelude::{Column, DataFrame};
use tracing::debug;

use crate::classify::classify_column;
use crate::column::{cell, value_to_f64};
use crate::describe::{average_ranks, pearson};

/// Computes the Spearman matrix and its significant pairs.
///
/// Only numeric-classified columns take part, in source order. With fewer
/// than two of them the analysis has nothing to correlate and reports that
/// as its own outcome rather than an error.
pub fn correlate(df: &DataFrame, options: &AnalysisOptions) -> CorrelationResult {
    let numeric: Vec<&Column> = df
        .get_columns()
        .iter()
        .filter(|column| classify_column(column, options) == VariableType::Numeric)
        .collect();

    if numeric.len() < 2 {
        debug!(count = numeric.len(), "not enough numeric columns to correlate");
        return CorrelationResult::NotEnoughNumericColumns;
    }

    let columns: Vec<String> = numeric.iter().map(|c| c.name().to_string()).collect();
    let series: Vec<Vec<Option<f64>>> = numeric
        .iter()
        .map(|column| optional_floats(column, df.height()))
        .collect();

    let n = numeric.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for (i, row) in values.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let rho = spearman_pairwise(&series[i], &series[j]);
            values[i][j] = rho;
            values[j][i] = rho;
        }
    }

    let threshold = options.correlation_threshold;
    let mut significant = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let rho = values[i][j];
            if rho.is_finite() && rho.abs() > threshold {
                significant.push(CorrelationPair {
                    left: columns[i].clone(),
                    right: columns[j].clone(),
                    coefficient: rho,
                });
            }
        }
    }

    CorrelationResult::Computed(CorrelationMatrix {
        columns,
        values,
        threshold,
        significant,
    })
}

/// Spearman coefficient over the rows where both sides hold a number.
fn spearman_pairwise(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (va, vb) in a.iter().zip(b.iter()) {
        if let (Some(x), Some(y)) = (va, vb) {
            xs.push(*x);
            ys.push(*y);
        }
    }
    if xs.len() < 2 {
        return f64::NAN;
    }
    pearson(&average_ranks(&xs), &average_ranks(&ys))
}

fn optional_floats(column: &Column, height: usize) -> Vec<Option<f64>> {
    (0..height)
        .map(|idx| value_to_f64(&cell(column, idx)).filter(|v| !v.is_nan()))
        .collect()
}
