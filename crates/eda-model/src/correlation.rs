//! Correlation matrix and significant-pair records.

use serde::{Deserialize, Serialize};

/// One significant correlation between two distinct numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub left: String,
    pub right: String,
    pub coefficient: f64,
}

/// Spearman correlation matrix over the numeric columns of a dataset.
///
/// The matrix is symmetric with a unit diagonal; `significant` lists the
/// upper-triangle pairs whose absolute coefficient exceeds the threshold,
/// in row-major scan order (no self-pairs, no duplicate unordered pairs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Numeric column names, in source order; row/column index order.
    pub columns: Vec<String>,
    /// `values[i][j]` = Spearman coefficient of columns i and j. NaN when
    /// a pair has no defined coefficient (zero variance, too few rows).
    pub values: Vec<Vec<f64>>,
    /// Threshold the significant list was extracted with.
    pub threshold: f64,
    pub significant: Vec<CorrelationPair>,
}

impl CorrelationMatrix {
    /// Coefficient for a pair of column names, if both are present.
    pub fn get(&self, left: &str, right: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == left)?;
        let j = self.columns.iter().position(|c| c == right)?;
        Some(self.values[i][j])
    }
}

/// Outcome of the correlation analyzer.
///
/// Fewer than two numeric columns is an expected condition, not an error,
/// so it is its own variant rather than a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CorrelationResult {
    Computed(CorrelationMatrix),
    NotEnoughNumericColumns,
}

impl CorrelationResult {
    pub fn as_matrix(&self) -> Option<&CorrelationMatrix> {
        match self {
            CorrelationResult::Computed(matrix) => Some(matrix),
            CorrelationResult::NotEnoughNumericColumns => None,
        }
    }
}
